//! # percent_format
//!
//! A lenient string formatter with a single universal placeholder, `%?`.
//!
//! ## What does it do?
//!
//! Every argument is rendered to text according to what it is, then the
//! rendered texts replace the `%?` placeholders of a template from left to
//! right. Arguments are anything that implements `serde::Serialize`, so
//! numbers, strings, collections, tuples and maps all work out of the box.
//!
//! ## Key Features
//!
//! - **Capability-based rendering**: booleans as `true`/`false`, text
//!   verbatim, pairs as `{A : B}`, sequences as `[a, b, c]`, anything without
//!   a textual form as `?`
//! - **Stream-style numbers**: radix, precision, float notation, sign and
//!   base prefixes, locale decimal point and digit grouping
//! - **Never fails**: missing arguments render as `?`, extra arguments are
//!   dropped, unsupported values render as `?`
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use percent_format::pformat;
//!
//! assert_eq!(
//!     pformat!("Number: %?, string: %?", 100.1, "abc"),
//!     "Number: 100.1, string: abc"
//! );
//!
//! let fruits = vec!["apple", "pear", "banana"];
//! assert_eq!(
//!     pformat!("List of %? elements: %?", fruits.len(), fruits),
//!     "List of 3 elements: [apple, pear, banana]"
//! );
//!
//! // Placeholders without arguments and escaped placeholders
//! assert_eq!(pformat!("%?, %?, %?", 1), "1, ?, ?");
//! assert_eq!(pformat!("100%%?"), "100%?");
//! ```
//!
//! ### Output settings
//!
//! ```rust
//! use percent_format::{format_with, FmtFlags, Formatter, Locale};
//!
//! let mut formatter = Formatter::new();
//! formatter.setf_masked(FmtFlags::FIXED, FmtFlags::FLOATFIELD);
//! formatter.set_precision(2);
//! formatter.imbue(Locale::named("en_US").unwrap());
//!
//! assert_eq!(format_with!(formatter, "Total: %?", 1234567.891), "Total: 1,234,567.89");
//! ```
//!
//! ## Rendering Rules
//!
//! Checked in this order, composite values recursing through them:
//!
//! | Value                                     | Rendered as          |
//! |-------------------------------------------|----------------------|
//! | `bool`                                    | `true` / `false`     |
//! | strings, `char`, numbers                  | verbatim / numeric   |
//! | 2-tuples, `[T; 2]`, map entries           | `{A : B}`            |
//! | [`Output`] and `collect_str` types        | their `Display` text |
//! | `Vec`, slices, sets, maps, other tuples   | `[a, b, c]`          |
//! | structs, `()`, `None`, [`Opaque`]         | `?`                  |
//!
//! Serde describes fixed arrays as tuples, so a two-element array is a pair
//! and tuples of any other length are sequences rather than `?`. Slice an
//! array (`&array[..]`) for the sequence form. `Display` text that is a plain
//! number is formatted like a native number under the active settings.

pub mod error;
pub mod formatter;
pub mod macros;
mod number;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use formatter::{Formatter, ESCAPE, PLACEHOLDER, UNKNOWN_MARKER};
pub use options::{FmtFlags, Locale, OutputSettings};
pub use ser::Renderer;
pub use value::{Opaque, Output, Render};

use serde::Serialize;

/// Fills `template` using default settings.
///
/// # Examples
///
/// ```rust
/// use percent_format::format;
///
/// assert_eq!(format("%? + %?", &[&1, &2.5]), "1 + 2.5");
/// assert_eq!(format("%?", &[&1, &2, &3]), "1");
/// ```
#[must_use]
pub fn format(template: &str, args: &[&dyn Render]) -> String {
    Formatter::new().format(template, args)
}

/// Renders a single value with default settings.
///
/// # Examples
///
/// ```rust
/// use percent_format::to_string;
///
/// assert_eq!(to_string(&(2.0, true)), "{2 : true}");
/// assert_eq!(to_string(&vec![1, 2, 3]), "[1, 2, 3]");
/// ```
#[must_use]
pub fn to_string<T>(value: &T) -> String
where
    T: ?Sized + Serialize,
{
    to_string_with_settings(value, &OutputSettings::default())
}

/// Renders a single value with custom settings.
///
/// # Examples
///
/// ```rust
/// use percent_format::{to_string_with_settings, FmtFlags, OutputSettings};
///
/// let settings = OutputSettings::new().with_flags(FmtFlags::OCT | FmtFlags::SHOWBASE);
/// assert_eq!(to_string_with_settings(&[8, 9], &settings), "{010 : 011}");
/// ```
#[must_use]
pub fn to_string_with_settings<T>(value: &T, settings: &OutputSettings) -> String
where
    T: ?Sized + Serialize,
{
    value.render(settings)
}

/// Renders a single value, reporting a failing `Serialize` impl instead of
/// substituting `?`.
///
/// # Errors
///
/// Returns the error raised by the value's `Serialize` impl.
pub fn try_render<T>(value: &T, settings: &OutputSettings) -> Result<String>
where
    T: ?Sized + Serialize,
{
    value.try_render(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_defaults() {
        assert_eq!(
            format("Number: %?, string: %?", &[&100.1, &"abc"]),
            "Number: 100.1, string: abc"
        );
    }

    #[test]
    fn test_map_of_doubles() {
        let map: BTreeMap<i32, bool> = [(2, true), (4, false), (8, true)].into_iter().collect();
        assert_eq!(
            format("Map of %? elements: %?", &[&map.len(), &map]),
            "Map of 3 elements: [{2 : true}, {4 : false}, {8 : true}]"
        );
    }

    #[test]
    fn test_try_render_ok() {
        assert_eq!(
            try_render(&vec![true], &OutputSettings::new()),
            Ok("[true]".to_string())
        );
    }
}
