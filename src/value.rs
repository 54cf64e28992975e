//! Renderable arguments.
//!
//! Every `T: Serialize` is a formatting argument through the blanket
//! [`Render`] impl, so a heterogeneous argument list is simply a slice of
//! `&dyn Render`. Two wrappers steer the rendering rule for values whose
//! serde shape does not say what the caller means:
//!
//! - [`Output`]: render through the value's own `Display` impl, even when the
//!   value would otherwise look like a pair or a sequence
//! - [`Opaque`]: render as the unknown marker `?`, for types that have no
//!   textual form at all
//!
//! ## Examples
//!
//! ```rust
//! use percent_format::{format, Output, Opaque};
//! use std::fmt;
//!
//! struct Version(u32, u32);
//!
//! impl fmt::Display for Version {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "v{}.{}", self.0, self.1)
//!     }
//! }
//!
//! struct Socket;
//!
//! let text = format("%? on %?", &[&Output(Version(1, 2)), &Opaque(Socket)]);
//! assert_eq!(text, "v1.2 on ?");
//! ```

use crate::ser::Renderer;
use crate::{OutputSettings, Result, UNKNOWN_MARKER};
use serde::{Serialize, Serializer};
use std::fmt;

/// A value that can be substituted into a template.
///
/// Implemented for every `T: Serialize`; the trait exists so arguments of
/// different types can share one slice.
pub trait Render {
    /// Renders the value, reporting a failing `Serialize` impl.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the value's `Serialize` impl.
    fn try_render(&self, settings: &OutputSettings) -> Result<String>;

    /// Renders the value, degrading to `?` if its `Serialize` impl fails.
    fn render(&self, settings: &OutputSettings) -> String {
        match self.try_render(settings) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("argument rendered as unknown marker: {err}");
                UNKNOWN_MARKER.to_string()
            }
        }
    }
}

impl<T> Render for T
where
    T: ?Sized + Serialize,
{
    fn try_render(&self, settings: &OutputSettings) -> Result<String> {
        let mut renderer = Renderer::new(settings);
        self.serialize(&mut renderer)?;
        Ok(renderer.into_inner())
    }
}

/// Forces a value through its `Display` impl.
///
/// When the `Display` text is a plain number it is formatted exactly like a
/// native number under the active settings. Any other text is written
/// verbatim, whatever the precision or float field.
///
/// # Examples
///
/// ```rust
/// use percent_format::{to_string, Output};
///
/// // A pair would render as `{1 : 2}`
/// assert_eq!(to_string(&Output("(1, 2)")), "(1, 2)");
/// assert_eq!(to_string(&Output(1.0 / 3.0)), "0.333333");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Output<T>(pub T);

impl<T: fmt::Display> fmt::Display for Output<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: fmt::Display> Serialize for Output<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

/// Renders any value as the unknown marker `?`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Opaque<T>(pub T);

impl<T> Serialize for Opaque<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit_struct("Opaque")
    }
}
