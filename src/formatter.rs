//! The `%?` template engine.
//!
//! A [`Formatter`] owns the [`OutputSettings`] and fills templates with
//! rendered arguments:
//!
//! - `%?` is replaced by the next argument, left to right
//! - `%%?` is the literal text `%?` and consumes no argument
//! - placeholders without an argument become `?`
//! - arguments without a placeholder are rendered and dropped
//!
//! No template is malformed and no argument list is the wrong length, so
//! formatting never fails.
//!
//! ## Examples
//!
//! ```rust
//! use percent_format::{format_with, Formatter};
//!
//! let formatter = Formatter::new();
//!
//! let text = format_with!(formatter, "Number: %?, string: %?", 100.1, "abc");
//! assert_eq!(text, "Number: 100.1, string: abc");
//!
//! let text = format_with!(formatter, "%?, %?, %?", 1);
//! assert_eq!(text, "1, ?, ?");
//!
//! let text = format_with!(formatter, "100%%? sure");
//! assert_eq!(text, "100%? sure");
//! ```

use crate::{FmtFlags, Locale, Output, OutputSettings, Render};
use std::fmt;

/// The substitution site.
pub const PLACEHOLDER: &str = "%?";

/// Placed before [`PLACEHOLDER`] to emit it literally.
pub const ESCAPE: char = '%';

/// Emitted for a missing argument or a value with no textual form.
pub const UNKNOWN_MARKER: char = '?';

/// Fills `%?` templates using stream-style output settings.
///
/// Settings changes apply to the next call to [`Formatter::format`]; strings
/// already returned are never affected. Setters return the previous value
/// so callers can restore it.
///
/// A `Formatter` has no interior locking. Share it read-only, or give each
/// thread its own.
///
/// # Examples
///
/// ```rust
/// use percent_format::{FmtFlags, Formatter};
///
/// let mut formatter = Formatter::new();
/// let previous = formatter.setf_masked(FmtFlags::HEX, FmtFlags::BASEFIELD);
/// formatter.setf(FmtFlags::SHOWBASE);
/// assert_eq!(formatter.format("%?", &[&255]), "0xff");
///
/// formatter.set_flags(previous);
/// assert_eq!(formatter.format("%?", &[&255]), "255");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Formatter {
    settings: OutputSettings,
}

impl Formatter {
    /// Creates a formatter with default settings (classic locale,
    /// `SKIPWS | DEC`, precision 6).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: OutputSettings) -> Self {
        Formatter { settings }
    }

    /// Renders every argument, then substitutes them into `template`.
    ///
    /// With no arguments and no placeholder the template comes back
    /// unchanged without rendering or scanning anything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use percent_format::Formatter;
    ///
    /// let formatter = Formatter::new();
    /// let fruits = vec!["apple", "pear", "banana"];
    /// assert_eq!(
    ///     formatter.format("List of %? elements: %?", &[&fruits.len(), &fruits]),
    ///     "List of 3 elements: [apple, pear, banana]"
    /// );
    /// assert_eq!(formatter.format("No args", &[]), "No args");
    /// ```
    #[must_use]
    pub fn format(&self, template: &str, args: &[&dyn Render]) -> String {
        if args.is_empty() && !template.contains(PLACEHOLDER) {
            return template.to_string();
        }

        let mut out = String::with_capacity(template.len() + args.len() * 8);
        self.format_to(&mut out, template, args);
        out
    }

    /// Like [`Formatter::format`], appending to an existing buffer.
    pub fn format_to(&self, out: &mut String, template: &str, args: &[&dyn Render]) {
        let rendered: Vec<String> = args.iter().map(|arg| arg.render(&self.settings)).collect();
        substitute(out, template, &rendered);
    }

    /// Renders a single value with this formatter's settings.
    #[must_use]
    pub fn render<T>(&self, value: &T) -> String
    where
        T: ?Sized + Render,
    {
        value.render(&self.settings)
    }

    /// Wraps `value` so it renders through its `Display` impl.
    ///
    /// ```rust
    /// use percent_format::Formatter;
    ///
    /// let formatter = Formatter::new();
    /// let tuple_like = "(1, 2)";
    /// assert_eq!(formatter.format("%?", &[&formatter.output(tuple_like)]), "(1, 2)");
    /// ```
    #[must_use]
    pub fn output<T: fmt::Display>(&self, value: T) -> Output<T> {
        Output(value)
    }

    #[must_use]
    pub fn settings(&self) -> &OutputSettings {
        &self.settings
    }

    #[must_use]
    pub fn flags(&self) -> FmtFlags {
        self.settings.flags
    }

    /// Replaces all flags.
    pub fn set_flags(&mut self, flags: FmtFlags) -> FmtFlags {
        std::mem::replace(&mut self.settings.flags, flags)
    }

    /// Turns on `flags`, leaving the others as they are.
    pub fn setf(&mut self, flags: FmtFlags) -> FmtFlags {
        let previous = self.settings.flags;
        self.settings.flags.insert(flags);
        previous
    }

    /// Clears the flags under `mask`, then sets those of `flags` that lie
    /// under `mask`.
    pub fn setf_masked(&mut self, flags: FmtFlags, mask: FmtFlags) -> FmtFlags {
        let previous = self.settings.flags;
        self.settings.flags = (previous - mask) | (flags & mask);
        previous
    }

    /// Turns off `flags`.
    pub fn unsetf(&mut self, flags: FmtFlags) {
        self.settings.flags.remove(flags);
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.settings.locale
    }

    /// Replaces the locale used for numbers.
    pub fn imbue(&mut self, locale: Locale) -> Locale {
        std::mem::replace(&mut self.settings.locale, locale)
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.settings.precision
    }

    pub fn set_precision(&mut self, precision: usize) -> usize {
        std::mem::replace(&mut self.settings.precision, precision)
    }
}

// Single left-to-right pass; the i-th unescaped placeholder takes rendered[i].
fn substitute(out: &mut String, template: &str, rendered: &[String]) {
    let mut last = 0;
    let mut next_arg = 0;

    for (pos, _) in template.match_indices(PLACEHOLDER) {
        if template[..pos].ends_with(ESCAPE) {
            out.push_str(&template[last..pos - ESCAPE.len_utf8()]);
            out.push_str(PLACEHOLDER);
        } else {
            out.push_str(&template[last..pos]);
            match rendered.get(next_arg) {
                Some(text) => out.push_str(text),
                None => out.push(UNKNOWN_MARKER),
            }
            next_arg += 1;
        }
        last = pos + PLACEHOLDER.len();
    }
    out.push_str(&template[last..]);

    if next_arg != rendered.len() {
        log::trace!(
            "template has {} placeholders for {} arguments",
            next_arg,
            rendered.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(template: &str, rendered: &[&str]) -> String {
        let rendered: Vec<String> = rendered.iter().map(|s| s.to_string()).collect();
        let mut out = String::new();
        substitute(&mut out, template, &rendered);
        out
    }

    #[test]
    fn test_positional_substitution() {
        assert_eq!(fill("%? and %?", &["a", "b"]), "a and b");
        assert_eq!(fill("%?%?", &["a", "b"]), "ab");
        assert_eq!(fill("<%?>", &["x"]), "<x>");
    }

    #[test]
    fn test_underflow_uses_marker() {
        assert_eq!(fill("%?, %?, %?", &["1"]), "1, ?, ?");
        assert_eq!(fill("%?", &[]), "?");
    }

    #[test]
    fn test_overflow_is_dropped() {
        assert_eq!(fill("%?", &["1", "2", "3"]), "1");
        assert_eq!(fill("plain", &["1"]), "plain");
    }

    #[test]
    fn test_escaped_placeholder() {
        assert_eq!(fill("100%%?", &[]), "100%?");
        assert_eq!(fill("%%? then %?", &["x"]), "%? then x");
        assert_eq!(fill("%%%?", &["x"]), "%%?");
    }

    #[test]
    fn test_lone_escape_characters_are_literal() {
        assert_eq!(fill("50% of %?", &["x"]), "50% of x");
        assert_eq!(fill("%", &[]), "%");
        assert_eq!(fill("?%", &[]), "?%");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        assert_eq!(fill("%? %?", &["%?", "b"]), "%? b");
    }

    #[test]
    fn test_multibyte_template() {
        assert_eq!(fill("größe: %? €", &["3"]), "größe: 3 €");
    }

    #[test]
    fn test_zero_argument_fast_path() {
        let formatter = Formatter::new();
        assert_eq!(formatter.format("No args", &[]), "No args");
        assert_eq!(formatter.format("", &[]), "");
        assert_eq!(formatter.format("100%%?", &[]), "100%?");
    }

    #[test]
    fn test_format_to_appends() {
        let formatter = Formatter::new();
        let mut out = String::from("> ");
        formatter.format_to(&mut out, "%?", &[&42]);
        assert_eq!(out, "> 42");
    }

    #[test]
    fn test_setters_return_previous() {
        let mut formatter = Formatter::new();

        assert_eq!(formatter.set_precision(2), 6);
        assert_eq!(formatter.precision(), 2);

        let previous = formatter.imbue(Locale::named("de_DE").unwrap());
        assert_eq!(previous, Locale::classic());
        assert_eq!(formatter.locale().name(), "de_DE");

        assert_eq!(formatter.set_flags(FmtFlags::HEX), FmtFlags::default());
        assert_eq!(formatter.setf(FmtFlags::SHOWBASE), FmtFlags::HEX);
        assert_eq!(formatter.flags(), FmtFlags::HEX | FmtFlags::SHOWBASE);
    }

    #[test]
    fn test_setf_masked_only_touches_mask() {
        let mut formatter = Formatter::new();
        formatter.setf(FmtFlags::SHOWPOS);

        let previous =
            formatter.setf_masked(FmtFlags::OCT | FmtFlags::UPPERCASE, FmtFlags::BASEFIELD);
        assert_eq!(previous, FmtFlags::default() | FmtFlags::SHOWPOS);
        assert_eq!(
            formatter.flags(),
            FmtFlags::SKIPWS | FmtFlags::OCT | FmtFlags::SHOWPOS
        );
    }

    #[test]
    fn test_unsetf() {
        let mut formatter = Formatter::new();
        formatter.unsetf(FmtFlags::SKIPWS);
        assert_eq!(formatter.flags(), FmtFlags::DEC);
    }

    #[test]
    fn test_settings_apply_to_later_calls_only() {
        let mut formatter = Formatter::new();
        let before = formatter.format("%?", &[&3.14159]);
        formatter.set_precision(3);
        let after = formatter.format("%?", &[&3.14159]);
        assert_eq!(before, "3.14159");
        assert_eq!(after, "3.14");
    }
}
