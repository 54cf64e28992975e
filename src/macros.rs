/// Formats with an explicit [`Formatter`](crate::Formatter), taking the
/// arguments variadically.
///
/// ```rust
/// use percent_format::{format_with, Formatter};
///
/// let formatter = Formatter::new();
/// let map = vec![(2.0, true), (4.5, false), (8.0, true)];
/// assert_eq!(
///     format_with!(formatter, "Map of %? elements: %?", map.len(), map),
///     "Map of 3 elements: [{2 : true}, {4.5 : false}, {8 : true}]"
/// );
/// ```
#[macro_export]
macro_rules! format_with {
    ($formatter:expr, $template:expr $(,)?) => {
        $formatter.format($template, &[])
    };

    ($formatter:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $formatter.format($template, &[$(&$arg as &dyn $crate::Render),+])
    };
}

/// Formats with default settings, taking the arguments variadically.
///
/// Arguments render by their serde shape, and serde does not tell a fixed
/// array from a tuple: `[a, b]` renders as the pair `{a : b}`. Pass a slice
/// to get the sequence form.
///
/// ```rust
/// use percent_format::pformat;
///
/// assert_eq!(pformat!("%? is %?", "sky", "blue"), "sky is blue");
/// assert_eq!(pformat!("%?", true), "true");
///
/// let fruits = ["apple", "pear"];
/// assert_eq!(pformat!("%?", fruits), "{apple : pear}");
/// assert_eq!(pformat!("%?", &fruits[..]), "[apple, pear]");
/// ```
#[macro_export]
macro_rules! pformat {
    ($template:expr $(,)?) => {
        $crate::format($template, &[])
    };

    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$(&$arg as &dyn $crate::Render),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Formatter, Output};

    #[test]
    fn test_format_with_mixed_arguments() {
        let formatter = Formatter::new();
        let num_i = 10;
        let num_d = 20.5;
        assert_eq!(
            format_with!(
                formatter,
                "Integer value: %?, double value: %?, wrong odd arguments: %?, %?, %?",
                num_i,
                num_d
            ),
            "Integer value: 10, double value: 20.5, wrong odd arguments: ?, ?, ?"
        );
    }

    #[test]
    fn test_format_with_trailing_comma() {
        let formatter = Formatter::new();
        assert_eq!(format_with!(formatter, "%?-%?", 1, 2,), "1-2");
    }

    #[test]
    fn test_format_with_temporaries() {
        let formatter = Formatter::new();
        assert_eq!(
            format_with!(formatter, "%? %?", Output(1.5), vec!['a', 'b']),
            "1.5 [a, b]"
        );
    }

    #[test]
    fn test_pformat_without_arguments() {
        assert_eq!(pformat!("No args"), "No args");
        assert_eq!(pformat!("100%%?"), "100%?");
    }
}
