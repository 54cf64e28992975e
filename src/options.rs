//! Output settings applied when rendering arguments.
//!
//! This module provides the configuration bundle a [`Formatter`](crate::Formatter)
//! copies into every rendering operation:
//!
//! - [`FmtFlags`]: Radix, float notation and sign/prefix switches
//! - [`Locale`]: Decimal point and digit grouping conventions for numbers
//! - [`OutputSettings`]: Flags, precision and locale together
//!
//! ## Examples
//!
//! ```rust
//! use percent_format::{FmtFlags, Locale, OutputSettings, to_string_with_settings};
//!
//! // Hexadecimal with a base prefix
//! let settings = OutputSettings::new().with_flags(FmtFlags::HEX | FmtFlags::SHOWBASE);
//! assert_eq!(to_string_with_settings(&255, &settings), "0xff");
//!
//! // Two fixed decimals, German conventions
//! let settings = OutputSettings::new()
//!     .with_flags(FmtFlags::default() | FmtFlags::FIXED)
//!     .with_precision(2)
//!     .with_locale(Locale::named("de_DE").unwrap());
//! assert_eq!(to_string_with_settings(&1234.5, &settings), "1.234,50");
//! ```

use crate::{Error, Result};
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Stream-style format flags.
    ///
    /// The radix lives in [`FmtFlags::BASEFIELD`] and the float notation in
    /// [`FmtFlags::FLOATFIELD`]; use
    /// [`Formatter::setf_masked`](crate::Formatter::setf_masked) to switch
    /// one of those fields without disturbing the rest.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FmtFlags: u32 {
        /// Accepted for compatibility; booleans always render as words.
        const BOOLALPHA  = 1 << 0;
        const DEC        = 1 << 1;
        const FIXED      = 1 << 2;
        const HEX        = 1 << 3;
        const OCT        = 1 << 4;
        const SCIENTIFIC = 1 << 5;
        /// `0x` / `0` prefix on non-zero hexadecimal and octal integers.
        const SHOWBASE   = 1 << 6;
        /// Keep the decimal point and trailing zeros of floats.
        const SHOWPOINT  = 1 << 7;
        /// `+` on non-negative signed numbers.
        const SHOWPOS    = 1 << 8;
        /// Input-side flag; carried but has no effect on output.
        const SKIPWS     = 1 << 9;
        /// Capital hex digits, `0X`, `E` exponents, `INF` and `NAN`.
        const UPPERCASE  = 1 << 10;
        /// Input-side flag; carried but has no effect on output.
        const UNITBUF    = 1 << 11;

        const BASEFIELD  = Self::DEC.bits() | Self::OCT.bits() | Self::HEX.bits();
        const FLOATFIELD = Self::FIXED.bits() | Self::SCIENTIFIC.bits();
    }
}

impl Default for FmtFlags {
    fn default() -> Self {
        FmtFlags::SKIPWS | FmtFlags::DEC
    }
}

/// Integer radix selected by [`FmtFlags::BASEFIELD`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hexadecimal,
    Octal,
}

/// Float notation selected by [`FmtFlags::FLOATFIELD`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatNotation {
    /// Shortest of fixed and scientific, `precision` significant digits.
    General,
    Fixed,
    Scientific,
    Hex,
}

impl FmtFlags {
    /// Returns the radix for integers. Anything but a lone `OCT` or `HEX`
    /// in the base field means decimal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use percent_format::{FmtFlags, options::Radix};
    ///
    /// assert_eq!(FmtFlags::default().radix(), Radix::Decimal);
    /// assert_eq!(FmtFlags::HEX.radix(), Radix::Hexadecimal);
    /// assert_eq!((FmtFlags::HEX | FmtFlags::OCT).radix(), Radix::Decimal);
    /// ```
    #[must_use]
    pub fn radix(self) -> Radix {
        let field = self & FmtFlags::BASEFIELD;
        if field == FmtFlags::HEX {
            Radix::Hexadecimal
        } else if field == FmtFlags::OCT {
            Radix::Octal
        } else {
            Radix::Decimal
        }
    }

    /// Returns the float notation. Both `FIXED` and `SCIENTIFIC` together
    /// select hexadecimal floats.
    #[must_use]
    pub fn float_notation(self) -> FloatNotation {
        let field = self & FmtFlags::FLOATFIELD;
        if field == FmtFlags::FLOATFIELD {
            FloatNotation::Hex
        } else if field == FmtFlags::FIXED {
            FloatNotation::Fixed
        } else if field == FmtFlags::SCIENTIFIC {
            FloatNotation::Scientific
        } else {
            FloatNotation::General
        }
    }
}

/// Numeric conventions of a named locale.
///
/// Only the parts that affect number output are modelled: the decimal point
/// and an optional thousands separator applied every `group_size` digits of
/// the integral part. Text is never localised.
///
/// # Examples
///
/// ```rust
/// use percent_format::Locale;
///
/// let classic = Locale::classic();
/// assert_eq!(classic.name(), "C");
/// assert_eq!(classic.decimal_point(), '.');
///
/// let german: Locale = "de_DE.UTF-8".parse().unwrap();
/// assert_eq!(german.decimal_point(), ',');
/// assert_eq!(german.thousands_sep(), Some('.'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    name: String,
    decimal_point: char,
    thousands_sep: Option<char>,
    group_size: usize,
}

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

// language_TERRITORY -> (decimal point, thousands separator)
const KNOWN_LOCALES: &[(&str, char, Option<char>)] = &[
    ("C", '.', None),
    ("POSIX", '.', None),
    ("en_US", '.', Some(',')),
    ("en_GB", '.', Some(',')),
    ("en_AU", '.', Some(',')),
    ("en_CA", '.', Some(',')),
    ("ja_JP", '.', Some(',')),
    ("zh_CN", '.', Some(',')),
    ("de_DE", ',', Some('.')),
    ("de_AT", ',', Some('.')),
    ("es_ES", ',', Some('.')),
    ("it_IT", ',', Some('.')),
    ("nl_NL", ',', Some('.')),
    ("pt_BR", ',', Some('.')),
    ("de_CH", '.', Some('\'')),
    ("fr_FR", ',', Some(NARROW_NBSP)),
    ("ru_RU", ',', Some(NBSP)),
    ("uk_UA", ',', Some(NBSP)),
    ("pl_PL", ',', Some(NBSP)),
    ("cs_CZ", ',', Some(NBSP)),
    ("sv_SE", ',', Some(NBSP)),
    ("fi_FI", ',', Some(NBSP)),
    ("nb_NO", ',', Some(NBSP)),
];

impl Locale {
    /// The classic `"C"` locale: `.` decimal point, no grouping.
    #[must_use]
    pub fn classic() -> Self {
        Locale {
            name: "C".to_string(),
            decimal_point: '.',
            thousands_sep: None,
            group_size: 3,
        }
    }

    /// Builds a locale with arbitrary conventions and no grouping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use percent_format::Locale;
    ///
    /// let swiss_money = Locale::custom("accounting", '.').with_grouping('\'', 3);
    /// assert_eq!(swiss_money.thousands_sep(), Some('\''));
    /// ```
    #[must_use]
    pub fn custom(name: &str, decimal_point: char) -> Self {
        Locale {
            name: name.to_string(),
            decimal_point,
            thousands_sep: None,
            group_size: 3,
        }
    }

    /// Sets the thousands separator and the number of digits per group.
    /// A group size of zero disables grouping.
    #[must_use]
    pub fn with_grouping(mut self, separator: char, group_size: usize) -> Self {
        self.thousands_sep = if group_size == 0 { None } else { Some(separator) };
        self.group_size = group_size;
        self
    }

    /// Looks up a locale by its POSIX name. Encoding (`.UTF-8`) and
    /// modifier (`@euro`) suffixes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] when no conventions are known for
    /// the name.
    pub fn named(name: &str) -> Result<Self> {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        KNOWN_LOCALES
            .iter()
            .find(|(known, _, _)| *known == base)
            .map(|&(known, decimal_point, thousands_sep)| Locale {
                name: known.to_string(),
                decimal_point,
                thousands_sep,
                group_size: 3,
            })
            .ok_or_else(|| Error::unknown_locale(name))
    }

    /// Selects the locale named by `LC_ALL`, `LC_NUMERIC` or `LANG`, first
    /// non-empty wins. Falls back to [`Locale::classic`] when none is set or
    /// the name is unknown.
    #[must_use]
    pub fn from_env() -> Self {
        let name = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());

        match name {
            Some(name) => Locale::named(&name).unwrap_or_else(|err| {
                log::debug!("{err}, falling back to the classic locale");
                Locale::classic()
            }),
            None => Locale::classic(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }

    #[must_use]
    pub fn thousands_sep(&self) -> Option<char> {
        self.thousands_sep
    }

    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::classic()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::named(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Flags, precision and locale used for one rendering pass.
///
/// # Examples
///
/// ```rust
/// use percent_format::{FmtFlags, OutputSettings};
///
/// let settings = OutputSettings::new();
/// assert_eq!(settings.precision, 6);
/// assert_eq!(settings.flags, FmtFlags::SKIPWS | FmtFlags::DEC);
///
/// let settings = OutputSettings::new().with_precision(3);
/// assert_eq!(settings.precision, 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OutputSettings {
    pub flags: FmtFlags,
    /// Significant digits in general notation, fraction digits in fixed and
    /// scientific notation.
    pub precision: usize,
    pub locale: Locale,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            flags: FmtFlags::default(),
            precision: 6,
            locale: Locale::classic(),
        }
    }
}

impl OutputSettings {
    /// Creates default settings (classic locale, `SKIPWS | DEC`, precision 6).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FmtFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
