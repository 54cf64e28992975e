//! Numeric-to-text conversion under [`OutputSettings`].
//!
//! Integers honour the radix, `SHOWBASE`, `SHOWPOS` and `UPPERCASE` flags.
//! Floats follow the printf family: general notation (`%g`) by default,
//! `%f` with [`FmtFlags::FIXED`], `%e` with [`FmtFlags::SCIENTIFIC`] and `%a`
//! when both are set. The locale then swaps the decimal point and groups the
//! integral digits. Precision is capped at [`MAX_PRECISION`], the largest
//! value `std::fmt` accepts.
//!
//! ```rust
//! use percent_format::{to_string, to_string_with_settings, FmtFlags, OutputSettings};
//!
//! assert_eq!(to_string(&100.1), "100.1");
//! assert_eq!(to_string(&2.0), "2");
//! assert_eq!(to_string(&1e20), "1e+20");
//!
//! let hex = OutputSettings::new().with_flags(FmtFlags::HEX);
//! assert_eq!(to_string_with_settings(&-1i16, &hex), "ffff");
//! ```

use crate::options::{FloatNotation, Radix};
use crate::{FmtFlags, Locale, OutputSettings};

/// Precision used in place of anything larger.
pub(crate) const MAX_PRECISION: usize = u16::MAX as usize;

/// Writes a signed integer that is `bits` wide in its source type.
///
/// Negative values in hexadecimal or octal are printed as their two's
/// complement at that width, without a sign.
pub(crate) fn write_signed(out: &mut String, value: i128, bits: u32, settings: &OutputSettings) {
    let flags = settings.flags;
    match flags.radix() {
        Radix::Decimal => {
            if value < 0 {
                out.push('-');
            } else if flags.contains(FmtFlags::SHOWPOS) {
                out.push('+');
            }
            write_digits(out, value.unsigned_abs(), settings);
        }
        _ => {
            let mask = if bits >= 128 {
                u128::MAX
            } else {
                (1u128 << bits) - 1
            };
            write_digits(out, (value as u128) & mask, settings);
        }
    }
}

/// Writes an unsigned integer. `SHOWPOS` never applies to unsigned values.
pub(crate) fn write_unsigned(out: &mut String, value: u128, settings: &OutputSettings) {
    write_digits(out, value, settings);
}

fn write_digits(out: &mut String, magnitude: u128, settings: &OutputSettings) {
    let flags = settings.flags;
    let upper = flags.contains(FmtFlags::UPPERCASE);
    let show_base = flags.contains(FmtFlags::SHOWBASE) && magnitude != 0;

    let digits = match flags.radix() {
        Radix::Decimal => magnitude.to_string(),
        Radix::Hexadecimal => {
            if show_base {
                out.push_str(if upper { "0X" } else { "0x" });
            }
            if upper {
                format!("{:X}", magnitude)
            } else {
                format!("{:x}", magnitude)
            }
        }
        Radix::Octal => {
            if show_base {
                out.push('0');
            }
            format!("{:o}", magnitude)
        }
    };

    push_grouped(out, &digits, &settings.locale);
}

/// Writes a float in the notation selected by the float field.
pub(crate) fn write_float(out: &mut String, value: f64, settings: &OutputSettings) {
    let flags = settings.flags;
    let upper = flags.contains(FmtFlags::UPPERCASE);
    let show_point = flags.contains(FmtFlags::SHOWPOINT);

    if value.is_sign_negative() {
        out.push('-');
    } else if flags.contains(FmtFlags::SHOWPOS) {
        out.push('+');
    }

    let magnitude = value.abs();
    if magnitude.is_nan() {
        out.push_str(if upper { "NAN" } else { "nan" });
        return;
    }
    if magnitude.is_infinite() {
        out.push_str(if upper { "INF" } else { "inf" });
        return;
    }

    let precision = settings.precision.min(MAX_PRECISION);
    let body = match flags.float_notation() {
        FloatNotation::General => general(magnitude, precision, show_point, upper),
        FloatNotation::Fixed => fixed(magnitude, precision, show_point),
        FloatNotation::Scientific => scientific(magnitude, precision, show_point, upper),
        FloatNotation::Hex => {
            out.push_str(&hexadecimal(magnitude, upper));
            return;
        }
    };

    localize(out, &body, &settings.locale);
}

/// Writes the `Display` text of a custom type as a native number when it is
/// one, returning `false` (and writing nothing) when it is not.
///
/// Integer text keeps its digits exactly; negative values are taken to be
/// 64 bits wide for hexadecimal and octal unless they need more. Integer
/// text too long for 128 bits, `inf`, `nan` and anything that is not a plain
/// number stay verbatim.
pub(crate) fn write_numeric_text(out: &mut String, text: &str, settings: &OutputSettings) -> bool {
    let looks_numeric = text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !looks_numeric {
        return false;
    }

    if text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
        return match text.parse::<f64>() {
            Ok(value) => {
                write_float(out, value, settings);
                true
            }
            Err(_) => false,
        };
    }

    if let Ok(value) = text.parse::<i128>() {
        let bits = if i64::try_from(value).is_ok() { 64 } else { 128 };
        write_signed(out, value, bits, settings);
        true
    } else if let Ok(value) = text.parse::<u128>() {
        write_unsigned(out, value, settings);
        true
    } else {
        false
    }
}

// %g: `precision` significant digits, scientific only for very small or
// very large exponents.
fn general(magnitude: f64, precision: usize, show_point: bool, upper: bool) -> String {
    let significant = precision.clamp(1, MAX_PRECISION);
    let exponent = if magnitude == 0.0 {
        0
    } else {
        decimal_exponent(magnitude, significant - 1)
    };

    // significant <= u16::MAX, so the i64 arithmetic cannot overflow
    let significant_digits = significant as i64;
    let exponent = i64::from(exponent);
    let mut body = if exponent < -4 || exponent >= significant_digits {
        scientific(magnitude, significant - 1, show_point, upper)
    } else {
        let fraction_digits = (significant_digits - 1 - exponent) as usize;
        fixed(magnitude, fraction_digits, show_point)
    };

    if !show_point {
        strip_trailing_zeros(&mut body);
    }
    body
}

fn fixed(magnitude: f64, precision: usize, show_point: bool) -> String {
    let mut body = format!("{:.*}", precision.min(MAX_PRECISION), magnitude);
    if show_point && precision == 0 {
        body.push('.');
    }
    body
}

fn scientific(magnitude: f64, precision: usize, show_point: bool, upper: bool) -> String {
    let raw = format!("{:.*e}", precision.min(MAX_PRECISION), magnitude);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut body = String::with_capacity(raw.len() + 3);
    body.push_str(mantissa);
    if show_point && precision == 0 {
        body.push('.');
    }
    body.push(if upper { 'E' } else { 'e' });
    body.push(if exponent < 0 { '-' } else { '+' });
    body.push_str(&format!("{:02}", exponent.unsigned_abs()));
    body
}

// Exponent of the leading digit after rounding to `precision` fraction digits.
fn decimal_exponent(magnitude: f64, precision: usize) -> i32 {
    let raw = format!("{:.*e}", precision.min(MAX_PRECISION), magnitude);
    raw.split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

fn strip_trailing_zeros(body: &mut String) {
    let exponent_at = body.find(['e', 'E']).unwrap_or(body.len());
    let (mantissa, exponent) = body.split_at(exponent_at);
    if !mantissa.contains('.') {
        return;
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    *body = format!("{}{}", trimmed, exponent);
}

// %a: precision is ignored, as iostreams do for hexfloat.
fn hexadecimal(magnitude: f64, upper: bool) -> String {
    let text = if magnitude == 0.0 {
        "0x0p+0".to_string()
    } else {
        let bits = magnitude.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);
        let (lead, exponent) = if biased == 0 {
            (0, -1022)
        } else {
            (1, biased - 1023)
        };

        let fraction_digits = format!("{:013x}", fraction);
        let fraction_digits = fraction_digits.trim_end_matches('0');
        if fraction_digits.is_empty() {
            format!("0x{}p{:+}", lead, exponent)
        } else {
            format!("0x{}.{}p{:+}", lead, fraction_digits, exponent)
        }
    };

    if upper {
        text.to_uppercase()
    } else {
        text
    }
}

fn localize(out: &mut String, body: &str, locale: &Locale) {
    let split = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let (integral, rest) = body.split_at(split);

    push_grouped(out, integral, locale);
    for ch in rest.chars() {
        out.push(if ch == '.' { locale.decimal_point() } else { ch });
    }
}

fn push_grouped(out: &mut String, digits: &str, locale: &Locale) {
    let size = locale.group_size();
    let separator = match locale.thousands_sep() {
        Some(separator) if size > 0 && digits.len() > size => separator,
        _ => {
            out.push_str(digits);
            return;
        }
    };

    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}
