//! Output settings: radix, precision, notation and locale.
//!
//! The locale defaults to whatever `LC_ALL`, `LC_NUMERIC` or `LANG` names.

use percent_format::{format_with, FmtFlags, Formatter, Locale, OutputSettings};

fn main() {
    env_logger::init();

    let settings = OutputSettings::new().with_locale(Locale::from_env());
    let mut formatter = Formatter::with_settings(settings);
    println!("locale: {}", formatter.locale());

    let value = 1234567.891;
    println!("{}", format_with!(formatter, "default:    %?", value));

    let saved = formatter.setf_masked(FmtFlags::FIXED, FmtFlags::FLOATFIELD);
    let saved_precision = formatter.set_precision(2);
    println!("{}", format_with!(formatter, "fixed(2):   %?", value));

    formatter.setf_masked(FmtFlags::SCIENTIFIC, FmtFlags::FLOATFIELD);
    println!("{}", format_with!(formatter, "scientific: %?", value));

    formatter.set_flags(saved);
    formatter.set_precision(saved_precision);

    formatter.setf_masked(FmtFlags::HEX, FmtFlags::BASEFIELD);
    formatter.setf(FmtFlags::SHOWBASE);
    println!("{}", format_with!(formatter, "hex:        %?", vec![255, 4096, -1]));

    formatter.set_flags(saved);
    let previous = formatter.imbue(Locale::named("de_DE").unwrap_or_default());
    println!("{}", format_with!(formatter, "de_DE:      %?", value));
    formatter.imbue(previous);
}
