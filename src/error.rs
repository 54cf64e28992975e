//! Error types for value rendering and settings parsing.
//!
//! Formatting itself is lenient: [`Formatter::format`](crate::Formatter::format)
//! never returns an error. A failed argument degrades to the unknown marker
//! `?` instead. The [`Error`] type is still needed in two places:
//!
//! - **Rendering internals**: the renderer is a serde `Serializer`, so a
//!   `Serialize` impl can report a failure. [`try_render`](crate::try_render)
//!   hands that failure back to callers who want to see it.
//! - **Locale parsing**: [`Locale::named`](crate::Locale::named) rejects names
//!   it has no numeric conventions for.
//!
//! ## Examples
//!
//! ```rust
//! use percent_format::{Error, Locale};
//!
//! let result: Result<Locale, Error> = "xx_YY".parse();
//! assert!(matches!(result, Err(Error::UnknownLocale(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents everything that can go wrong below the lenient formatting API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A `Serialize` impl reported a custom failure
    #[error("Error: {0}")]
    Custom(String),

    /// No numeric conventions are known for this locale name
    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use percent_format::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an unknown locale error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use percent_format::Error;
    ///
    /// let err = Error::unknown_locale("tlh_KX");
    /// assert_eq!(err.to_string(), "Unknown locale: \"tlh_KX\"");
    /// ```
    pub fn unknown_locale(name: &str) -> Self {
        Error::UnknownLocale(name.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_custom_error() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
        assert_eq!(err.to_string(), "Error: boom");
    }

    #[test]
    fn test_display_failure_is_custom() {
        struct Failing;

        impl fmt::Display for Failing {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let result = crate::try_render(&crate::Output(Failing), &crate::OutputSettings::new());
        assert!(matches!(result, Err(Error::Custom(_))));
    }
}
