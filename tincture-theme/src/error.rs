//! # Theme Error Types
//!
//! Errors raised while turning text (configuration entries, axis names,
//! style values) into registry writes. The registry itself never fails:
//! absent keys are "no override", not errors.

use thiserror::Error;
use tincture_color::ColorError;

/// Errors that can occur in the theming system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// A color value failed to parse.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// An axis name (component, theme, state) was not recognised.
    #[error("Unknown {axis} '{input}'")]
    UnknownAxisValue {
        /// The axis being parsed.
        axis: &'static str,
        /// The raw input.
        input: String,
    },

    /// A style property name was not recognised.
    #[error("Unknown style type '{input}'")]
    UnknownStyleType {
        /// The raw input.
        input: String,
    },

    /// A value does not fit the style it is written to.
    #[error("Invalid value '{input}' for {style}")]
    InvalidValue {
        /// The CSS name of the style.
        style: String,
        /// The raw input.
        input: String,
    },

    /// Configuration text could not be parsed.
    #[error("Failed to parse theme configuration: {details}")]
    ConfigParse {
        /// Details about the parse error.
        details: String,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an unknown axis value error.
    pub fn unknown_axis_value(axis: &'static str, input: impl Into<String>) -> Self {
        Self::UnknownAxisValue {
            axis,
            input: input.into(),
        }
    }

    /// Create an unknown style type error.
    pub fn unknown_style_type(input: impl Into<String>) -> Self {
        Self::UnknownStyleType {
            input: input.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(style: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidValue {
            style: style.into(),
            input: input.into(),
        }
    }

    /// Create a configuration parse error.
    pub fn config_parse(details: impl Into<String>) -> Self {
        Self::ConfigParse {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_errors_convert() {
        let err: ThemeError = ColorError::unknown_name("mauve-ish").into();
        assert!(matches!(err, ThemeError::Color(_)));
        assert!(err.to_string().contains("mauve-ish"));
    }

    #[test]
    fn test_messages_carry_input() {
        let err = ThemeError::unknown_axis_value("component", "Sidebar");
        assert_eq!(err.to_string(), "Unknown component 'Sidebar'");
        let err = ThemeError::invalid_value("margin", "red");
        assert_eq!(err.to_string(), "Invalid value 'red' for margin");
    }
}
