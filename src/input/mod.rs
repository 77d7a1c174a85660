//! Input parsing and validation for the visualizer screens
//!
//! All user input is validated here, before any trace is built:
//! - [`parse_values`] — the comma-separated array field
//! - [`parse_target`] — the search target field
//! - [`generate_values`] — random arrays for the sorting screen
//!
//! Every rejection is an [`InputError`] naming the offending field, reported
//! synchronously to the caller; nothing is retried. Once input passes these
//! functions the tracer cannot fail.

use rand::Rng;
use std::fmt;

/// Most elements one run will accept. Also bounds the recursion depth of the
/// divide-and-conquer tracers.
pub const MAX_LEN: usize = 64;

/// Array-size range for the sorting screen.
pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 40;

/// Value range for generated arrays.
pub const VALUE_MIN: i64 = 10;
pub const VALUE_MAX: i64 = 100;

/// Demo array shown on the searching screen when the field is left blank.
pub const DEMO_VALUES: [i64; 18] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33, 44, 55, 66, 77, 88, 99,
];

/// Rejected user input. One kind per field failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Non-integer token in the array field.
    InvalidValue { token: String },

    /// A search was started with an empty target field.
    MissingTarget,

    /// Non-integer target.
    InvalidTarget { token: String },

    /// The array field held no usable tokens.
    EmptyValues,

    /// More elements than a run will accept.
    TooManyValues { len: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidValue { token } => {
                write!(
                    f,
                    "Invalid array value '{}': values must be integers separated by commas",
                    token
                )
            }
            InputError::MissingTarget => {
                write!(f, "Please enter a target value")
            }
            InputError::InvalidTarget { token } => {
                write!(f, "Invalid target '{}': target must be an integer", token)
            }
            InputError::EmptyValues => {
                write!(f, "The array is empty")
            }
            InputError::TooManyValues { len, max } => {
                write!(f, "Too many values: {} entered, at most {} allowed", len, max)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse the comma-separated array field.
///
/// Tokens are trimmed and empty segments skipped, so `"1, 2,,3"` parses to
/// `[1, 2, 3]`. An input with no usable tokens at all is rejected as
/// [`InputError::EmptyValues`].
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();

    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                return Err(InputError::InvalidValue {
                    token: token.to_string(),
                });
            }
        }
    }

    if values.is_empty() {
        return Err(InputError::EmptyValues);
    }
    if values.len() > MAX_LEN {
        return Err(InputError::TooManyValues {
            len: values.len(),
            max: MAX_LEN,
        });
    }

    Ok(values)
}

/// Parse the target field.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(InputError::MissingTarget);
    }
    token.parse::<i64>().map_err(|_| InputError::InvalidTarget {
        token: token.to_string(),
    })
}

/// Generate `len` random values in [`VALUE_MIN`]..=[`VALUE_MAX`] for the
/// sorting screen.
pub fn generate_values(len: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(VALUE_MIN..=VALUE_MAX)).collect()
}
