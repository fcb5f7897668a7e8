//! Result type alias

use super::errors::NotesTodayError;

/// Result type alias using [`NotesTodayError`]
///
/// # Examples
///
/// ```
/// use notes_today::domain::result::Result;
/// use notes_today::domain::errors::NotesTodayError;
///
/// fn failing_function() -> Result<()> {
///     Err(NotesTodayError::Configuration("missing output path".to_string()))
/// }
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, NotesTodayError>;
