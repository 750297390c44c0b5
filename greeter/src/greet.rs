use crate::escape_html;

/// Error type for greeting generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetError {
    /// The repetition count was zero or negative.
    #[error("Greeting repetitions must be a positive integer.")]
    InvalidArgument { repetitions: i64 },

    /// The repeated greeting would not fit in a single string.
    #[error("Greeting repeated {repetitions} times is too long to build.")]
    TooLong { repetitions: i64 },
}

/// Greet `name`, `repetitions` times.
///
/// The name is HTML-escaped, placed in `"Hello, {name}!"`, and the result is
/// repeated with no separator. Any name is accepted, including the empty one.
/// No upper bound is put on `repetitions` beyond what a `String` can hold.
///
/// # Errors
/// [`GreetError::InvalidArgument`] if `repetitions` is less than 1.
/// [`GreetError::TooLong`] if the result would exceed `isize::MAX` bytes.
pub fn greet(name: &str, repetitions: i64) -> Result<String, GreetError> {
    let count = positive_count(repetitions)?;
    let greeting = format!("Hello, {}!", escape_html(name));
    greeting
        .len()
        .checked_mul(count)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(GreetError::TooLong { repetitions })?;
    tracing::debug!(repetitions, "greeting");
    Ok(greeting.repeat(count))
}

/// Check that `repetitions` is a usable repeat count.
pub(crate) fn positive_count(repetitions: i64) -> Result<usize, GreetError> {
    usize::try_from(repetitions)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(GreetError::InvalidArgument { repetitions })
}
