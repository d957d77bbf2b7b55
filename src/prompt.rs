//! Interactive prompting with a bounded number of attempts
//!
//! The binary asks for the page URL and the database name when they are not
//! given on the command line. Each answer goes through a validator; a
//! rejected answer is reported and the question repeated, up to a limit.

use std::fmt::Display;
use std::future::Future;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that can occur while prompting
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("No valid input after {attempts} attempts (last error: {last_error})")]
    Exhausted { attempts: u32, last_error: String },

    #[error("Input closed before a valid answer was given")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Writes `prompt` to `output` and reads one trimmed line from `input`
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }
    Ok(line.trim().to_string())
}

/// Asks until `validate` accepts an answer or `max_attempts` is reached
///
/// # Arguments
///
/// * `max_attempts` - Upper bound on questions asked (at least one is asked)
/// * `read` - Produces the next answer
/// * `validate` - Turns an answer into the final value or rejects it
pub fn retry_bounded<T, E, R, V>(
    max_attempts: u32,
    mut read: R,
    mut validate: V,
) -> Result<T, PromptError>
where
    E: Display,
    R: FnMut() -> Result<String, PromptError>,
    V: FnMut(&str) -> Result<T, E>,
{
    let attempts = max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        let answer = read()?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!("{} (attempt {}/{})", e, attempt, attempts);
                last_error = e.to_string();
            }
        }
    }

    Err(PromptError::Exhausted {
        attempts,
        last_error,
    })
}

/// Like [`retry_bounded`], with a validator that has to await
pub async fn retry_bounded_async<T, E, R, V, Fut>(
    max_attempts: u32,
    mut read: R,
    mut validate: V,
) -> Result<T, PromptError>
where
    E: Display,
    R: FnMut() -> Result<String, PromptError>,
    V: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        let answer = read()?;
        match validate(answer).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!("{} (attempt {}/{})", e, attempt, attempts);
                last_error = e.to_string();
            }
        }
    }

    Err(PromptError::Exhausted {
        attempts,
        last_error,
    })
}
