//! Interactive prompts.
//!
//! Each prompt is a request, validate, retry loop over any `BufRead`/`Write`
//! pair. The [`RetryPolicy`] bounds how many answers are read before giving up.

use std::io::{BufRead, Write};

use tracing::debug;

use animalia_common::animal::classification::Classification;
use animalia_common::config::RetryPolicy;
use animalia_common::{Error, Result};

pub const SKIN_TYPE_QUESTION: &str = "Enter a skin type (or its number): ";
pub const NAME_QUESTION: &str = "Enter an animal name: ";

const EMPTY_CHOICE: &str = "Please enter a value from the list.";
const INVALID_CHOICE: &str = "Invalid choice. Please use one of the listed skin types.";
const EMPTY_NAME: &str = "Animal name cannot be empty.";

/// Maps an answer onto one of `options`.
///
/// Accepts a 1-based index into `options` or a case-insensitive name.
pub fn resolve_choice(input: &str, options: &[Classification]) -> Option<Classification> {
    let choice = input.trim();
    if choice.is_empty() {
        return None;
    }

    if choice.chars().all(|c| c.is_ascii_digit()) {
        if let Some(option) = choice
            .parse::<usize>()
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| options.get(index))
        {
            return Some(option.clone());
        }
    }

    let lowered = choice.to_lowercase();
    options
        .iter()
        .find(|option| option.as_str().to_lowercase() == lowered)
        .cloned()
}

/// Prints the numbered list of choices.
pub fn write_options<W: Write>(output: &mut W, options: &[Classification]) -> Result<()> {
    writeln!(output, "Available skin types:")?;
    for (index, option) in options.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, option)?;
    }
    Ok(())
}

/// Asks until the answer names one of `options`.
pub fn prompt_choice<R, W>(
    input: &mut R,
    output: &mut W,
    options: &[Classification],
    policy: RetryPolicy,
) -> Result<Classification>
where
    R: BufRead,
    W: Write,
{
    if options.is_empty() {
        return Err(Error::validation("No skin types to choose from"));
    }

    ask(input, output, SKIN_TYPE_QUESTION, policy, |answer| {
        if answer.is_empty() {
            return Err(EMPTY_CHOICE);
        }
        resolve_choice(answer, options).ok_or(INVALID_CHOICE)
    })
}

/// Asks until a non-blank search term is entered.
pub fn prompt_term<R, W>(input: &mut R, output: &mut W, policy: RetryPolicy) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    ask(input, output, NAME_QUESTION, policy, |answer| {
        if answer.is_empty() {
            Err(EMPTY_NAME)
        } else {
            Ok(answer.to_string())
        }
    })
}

fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    policy: RetryPolicy,
    mut validate: impl FnMut(&str) -> std::result::Result<T, &'static str>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut attempt: u32 = 0;

    while policy.allows(attempt) {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::validation("Input ended before a valid answer was given"));
        }

        match validate(line.trim()) {
            Ok(value) => return Ok(value),
            Err(hint) => {
                debug!("Rejected answer {:?} on attempt {}", line.trim(), attempt + 1);
                writeln!(output, "{hint}")?;
            }
        }
        attempt = attempt.saturating_add(1);
    }

    Err(Error::validation(format!(
        "No valid answer after {attempt} attempts"
    )))
}
