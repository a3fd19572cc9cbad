//! Validation of raw player input.
//!
//! These functions check one answer and report what was wrong with it. The
//! console front-end calls them in a loop until the answer is accepted.

use crate::error::{ColourError, ReplyError};
use crate::player::Colour;

/// Parses a colour menu choice (a single digit 1-6).
///
/// `taken` is the colour already claimed by the other player, if any.
///
/// # Errors
///
/// Returns an error describing why the choice was rejected.
///
/// ```
/// use warrs::{Colour, ColourError, parse_colour};
///
/// assert_eq!(parse_colour("4", None), Ok(Colour::Blue));
/// assert_eq!(parse_colour("4", Some(Colour::Blue)), Err(ColourError::AlreadyTaken));
/// ```
pub fn parse_colour(input: &str, taken: Option<Colour>) -> Result<Colour, ColourError> {
    let mut chars = input.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(ColourError::NotSingleDigit);
    };
    let digit = ch.to_digit(10).ok_or(ColourError::NotADigit)?;
    let colour = u8::try_from(digit)
        .ok()
        .and_then(Colour::from_digit)
        .ok_or(ColourError::OutOfRange)?;
    if taken == Some(colour) {
        return Err(ColourError::AlreadyTaken);
    }
    Ok(colour)
}

/// Parses the answer to "play another war?".
///
/// Only the exact words `YES` and `NO` are accepted.
///
/// # Errors
///
/// Returns [`ReplyError::Unrecognised`] for anything else, including other
/// capitalisations.
pub fn parse_replay(input: &str) -> Result<bool, ReplyError> {
    match input {
        "YES" => Ok(true),
        "NO" => Ok(false),
        _ => Err(ReplyError::Unrecognised),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_errors_in_prompt_order() {
        assert_eq!(parse_colour("", None), Err(ColourError::NotSingleDigit));
        assert_eq!(parse_colour("12", None), Err(ColourError::NotSingleDigit));
        assert_eq!(parse_colour("x", None), Err(ColourError::NotADigit));
        assert_eq!(parse_colour("0", None), Err(ColourError::OutOfRange));
        assert_eq!(parse_colour("7", None), Err(ColourError::OutOfRange));
        assert_eq!(
            parse_colour("1", Some(Colour::Red)),
            Err(ColourError::AlreadyTaken)
        );
        assert_eq!(parse_colour("6", Some(Colour::Red)), Ok(Colour::Cyan));
    }

    #[test]
    fn replay_is_case_sensitive() {
        assert_eq!(parse_replay("YES"), Ok(true));
        assert_eq!(parse_replay("NO"), Ok(false));
        assert_eq!(parse_replay("yes"), Err(ReplyError::Unrecognised));
        assert_eq!(parse_replay("Y"), Err(ReplyError::Unrecognised));
    }
}
