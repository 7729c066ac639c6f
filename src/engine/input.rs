use thiserror::Error;

/// Player input that doesn't answer the pending question. The message is
/// what the player sees before being asked again.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Valid choices are the numbers between 1 and {highest} only")]
    NotAChoice { highest: usize },
    #[error("Valid answers are the letters y or n")]
    NotYesNo,
}

/// Accepts exactly one of `"1"..="highest"`. Padding, `"01"` or `"+1"`
/// are not choices.
pub fn parse_choice(input: &str, highest: usize) -> Result<usize, InputError> {
    (1..=highest)
        .find(|option| option.to_string() == input)
        .ok_or(InputError::NotAChoice { highest })
}

pub fn parse_reply(input: &str) -> Result<bool, InputError> {
    match input {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}
