//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Voice id cannot be empty")]
    EmptyId,

    #[error("Voice id too long: {0} characters (max 64)")]
    IdTooLong(usize),

    #[error("Invalid character {ch:?} in voice id: {id}")]
    InvalidCharacter { id: String, ch: char },
}
