/*!
Error types.

Every failure is returned to the caller; nothing at this layer panics on bad input, and nothing retries.  A conversion that fails once will fail again with the same input and profile.
*/
use thiserror::Error;

use crate::alloc::AllocError;
use crate::ffi::SQLSMALLINT;

/**
A named codec could not be used.
*/
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CodecError {
    #[error("unknown encoding: {0}")]
    Unknown(String),
    #[error("encoding {0} cannot be used for text conversion")]
    Unsupported(String),
}

/**
Failure to encode a host value.
*/
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value is not text.
    #[error("expected a str, found {found}")]
    WrongType { found: &'static str },

    /// The target encoding has no representation for a character.
    #[error("'{encoding}' codec can't encode character {ch:?} in position {position}")]
    Unrepresentable {
        encoding: String,
        ch: char,
        position: usize,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/**
Failure to decode a buffer.
*/
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bytes are not valid in the encoding.  `offset` is in bytes from the start of the buffer.
    #[error("'{encoding}' codec can't decode bytes at offset {offset}: {reason}")]
    Malformed {
        encoding: String,
        offset: usize,
        reason: &'static str,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl DecodeError {
    pub(crate) fn malformed(encoding: &str, offset: usize, reason: &'static str) -> Self {
        DecodeError::Malformed {
            encoding: encoding.to_owned(),
            offset,
            reason,
        }
    }
}

/**
An encoding profile or policy could not be configured.
*/
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("an encoding name is required")]
    Empty,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid sqltype {0}; expected SQL_CHAR, SQL_WCHAR, or SQL_WMETADATA")]
    UnknownSqlType(SQLSMALLINT),
}
