/*!
Encoding profiles.

A profile says how text is converted for one role: which transform produces or consumes the bytes, and which C character type the driver is told the buffer holds.  The two are independent; drivers exist which declare `SQL_C_WCHAR` buffers and then read UTF-8 from them.
*/
use std::fmt;

use crate::encoding::named::Codec;
use crate::encoding::{normalize_name, OptEnc};
use crate::error::ProfileError;
use crate::ffi::{SQLSMALLINT, SQL_C_CHAR, SQL_C_WCHAR};

/**
The logical character unit the driver expects for a buffer.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementWidth {
    /// `SQLCHAR`, one byte.
    Narrow,
    /// `SQLWCHAR`, two bytes.
    Wide,
}

impl ElementWidth {
    pub fn from_c_type(c_type: SQLSMALLINT) -> Option<ElementWidth> {
        match c_type {
            SQL_C_CHAR => Some(ElementWidth::Narrow),
            SQL_C_WCHAR => Some(ElementWidth::Wide),
            _ => None,
        }
    }

    pub fn c_type(self) -> SQLSMALLINT {
        match self {
            ElementWidth::Narrow => SQL_C_CHAR,
            ElementWidth::Wide => SQL_C_WCHAR,
        }
    }

    /**
    The number of zero bytes a driver reading this element type needs to see a terminator.
    */
    pub fn terminator_len(self) -> usize {
        match self {
            ElementWidth::Narrow => 1,
            ElementWidth::Wide => 2,
        }
    }
}

/**
Where a profile's bytes come from.
*/
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    Optimized(OptEnc),
    /// A codec resolved by name at conversion time.
    Named(Box<str>),
}

/**
An immutable description of how to convert text for one role.

Construct with `optimized`, `named`, or `from_label`.
*/
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodingProfile {
    transform: Transform,
    width: ElementWidth,
}

impl EncodingProfile {
    pub fn optimized(enc: OptEnc, width: ElementWidth) -> Self {
        EncodingProfile {
            transform: Transform::Optimized(enc),
            width,
        }
    }

    /**
    Constructs a profile which delegates to the codec called `name`.

    The name is not resolved here; an unknown name surfaces as an error from the first conversion.  Use `from_label` to validate up front.

    # Panics

    Panics if `name` is empty or only whitespace.  A profile without a transform is a programming error, not a runtime condition.
    */
    pub fn named<S>(name: S, width: ElementWidth) -> Self
    where
        S: Into<String>,
    {
        let name = name.into();
        assert!(!name.trim().is_empty(), "an encoding profile needs an optimized kind or a codec name");
        EncodingProfile {
            transform: Transform::Named(name.into_boxed_str()),
            width,
        }
    }

    /**
    Constructs a profile from a user-supplied encoding label.

    Labels naming UTF-8, UTF-16, UTF-32, or Latin-1 (in any of their usual spellings) select the optimized transform.  Anything else must resolve as a named codec.

    If `width` is `None`, UTF-16 and UTF-32 default to `Wide` and everything else to `Narrow`.

    # Failure

    Fails if `label` is empty or names no known codec.
    */
    pub fn from_label(label: &str, width: Option<ElementWidth>) -> Result<Self, ProfileError> {
        let normalized = normalize_name(label);
        if normalized.is_empty() {
            return Err(ProfileError::Empty);
        }

        if let Some(enc) = OptEnc::from_name(&normalized) {
            let width = width.unwrap_or(match enc.unit_width() {
                1 => ElementWidth::Narrow,
                _ => ElementWidth::Wide,
            });
            return Ok(EncodingProfile::optimized(enc, width));
        }

        Codec::lookup(label)?;
        Ok(EncodingProfile::named(label.trim(), width.unwrap_or(ElementWidth::Narrow)))
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn opt_enc(&self) -> Option<OptEnc> {
        match self.transform {
            Transform::Optimized(enc) => Some(enc),
            Transform::Named(_) => None,
        }
    }

    pub fn codec_name(&self) -> Option<&str> {
        match self.transform {
            Transform::Optimized(_) => None,
            Transform::Named(ref name) => Some(&**name),
        }
    }

    /**
    The encoding's name, whichever way it was given.
    */
    pub fn name(&self) -> &str {
        match self.transform {
            Transform::Optimized(enc) => enc.name(),
            Transform::Named(ref name) => &**name,
        }
    }

    pub fn width(&self) -> ElementWidth {
        self.width
    }

    pub fn is_wide(&self) -> bool {
        self.width == ElementWidth::Wide
    }
}

impl fmt::Display for EncodingProfile {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let c_type = match self.width {
            ElementWidth::Narrow => "SQL_C_CHAR",
            ElementWidth::Wide => "SQL_C_WCHAR",
        };
        write!(fmt, "{} ({})", self.name(), c_type)
    }
}
