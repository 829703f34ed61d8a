/*!
Optimized encodings and byte order.

An *optimized* encoding is one of a small, fixed set which this crate transcodes directly rather than through a general codec lookup.  Everything else is handled by the `named` module.
*/
use std::fmt;

pub mod conv;
pub mod named;

/**
Byte order of a multi-byte code unit.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /**
    The byte order of the target platform.
    */
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    pub fn put_u16(self, unit: u16, out: &mut Vec<u8>) {
        match self {
            ByteOrder::Little => out.extend_from_slice(&unit.to_le_bytes()),
            ByteOrder::Big => out.extend_from_slice(&unit.to_be_bytes()),
        }
    }

    pub fn put_u32(self, unit: u32, out: &mut Vec<u8>) {
        match self {
            ByteOrder::Little => out.extend_from_slice(&unit.to_le_bytes()),
            ByteOrder::Big => out.extend_from_slice(&unit.to_be_bytes()),
        }
    }

    pub fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Little => u16::from_le_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        }
    }

    pub fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }
}

/**
The optimized encodings.

`Utf16` and `Utf32` are the "native" variants: they encode in `ByteOrder::NATIVE` preceded by a byte order mark, and decode by honouring a leading mark if there is one.  Without a mark they decode as big-endian.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptEnc {
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
    Latin1,
    Utf32,
    Utf32Le,
    Utf32Be,
}

impl OptEnc {
    /// Fixed-order UTF-16 matching the platform.
    pub const UTF16_NE: OptEnc = match ByteOrder::NATIVE {
        ByteOrder::Little => OptEnc::Utf16Le,
        ByteOrder::Big => OptEnc::Utf16Be,
    };

    /// Fixed-order UTF-32 matching the platform.
    pub const UTF32_NE: OptEnc = match ByteOrder::NATIVE {
        ByteOrder::Little => OptEnc::Utf32Le,
        ByteOrder::Big => OptEnc::Utf32Be,
    };

    /**
    Looks up an optimized encoding by name.

    The name should already be normalized; see `normalize_name`.
    */
    pub fn from_name(name: &str) -> Option<OptEnc> {
        let enc = match name {
            "utf-8" | "utf8" | "u8" => OptEnc::Utf8,
            "utf-16" | "utf16" | "u16" => OptEnc::Utf16,
            "utf-16le" | "utf-16-le" | "utf16le" => OptEnc::Utf16Le,
            "utf-16be" | "utf-16-be" | "utf16be" => OptEnc::Utf16Be,
            "latin-1" | "latin1" | "latin" | "l1" | "iso-8859-1" | "iso8859-1" => OptEnc::Latin1,
            "utf-32" | "utf32" | "u32" => OptEnc::Utf32,
            "utf-32le" | "utf-32-le" | "utf32le" => OptEnc::Utf32Le,
            "utf-32be" | "utf-32-be" | "utf32be" => OptEnc::Utf32Be,
            _ => return None,
        };
        Some(enc)
    }

    /**
    Canonical name, used in error messages.
    */
    pub fn name(self) -> &'static str {
        match self {
            OptEnc::Utf8 => "utf-8",
            OptEnc::Utf16 => "utf-16",
            OptEnc::Utf16Le => "utf-16le",
            OptEnc::Utf16Be => "utf-16be",
            OptEnc::Latin1 => "latin-1",
            OptEnc::Utf32 => "utf-32",
            OptEnc::Utf32Le => "utf-32le",
            OptEnc::Utf32Be => "utf-32be",
        }
    }

    /**
    Size of one code unit, in bytes.
    */
    pub fn unit_width(self) -> usize {
        match self {
            OptEnc::Utf8 | OptEnc::Latin1 => 1,
            OptEnc::Utf16 | OptEnc::Utf16Le | OptEnc::Utf16Be => 2,
            OptEnc::Utf32 | OptEnc::Utf32Le | OptEnc::Utf32Be => 4,
        }
    }

    /**
    The fixed byte order of this encoding.

    Returns `None` for single-byte encodings and for the native variants, whose order on decode depends on the data.
    */
    pub fn byte_order(self) -> Option<ByteOrder> {
        match self {
            OptEnc::Utf16Le | OptEnc::Utf32Le => Some(ByteOrder::Little),
            OptEnc::Utf16Be | OptEnc::Utf32Be => Some(ByteOrder::Big),
            _ => None,
        }
    }

    pub fn is_native(self) -> bool {
        matches!(self, OptEnc::Utf16 | OptEnc::Utf32)
    }
}

impl fmt::Display for OptEnc {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/**
Normalizes an encoding name for lookup: surrounding whitespace is removed, letters are lowercased, and underscores become hyphens.
*/
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/**
A code unit of a host string's internal storage.
*/
pub trait Unit: Copy {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

macro_rules! naive_unit_impl {
    ($($ty_name:ty: $zero:expr),* $(,)*) => {
        $(
            impl Unit for $ty_name {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

naive_unit_impl! {
    u8: 0,
    u16: 0,
    char: '\u{0}',
}
