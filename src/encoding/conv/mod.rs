/*!
Transforms for the optimized encodings.

These are dispatched directly on `OptEnc`; no codec lookup happens here.
*/
use std::str;

use crate::encoding::{ByteOrder, OptEnc};
use crate::error::{DecodeError, EncodeError};

pub mod wide;

/**
Encodes `chars` into `out`, appending.

No terminator is written.  The native UTF-16 and UTF-32 variants emit a byte order mark in `ByteOrder::NATIVE` followed by native-order units.

# Failure

Only Latin-1 can fail, when a character is above U+00FF.
*/
pub fn encode<I>(enc: OptEnc, chars: I, out: &mut Vec<u8>) -> Result<(), EncodeError>
where
    I: IntoIterator<Item = char>,
{
    match enc {
        OptEnc::Utf8 => {
            let mut buf = [0; 4];
            for c in chars {
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            Ok(())
        }
        OptEnc::Latin1 => encode_latin1(chars, out),
        OptEnc::Utf16 => {
            wide::encode_utf16(chars, ByteOrder::NATIVE, true, out);
            Ok(())
        }
        OptEnc::Utf16Le => {
            wide::encode_utf16(chars, ByteOrder::Little, false, out);
            Ok(())
        }
        OptEnc::Utf16Be => {
            wide::encode_utf16(chars, ByteOrder::Big, false, out);
            Ok(())
        }
        OptEnc::Utf32 => {
            wide::encode_utf32(chars, ByteOrder::NATIVE, true, out);
            Ok(())
        }
        OptEnc::Utf32Le => {
            wide::encode_utf32(chars, ByteOrder::Little, false, out);
            Ok(())
        }
        OptEnc::Utf32Be => {
            wide::encode_utf32(chars, ByteOrder::Big, false, out);
            Ok(())
        }
    }
}

/**
Decodes `bytes` strictly.

For the native wide variants a leading byte order mark selects the order and is dropped; without one the data is read as big-endian.
*/
pub fn decode(enc: OptEnc, bytes: &[u8]) -> Result<String, DecodeError> {
    match enc {
        OptEnc::Utf8 => decode_utf8(bytes),
        OptEnc::Latin1 => Ok(decode_latin1(bytes)),
        OptEnc::Utf16 | OptEnc::Utf16Le | OptEnc::Utf16Be => {
            wide::decode_utf16(enc.name(), bytes, enc.byte_order())
        }
        OptEnc::Utf32 | OptEnc::Utf32Le | OptEnc::Utf32Be => {
            wide::decode_utf32(enc.name(), bytes, enc.byte_order())
        }
    }
}

fn encode_latin1<I>(chars: I, out: &mut Vec<u8>) -> Result<(), EncodeError>
where
    I: IntoIterator<Item = char>,
{
    for (position, ch) in chars.into_iter().enumerate() {
        match u8::try_from(ch) {
            Ok(b) => out.push(b),
            Err(_) => {
                return Err(EncodeError::Unrepresentable {
                    encoding: OptEnc::Latin1.name().to_owned(),
                    ch,
                    position,
                })
            }
        }
    }
    Ok(())
}

fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    match str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(err) => {
            let reason = match err.error_len() {
                Some(_) => "invalid utf-8 sequence",
                None => "unexpected end of data",
            };
            Err(DecodeError::malformed(OptEnc::Utf8.name(), err.valid_up_to(), reason))
        }
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
