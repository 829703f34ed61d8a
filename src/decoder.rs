/*!
Decoding driver buffers into host strings.

Lengths here are always in *bytes*.  Drivers report `SQLWCHAR` lengths in characters in some places and bytes in others; converting to bytes before calling in is the caller's responsibility.
*/
use std::slice;

use log::{debug, trace};

use crate::encoding::conv;
use crate::encoding::named::Codec;
use crate::error::DecodeError;
use crate::host::HostString;
use crate::profile::{EncodingProfile, Transform};

/**
Decodes a buffer read from the driver.

`None` stands for a null buffer pointer and decodes to `None`, the host's "no value".  An empty buffer decodes to the empty string.

# Failure

Fails if the bytes are not valid in the profile's encoding, or if a named codec cannot be resolved.  Decoding is strict: nothing is replaced or truncated.
*/
pub fn decode(profile: &EncodingProfile, data: Option<&[u8]>) -> Result<Option<HostString>, DecodeError> {
    let bytes = match data {
        Some(bytes) => bytes,
        None => return Ok(None),
    };

    if bytes.is_empty() {
        return Ok(Some(HostString::new("")));
    }

    let text = match *profile.transform() {
        Transform::Optimized(enc) => conv::decode(enc, bytes),
        Transform::Named(ref name) => {
            trace!("decoding {} bytes through codec {:?}", bytes.len(), name);
            Codec::lookup(name)
                .map_err(DecodeError::from)
                .and_then(|codec| codec.decode(bytes))
        }
    };

    match text {
        Ok(text) => Ok(Some(HostString::from(text))),
        Err(err) => {
            debug!("decoding {} bytes for {} failed: {}", bytes.len(), profile, err);
            Err(err)
        }
    }
}

/**
Decodes `byte_len` bytes starting at `ptr`.

If `ptr` is null, returns `Ok(None)` and `byte_len` is ignored.

# Safety

If `ptr` is not null, it must point to at least `byte_len` readable bytes which stay valid and unmodified for the duration of the call.
*/
pub unsafe fn decode_ptr(
    profile: &EncodingProfile,
    ptr: *const u8,
    byte_len: usize,
) -> Result<Option<HostString>, DecodeError> {
    if ptr.is_null() {
        return Ok(None);
    }
    decode(profile, Some(slice::from_raw_parts(ptr, byte_len)))
}
