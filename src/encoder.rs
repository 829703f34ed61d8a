/*!
Encoding host strings into driver buffers.

The result of `encode` is one of three things, which callers must tell apart before touching any pointer:

- `Ok(Encoded::Data(buf))`: a buffer ready for the driver;
- `Ok(Encoded::Absent)`: the host value was "no value" and should be bound as NULL;
- `Err(_)`: conversion failed.

# Termination

Buffers for `Wide` profiles are *always* null terminated and reported as `Length::NullTerminated`.  Computing a character count is not attempted: the ODBC specification asks for one, but drivers that accept UTF-8 in `SQLWCHAR` buffers almost certainly want bytes, and there is no way to tell which a given driver wants.  Terminating and passing `SQL_NTS` works for both, at the cost of a copy when the string could otherwise have been lent directly.

Buffers for `Narrow` profiles report their byte length, and are terminated as well.
*/
use std::fmt;
use std::ptr;

use log::{debug, trace};

use crate::alloc::{Allocator, Malloc, RawBuf};
use crate::encoding::named::Codec;
use crate::encoding::{conv, OptEnc};
use crate::error::EncodeError;
use crate::ffi::{SQLLEN, SQL_NTS, SQL_NULL_DATA};
use crate::host::{HostString, HostValue, Repr};
use crate::profile::{ElementWidth, EncodingProfile, Transform};

/**
Zero bytes appended to every owned buffer.  Four covers a UTF-32 terminator, and so every other encoding too.
*/
pub const OWNED_TERMINATOR_LEN: usize = 4;

/**
How the driver should determine a buffer's extent.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Length {
    /// Exactly this many bytes, terminator excluded.
    Bytes(usize),
    /// Scan for the terminator.
    NullTerminated,
}

impl Length {
    /**
    The value to pass as the driver's length or indicator argument.
    */
    pub fn as_sqllen(self) -> SQLLEN {
        match self {
            Length::Bytes(n) => n as SQLLEN,
            Length::NullTerminated => SQL_NTS,
        }
    }
}

enum Storage<'a, A>
where
    A: Allocator,
{
    /// The source string's own storage, terminator included.
    Borrowed(&'a [u8]),
    Owned(RawBuf<A>),
}

/**
An encoded, terminated buffer.

The buffer is either a view into the source `HostString`'s storage, valid for as long as the borrow `'a`, or an allocation made through `A` and released when this value is dropped.  It is deliberately not `Clone`.
*/
pub struct EncodedBuffer<'a, A = Malloc>
where
    A: Allocator,
{
    data: Storage<'a, A>,
    content_len: usize,
    length: Length,
}

impl<'a, A> EncodedBuffer<'a, A>
where
    A: Allocator,
{
    /**
    Pointer to the first byte, suitable for passing to the driver.

    The pointer is valid for as long as `self` is.
    */
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes_with_term().as_ptr()
    }

    /**
    The encoded content, *excluding* the terminator.
    */
    pub fn bytes(&self) -> &[u8] {
        &self.bytes_with_term()[..self.content_len]
    }

    /**
    The whole buffer, *including* the terminator.
    */
    pub fn bytes_with_term(&self) -> &[u8] {
        match self.data {
            Storage::Borrowed(view) => view,
            Storage::Owned(ref buf) => buf.as_slice(),
        }
    }

    pub fn length(&self) -> Length {
        self.length
    }

    /**
    The length argument to hand to the driver alongside `as_ptr`.
    */
    pub fn indicator(&self) -> SQLLEN {
        self.length.as_sqllen()
    }

    /**
    Whether the buffer is a view into the source string rather than a new allocation.
    */
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Storage::Borrowed(_))
    }
}

impl<'a, A> fmt::Debug for EncodedBuffer<'a, A>
where
    A: Allocator,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let kind = if self.is_borrowed() { "Borrowed" } else { A::debug_prefix() };
        fmt.debug_struct("EncodedBuffer")
            .field("storage", &kind)
            .field("bytes", &self.bytes())
            .field("length", &self.length)
            .finish()
    }
}

/**
The successful result of encoding a host value.
*/
pub enum Encoded<'a, A = Malloc>
where
    A: Allocator,
{
    /// The host value was "no value".
    Absent,
    Data(EncodedBuffer<'a, A>),
}

impl<'a, A> Encoded<'a, A>
where
    A: Allocator,
{
    pub fn is_absent(&self) -> bool {
        matches!(*self, Encoded::Absent)
    }

    pub fn buffer(&self) -> Option<&EncodedBuffer<'a, A>> {
        match *self {
            Encoded::Absent => None,
            Encoded::Data(ref buf) => Some(buf),
        }
    }

    pub fn into_buffer(self) -> Option<EncodedBuffer<'a, A>> {
        match self {
            Encoded::Absent => None,
            Encoded::Data(buf) => Some(buf),
        }
    }

    /**
    Pointer for the driver; null when absent.
    */
    pub fn as_ptr(&self) -> *const u8 {
        self.buffer().map_or(ptr::null(), EncodedBuffer::as_ptr)
    }

    /**
    Length or indicator for the driver; `SQL_NULL_DATA` when absent.
    */
    pub fn indicator(&self) -> SQLLEN {
        self.buffer().map_or(SQL_NULL_DATA, EncodedBuffer::indicator)
    }
}

impl<'a, A> fmt::Debug for Encoded<'a, A>
where
    A: Allocator,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Encoded::Absent => fmt.write_str("Absent"),
            Encoded::Data(ref buf) => fmt.debug_tuple("Data").field(buf).finish(),
        }
    }
}

/**
Encodes a host value for `profile`, allocating any owned buffer from the C heap.

See `encode_by`.
*/
pub fn encode<'a>(value: &'a HostValue, profile: &EncodingProfile) -> Result<Encoded<'a, Malloc>, EncodeError> {
    encode_by::<Malloc>(value, profile)
}

/**
Encodes a host value for `profile`, allocating any owned buffer with `A`.

# Failure

Fails with `EncodeError::WrongType` if `value` is neither text nor "no value".  Otherwise fails as `encode_str` does.
*/
pub fn encode_by<'a, A>(value: &'a HostValue, profile: &EncodingProfile) -> Result<Encoded<'a, A>, EncodeError>
where
    A: Allocator,
{
    match *value {
        HostValue::None => Ok(Encoded::Absent),
        HostValue::Str(ref s) => encode_str(s, profile).map(Encoded::Data).map_err(|err| {
            debug!("encoding for {} failed: {}", profile, err);
            err
        }),
        ref other => {
            debug!("cannot encode {} as text", other.type_name());
            Err(EncodeError::WrongType { found: other.type_name() })
        }
    }
}

/**
Encodes a host string for `profile`.

When the string's storage already holds exactly the bytes the profile calls for, and its trailing zero unit is wide enough to terminate the buffer for the profile's element width, the result borrows that storage and nothing is allocated.  Otherwise the string is transcoded into a new allocation followed by `OWNED_TERMINATOR_LEN` zero bytes.

# Failure

Fails if a character cannot be represented in the target encoding, if a named codec cannot be resolved, or if allocation fails.
*/
pub fn encode_str<'a, A>(s: &'a HostString, profile: &EncodingProfile) -> Result<EncodedBuffer<'a, A>, EncodeError>
where
    A: Allocator,
{
    let length = |content_len| match profile.width() {
        ElementWidth::Narrow => Length::Bytes(content_len),
        ElementWidth::Wide => Length::NullTerminated,
    };

    if let Some(view) = native_view(s, profile) {
        trace!("lending {:?} storage for {}", s.repr(), profile);
        let content_len = view.len() - s.repr().unit_width();
        return Ok(EncodedBuffer {
            data: Storage::Borrowed(view),
            content_len,
            length: length(content_len),
        });
    }

    let mut bytes = Vec::with_capacity(s.len() + OWNED_TERMINATOR_LEN);
    let align = match *profile.transform() {
        Transform::Optimized(enc) => {
            conv::encode(enc, s.chars(), &mut bytes)?;
            enc.unit_width()
        }
        Transform::Named(ref name) => {
            let codec = Codec::lookup(name)?;
            codec.encode(&s.to_string(), &mut bytes)?;
            match codec {
                Codec::Fixed(enc) => enc.unit_width(),
                Codec::Web(_) => 1,
            }
        }
    };
    trace!("transcoded {} chars to {} bytes for {}", s.len(), bytes.len(), profile);

    let content_len = bytes.len();
    let buf = RawBuf::<A>::terminated(&bytes, OWNED_TERMINATOR_LEN, align)?;
    Ok(EncodedBuffer {
        data: Storage::Owned(buf),
        content_len,
        length: length(content_len),
    })
}

/**
Returns the string's storage if it can be handed to the driver unchanged.
*/
fn native_view<'a>(s: &'a HostString, profile: &EncodingProfile) -> Option<&'a [u8]> {
    let enc = profile.opt_enc()?;

    let same_bytes = match s.repr() {
        Repr::Latin1 => enc == OptEnc::Latin1 || (enc == OptEnc::Utf8 && s.is_ascii()),
        Repr::Ucs2 => enc == OptEnc::UTF16_NE,
        Repr::Ucs4 => enc == OptEnc::UTF32_NE,
    };

    if same_bytes && s.repr().unit_width() >= profile.width().terminator_len() {
        Some(s.as_bytes_with_term())
    } else {
        None
    }
}
