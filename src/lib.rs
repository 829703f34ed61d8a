/*!
This crate converts text between host strings and the narrow and wide character buffers used by ODBC drivers.

Drivers are inconsistent about what they expect.  Some want UTF-8 in buffers they declare as `SQLWCHAR`, some return metadata in a different encoding from data, and some disagree with the specification about whether lengths count characters or bytes.  So rather than assume a single encoding, each role gets its own `EncodingProfile`, and callers pick the profile for the operation at hand.

# Quick Reference

| Operation | Function | Result |
| ---: | --- | --- |
| Bind a text parameter | `encoder::encode` | `Encoded`: absent, or a terminated `EncodedBuffer` plus its `Length` |
| … | *Wide* profile | always `Length::NullTerminated` (`SQL_NTS`) |
| … | *Narrow* profile | `Length::Bytes`, buffer also terminated |
| Read a text column | `decoder::decode` | `Option<HostString>`; `None` for a null buffer |
| … | *Native* UTF-16/UTF-32 | byte order from a leading BOM, big-endian without one |
| Configure a connection | `policy::EncodingPolicy` | one profile per `Role` |

An `EncodedBuffer` either borrows the source string's storage, when that already holds the right bytes, or owns a fresh allocation which is freed when it is dropped.  The borrow ties the buffer's lifetime to the source string, so the source cannot be dropped while a driver call may still read it.
*/

pub mod alloc;
pub mod decoder;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod ffi;
pub mod host;
pub mod policy;
pub mod profile;

pub use decoder::{decode, decode_ptr};
pub use encoder::{encode, encode_by, encode_str, Encoded, EncodedBuffer, Length};
pub use encoding::{ByteOrder, OptEnc};
pub use error::{CodecError, DecodeError, EncodeError, ProfileError};
pub use host::{HostString, HostValue};
pub use policy::{EncodingPolicy, Role};
pub use profile::{ElementWidth, EncodingProfile, Transform};
