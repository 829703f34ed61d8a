/*!
Encodings selected by name.

Names are resolved in two steps.  Names of the optimized encodings resolve to the fixed transforms; this catches `latin-1` and `iso-8859-1` before `encoding_rs` can map them to windows-1252 as the WHATWG labels do.  Everything else is an `encoding_rs` label.
*/
use encoding_rs::{DecoderResult, Encoding, EncoderResult};
use log::trace;

use crate::encoding::{conv, normalize_name, OptEnc};
use crate::error::{CodecError, DecodeError, EncodeError};

/**
A resolved codec.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Codec {
    Fixed(OptEnc),
    Web(&'static Encoding),
}

impl Codec {
    /**
    Resolves an encoding name.

    # Failure

    Fails with `CodecError::Unknown` if nothing answers to `name`, and with `CodecError::Unsupported` for the WHATWG `replacement` encoding, which cannot round-trip text.
    */
    pub fn lookup(name: &str) -> Result<Codec, CodecError> {
        let normalized = normalize_name(name);
        if let Some(enc) = OptEnc::from_name(&normalized) {
            trace!("codec {:?} resolved to fixed {}", name, enc);
            return Ok(Codec::Fixed(enc));
        }

        let enc = Encoding::for_label(name.trim().as_bytes())
            .or_else(|| Encoding::for_label(normalized.as_bytes()))
            .ok_or_else(|| CodecError::Unknown(name.to_owned()))?;

        // encoding_rs only decodes UTF-16; encoders for it produce UTF-8.
        let codec = if enc == encoding_rs::UTF_16LE {
            Codec::Fixed(OptEnc::Utf16Le)
        } else if enc == encoding_rs::UTF_16BE {
            Codec::Fixed(OptEnc::Utf16Be)
        } else if enc == encoding_rs::REPLACEMENT {
            return Err(CodecError::Unsupported(name.to_owned()));
        } else {
            Codec::Web(enc)
        };

        trace!("codec {:?} resolved to {:?}", name, codec);
        Ok(codec)
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Codec::Fixed(enc) => enc.name(),
            Codec::Web(enc) => enc.name(),
        }
    }

    /**
    Encodes `s` into `out`, appending.  Characters the encoding cannot represent are an error; nothing is replaced.
    */
    pub fn encode(&self, s: &str, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        let enc = match *self {
            Codec::Fixed(enc) => return conv::encode(enc, s.chars(), out),
            Codec::Web(enc) => enc,
        };

        let mut encoder = enc.new_encoder();
        let mut src = s;
        loop {
            let hint = encoder
                .max_buffer_length_from_utf8_without_replacement(src.len())
                .unwrap_or(src.len());
            out.reserve(hint);

            let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(src, out, true);
            let done = &s[..s.len() - src.len() + read];
            src = &src[read..];

            match result {
                EncoderResult::InputEmpty => return Ok(()),
                EncoderResult::OutputFull => continue,
                EncoderResult::Unmappable(ch) => {
                    // `done` ends with the unmappable character.
                    let position = done.chars().count() - 1;
                    return Err(EncodeError::Unrepresentable {
                        encoding: enc.name().to_owned(),
                        ch,
                        position,
                    });
                }
            }
        }
    }

    /**
    Decodes `bytes` strictly.  For `encoding_rs` codecs a byte order mark is data, not a signature.
    */
    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let enc = match *self {
            Codec::Fixed(enc) => return conv::decode(enc, bytes),
            Codec::Web(enc) => enc,
        };

        let mut decoder = enc.new_decoder_without_bom_handling();
        let mut out = String::new();
        let mut src = bytes;
        loop {
            let hint = decoder
                .max_utf8_buffer_length_without_replacement(src.len())
                .unwrap_or(src.len());
            out.reserve(hint);

            let (result, read) = decoder.decode_to_string_without_replacement(src, &mut out, true);
            src = &src[read..];

            match result {
                DecoderResult::InputEmpty => return Ok(out),
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(bad, extra) => {
                    let offset = bytes.len() - src.len() - usize::from(bad) - usize::from(extra);
                    return Err(DecodeError::malformed(enc.name(), offset, "malformed sequence"));
                }
            }
        }
    }
}
