extern crate textenc;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::ptr;

use textenc::host::Repr;
use textenc::{decode, decode_ptr, encode, CodecError, DecodeError, ElementWidth, EncodingProfile, HostValue, OptEnc};

use ElementWidth::{Narrow, Wide};

fn decode_str(profile: &EncodingProfile, bytes: &[u8]) -> Result<String, DecodeError> {
    decode(profile, Some(bytes)).map(|s| s.expect(here!()).to_string())
}

#[test]
fn test_null_is_none() {
    let profiles = [
        EncodingProfile::optimized(OptEnc::Utf8, Narrow),
        EncodingProfile::optimized(OptEnc::Utf16, Wide),
        EncodingProfile::named("shift_jis", Narrow),
    ];

    for profile in &profiles {
        assert_eq!(decode(profile, None).expect(here!()), None);
        let r = unsafe { decode_ptr(profile, ptr::null(), 99) };
        assert_eq!(r.expect(here!()), None);
    }
}

#[test]
fn test_empty() {
    let profile = EncodingProfile::optimized(OptEnc::Utf32, Wide);
    assert_eq!(decode_str(&profile, &[]).expect(here!()), "");

    // Even a bogus codec name: there is nothing to decode.
    let profile = EncodingProfile::named("klingon", Narrow);
    assert_eq!(decode_str(&profile, &[]).expect(here!()), "");
}

#[test]
fn test_utf8_malformed() {
    let profile = EncodingProfile::optimized(OptEnc::Utf8, Narrow);

    match decode_str(&profile, &[0xFF, 0xFE]) {
        Err(DecodeError::Malformed { encoding, offset, .. }) => {
            assert_eq!(encoding, "utf-8");
            assert_eq!(offset, 0);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    match decode_str(&profile, b"ab\xc3") {
        Err(DecodeError::Malformed { offset, reason, .. }) => {
            assert_eq!(offset, 2);
            assert_eq!(reason, "unexpected end of data");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_utf16_native_defaults_to_big_endian() {
    let profile = EncodingProfile::optimized(OptEnc::Utf16, Wide);

    assert_eq!(decode_str(&profile, &[0x00, 0x41, 0x00, 0x42]).expect(here!()), "AB");

    // Unmarked little-endian data is not recognised as such.
    let le = decode_str(&profile, &[0x41, 0x00, 0x42, 0x00]).expect(here!());
    assert_ne!(le, "AB");
    assert_eq!(le, "\u{4100}\u{4200}");
}

#[test]
fn test_utf16_native_honours_bom() {
    let profile = EncodingProfile::optimized(OptEnc::Utf16, Wide);

    assert_eq!(decode_str(&profile, &[0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00]).expect(here!()), "AB");
    assert_eq!(decode_str(&profile, &[0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42]).expect(here!()), "AB");
}

#[test]
fn test_utf16_fixed_order_keeps_bom() {
    let profile = EncodingProfile::optimized(OptEnc::Utf16Le, Wide);
    assert_eq!(decode_str(&profile, &[0xFF, 0xFE, 0x41, 0x00]).expect(here!()), "\u{FEFF}A");
}

#[test]
fn test_utf16_malformed() {
    let profile = EncodingProfile::optimized(OptEnc::Utf16Le, Wide);

    match decode_str(&profile, &[0x41, 0x00, 0x42]) {
        Err(DecodeError::Malformed { offset, reason, .. }) => {
            assert_eq!(offset, 2);
            assert_eq!(reason, "truncated data");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    match decode_str(&profile, &[0x41, 0x00, 0x00, 0xD8, 0x41, 0x00]) {
        Err(DecodeError::Malformed { offset, reason, .. }) => {
            assert_eq!(offset, 2);
            assert_eq!(reason, "unpaired surrogate");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_utf32() {
    let native = EncodingProfile::optimized(OptEnc::Utf32, Wide);
    assert_eq!(decode_str(&native, &[0, 0, 0, 0x41]).expect(here!()), "A");
    assert_eq!(decode_str(&native, &[0xFF, 0xFE, 0, 0, 0x41, 0, 0, 0]).expect(here!()), "A");

    let le = EncodingProfile::optimized(OptEnc::Utf32Le, Wide);
    assert_eq!(decode_str(&le, &[0x00, 0xF6, 0x01, 0x00]).expect(here!()), "\u{1F600}");

    match decode_str(&le, &[0x41, 0, 0, 0, 0x00, 0x00, 0x11, 0x00]) {
        Err(DecodeError::Malformed { offset, .. }) => assert_eq!(offset, 4),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_latin1() {
    const WORD_L1: &[u8] = b"g\xaar\xe7on";

    let profile = EncodingProfile::optimized(OptEnc::Latin1, Narrow);
    let s = decode(&profile, Some(WORD_L1)).expect(here!()).expect(here!());
    assert_eq!(s, "gªrçon");
    assert_eq!(s.repr(), Repr::Latin1);
}

#[test]
fn test_named_shift_jis() {
    let profile = EncodingProfile::named("shift_jis", Narrow);

    let s = decode(&profile, Some(&[0x93, 0xFA, 0x96, 0x7B][..])).expect(here!()).expect(here!());
    assert_eq!(s, "日本");
    assert_eq!(s.repr(), Repr::Ucs2);

    match decode_str(&profile, &[0x41, 0x93]) {
        Err(DecodeError::Malformed { encoding, offset, .. }) => {
            assert_eq!(encoding, "Shift_JIS");
            assert_eq!(offset, 1);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_named_unknown() {
    let profile = EncodingProfile::named("klingon", Narrow);
    let err = decode_str(&profile, b"abc").unwrap_err();
    assert_eq!(err, DecodeError::Codec(CodecError::Unknown("klingon".to_owned())));
}

#[test]
fn test_decode_ptr_from_driver_buffer() {
    const WORD: &str = "gªrçon";

    let profile = EncodingProfile::optimized(OptEnc::Utf16Le, Wide);
    let value = HostValue::from(WORD);
    let encoded = encode(&value, &profile).expect(here!());
    let buf = encoded.buffer().expect(here!());

    // What a driver would report: the byte length, terminator excluded.
    let s = unsafe { decode_ptr(&profile, buf.as_ptr(), buf.bytes().len()) };
    assert_eq!(s.expect(here!()).expect(here!()), WORD);
}
