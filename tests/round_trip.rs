extern crate proptest;
extern crate textenc;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use proptest::prelude::*;

use textenc::{decode, encode, ElementWidth, EncodingProfile, HostValue, OptEnc};

const UNICODE_KINDS: &[OptEnc] = &[
    OptEnc::Utf8,
    OptEnc::Utf16,
    OptEnc::Utf16Le,
    OptEnc::Utf16Be,
    OptEnc::Utf32,
    OptEnc::Utf32Le,
    OptEnc::Utf32Be,
];

fn widths() -> impl Strategy<Value = ElementWidth> {
    prop_oneof![Just(ElementWidth::Narrow), Just(ElementWidth::Wide)]
}

fn round_trip(s: &str, profile: &EncodingProfile) -> String {
    let value = HostValue::from(s);
    let encoded = encode(&value, profile).expect(here!());
    let buf = encoded.buffer().expect(here!());
    let decoded = decode(profile, Some(buf.bytes())).expect(here!()).expect(here!());
    decoded.to_string()
}

proptest! {
    #[test]
    fn unicode_kinds_round_trip(
        s in "\\PC*",
        kind in prop::sample::select(UNICODE_KINDS),
        width in widths(),
    ) {
        let profile = EncodingProfile::optimized(kind, width);
        prop_assert_eq!(round_trip(&s, &profile), s);
    }

    #[test]
    fn latin1_round_trip(s in "[\\x00-\\xff]*", width in widths()) {
        let profile = EncodingProfile::optimized(OptEnc::Latin1, width);
        prop_assert_eq!(round_trip(&s, &profile), s);
    }
}

#[test]
fn test_named_round_trip() {
    const CASES: &[(&str, &str)] = &[
        ("shift_jis", "日本語のテキスト"),
        ("windows-1252", "gªrçon €5"),
        ("euc-kr", "한국어"),
        ("utf-16be", "gªrçon \u{1F600}"),
    ];

    for &(name, text) in CASES {
        let profile = EncodingProfile::named(name, ElementWidth::Narrow);
        assert_eq!(round_trip(text, &profile), text, "{}", name);
    }
}

#[test]
fn test_native_bom_survives_leading_bom_char() {
    // Only the first mark is a signature.
    let profile = EncodingProfile::optimized(OptEnc::Utf16, ElementWidth::Wide);
    assert_eq!(round_trip("\u{FEFF}x", &profile), "\u{FEFF}x");
}
