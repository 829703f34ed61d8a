extern crate textenc;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use textenc::ffi::{SQL_CHAR, SQL_C_CHAR, SQL_C_WCHAR, SQL_WCHAR, SQL_WMETADATA};
use textenc::{CodecError, ElementWidth, EncodingPolicy, EncodingProfile, OptEnc, ProfileError, Role, Transform};

use ElementWidth::{Narrow, Wide};

/// `SQL_VARCHAR`; a real type, but not one decodings are keyed by.
const SQL_VARCHAR: i16 = 12;

#[test]
fn test_defaults() {
    let policy = EncodingPolicy::new();

    assert_eq!(policy.profile(Role::Write), &EncodingProfile::optimized(OptEnc::Utf16Le, Wide));
    assert_eq!(policy.profile(Role::ReadChar), &EncodingProfile::optimized(OptEnc::Utf8, Narrow));
    assert_eq!(policy.profile(Role::ReadWChar), &EncodingProfile::optimized(OptEnc::Utf16Le, Wide));
    assert_eq!(policy.profile(Role::Metadata), &EncodingProfile::optimized(OptEnc::Utf16Le, Wide));
}

#[test]
fn test_set_encoding() {
    let mut policy = EncodingPolicy::new();

    policy.set_encoding("UTF-8", None).expect(here!());
    assert_eq!(policy.profile(Role::Write), &EncodingProfile::optimized(OptEnc::Utf8, Narrow));

    policy.set_encoding(" utf_16_le ", None).expect(here!());
    assert_eq!(policy.profile(Role::Write), &EncodingProfile::optimized(OptEnc::Utf16Le, Wide));

    // Other roles are untouched.
    assert_eq!(policy.profile(Role::ReadChar), &EncodingProfile::optimized(OptEnc::Utf8, Narrow));
}

#[test]
fn test_set_decoding_routes_by_sql_type() {
    let mut policy = EncodingPolicy::new();

    policy.set_decoding(SQL_CHAR, "latin1", None).expect(here!());
    policy.set_decoding(SQL_WCHAR, "utf-8", Some(Wide)).expect(here!());
    policy.set_decoding(SQL_WMETADATA, "utf-32le", None).expect(here!());

    assert_eq!(policy.profile(Role::ReadChar), &EncodingProfile::optimized(OptEnc::Latin1, Narrow));
    assert_eq!(policy.profile(Role::ReadWChar), &EncodingProfile::optimized(OptEnc::Utf8, Wide));
    assert_eq!(policy.profile(Role::Metadata), &EncodingProfile::optimized(OptEnc::Utf32Le, Wide));
    assert_eq!(policy.profile(Role::Write), &EncodingProfile::optimized(OptEnc::Utf16Le, Wide));
}

#[test]
fn test_failed_settings_leave_policy_unchanged() {
    let mut policy = EncodingPolicy::new();

    let err = policy.set_decoding(SQL_VARCHAR, "utf-8", None).unwrap_err();
    assert_eq!(err, ProfileError::UnknownSqlType(SQL_VARCHAR));

    let err = policy.set_encoding("klingon", None).unwrap_err();
    assert_eq!(err, ProfileError::Codec(CodecError::Unknown("klingon".to_owned())));

    let err = policy.set_decoding(SQL_CHAR, "", None).unwrap_err();
    assert_eq!(err, ProfileError::Empty);

    assert_eq!(policy, EncodingPolicy::default());
}

#[test]
fn test_from_label() {
    let p = EncodingProfile::from_label("shift_jis", None).expect(here!());
    assert_eq!(p.transform(), &Transform::Named("shift_jis".into()));
    assert_eq!(p.width(), Narrow);
    assert_eq!(p.name(), "shift_jis");

    // Real Latin-1, not the WHATWG windows-1252 alias.
    let p = EncodingProfile::from_label("ISO-8859-1", None).expect(here!());
    assert_eq!(p.opt_enc(), Some(OptEnc::Latin1));
    assert_eq!(p.codec_name(), None);

    let p = EncodingProfile::from_label("utf-16", None).expect(here!());
    assert_eq!(p.opt_enc(), Some(OptEnc::Utf16));
    assert!(p.is_wide());

    let p = EncodingProfile::from_label("utf-32be", Some(Narrow)).expect(here!());
    assert_eq!(p.opt_enc(), Some(OptEnc::Utf32Be));
    assert_eq!(p.width(), Narrow);

    assert_eq!(EncodingProfile::from_label("   ", None).unwrap_err(), ProfileError::Empty);
    assert_eq!(
        EncodingProfile::from_label("replacement", None).unwrap_err(),
        ProfileError::Codec(CodecError::Unsupported("replacement".to_owned()))
    );
}

#[test]
#[should_panic]
fn test_named_requires_a_name() {
    let _ = EncodingProfile::named("", Narrow);
}

#[test]
fn test_role_and_c_type_mapping() {
    assert_eq!(Role::from_sql_type(SQL_CHAR), Some(Role::ReadChar));
    assert_eq!(Role::from_sql_type(SQL_WCHAR), Some(Role::ReadWChar));
    assert_eq!(Role::from_sql_type(SQL_WMETADATA), Some(Role::Metadata));
    assert_eq!(Role::from_sql_type(SQL_VARCHAR), None);

    assert_eq!(ElementWidth::from_c_type(SQL_C_CHAR), Some(Narrow));
    assert_eq!(ElementWidth::from_c_type(SQL_C_WCHAR), Some(Wide));
    assert_eq!(Wide.c_type(), SQL_C_WCHAR);
    assert_eq!(EncodingProfile::optimized(OptEnc::Utf8, Wide).to_string(), "utf-8 (SQL_C_WCHAR)");
}

#[test]
fn test_profiles_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EncodingProfile>();
    assert_send_sync::<EncodingPolicy>();
}
