extern crate textenc;

use textenc::ffi::SQL_WMETADATA;
use textenc::{decode, encode, EncodingPolicy, HostValue, Role};

const WORD: &str = "gªrçon";

fn main() {
    let mut policy = EncodingPolicy::new();
    if let Err(err) = policy.set_decoding(SQL_WMETADATA, "utf-8", None) {
        eprintln!("could not configure metadata decoding: {}", err);
        return;
    }

    for &role in &[Role::Write, Role::ReadChar, Role::ReadWChar, Role::Metadata] {
        let profile = policy.profile(role);
        let value = HostValue::from(WORD);

        let encoded = match encode(&value, profile) {
            Ok(encoded) => encoded,
            Err(err) => {
                println!("{:?} ({}): couldn't encode: {}", role, profile, err);
                continue;
            }
        };

        let buf = match encoded.buffer() {
            Some(buf) => buf,
            None => continue,
        };
        println!(
            "{:?} ({}): {:?} indicator={} borrowed={}",
            role,
            profile,
            buf.bytes_with_term(),
            buf.indicator(),
            buf.is_borrowed()
        );

        match decode(profile, Some(buf.bytes())) {
            Ok(Some(s)) => println!("  decoded: {:?}", s),
            Ok(None) => println!("  decoded: NULL"),
            Err(err) => println!("  couldn't decode: {}", err),
        }
    }
}
