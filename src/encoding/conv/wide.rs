/*!
UTF-16 and UTF-32 in either byte order.
*/
use crate::encoding::ByteOrder;
use crate::error::DecodeError;

const BOM: char = '\u{FEFF}';

pub fn encode_utf16<I>(chars: I, order: ByteOrder, bom: bool, out: &mut Vec<u8>)
where
    I: IntoIterator<Item = char>,
{
    let mut buf = [0; 2];
    let bom = if bom { Some(BOM) } else { None };
    for c in bom.into_iter().chain(chars) {
        for &unit in c.encode_utf16(&mut buf).iter() {
            order.put_u16(unit, out);
        }
    }
}

pub fn encode_utf32<I>(chars: I, order: ByteOrder, bom: bool, out: &mut Vec<u8>)
where
    I: IntoIterator<Item = char>,
{
    let bom = if bom { Some(BOM) } else { None };
    for c in bom.into_iter().chain(chars) {
        order.put_u32(u32::from(c), out);
    }
}

/**
Works out the byte order of UTF-16 data.

Returns the order and the number of bytes taken by the mark.  Data without a mark is big-endian.
*/
pub fn sniff_utf16(bytes: &[u8]) -> (ByteOrder, usize) {
    match bytes {
        [0xFE, 0xFF, ..] => (ByteOrder::Big, 2),
        [0xFF, 0xFE, ..] => (ByteOrder::Little, 2),
        _ => (ByteOrder::Big, 0),
    }
}

/**
The UTF-32 sibling of `sniff_utf16`.
*/
pub fn sniff_utf32(bytes: &[u8]) -> (ByteOrder, usize) {
    match bytes {
        [0x00, 0x00, 0xFE, 0xFF, ..] => (ByteOrder::Big, 4),
        [0xFF, 0xFE, 0x00, 0x00, ..] => (ByteOrder::Little, 4),
        _ => (ByteOrder::Big, 0),
    }
}

/**
Decodes UTF-16.  If `order` is `None`, the order is taken from a leading mark as described by `sniff_utf16`.
*/
pub fn decode_utf16(name: &str, bytes: &[u8], order: Option<ByteOrder>) -> Result<String, DecodeError> {
    let (order, skip) = match order {
        Some(order) => (order, 0),
        None => sniff_utf16(bytes),
    };

    let body = &bytes[skip..];
    let units = body.chunks_exact(2).map(|c| order.read_u16([c[0], c[1]]));

    let mut out = String::with_capacity(body.len() / 2);
    let mut consumed = 0;
    for r in char::decode_utf16(units) {
        match r {
            Ok(c) => {
                consumed += c.len_utf16();
                out.push(c);
            }
            Err(_) => {
                return Err(DecodeError::malformed(name, skip + consumed * 2, "unpaired surrogate"));
            }
        }
    }

    if body.len() % 2 != 0 {
        return Err(DecodeError::malformed(name, bytes.len() - 1, "truncated data"));
    }

    Ok(out)
}

/**
Decodes UTF-32.  If `order` is `None`, the order is taken from a leading mark as described by `sniff_utf32`.
*/
pub fn decode_utf32(name: &str, bytes: &[u8], order: Option<ByteOrder>) -> Result<String, DecodeError> {
    let (order, skip) = match order {
        Some(order) => (order, 0),
        None => sniff_utf32(bytes),
    };

    let body = &bytes[skip..];
    let mut out = String::with_capacity(body.len() / 4);
    for (i, c) in body.chunks_exact(4).enumerate() {
        let cp = order.read_u32([c[0], c[1], c[2], c[3]]);
        match char::from_u32(cp) {
            Some(ch) => out.push(ch),
            None => {
                return Err(DecodeError::malformed(name, skip + i * 4, "code point not in range(0x110000)"));
            }
        }
    }

    if body.len() % 4 != 0 {
        let tail = body.len() - body.len() % 4;
        return Err(DecodeError::malformed(name, skip + tail, "truncated data"));
    }

    Ok(out)
}
