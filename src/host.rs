/*!
Host-side values.

`HostString` is the string object the rest of the application deals in.  Like the compact representation used by several language runtimes, it stores each string in the narrowest of three unit widths that can hold every character, and always keeps one zero unit after the content.  That trailing unit is what allows the encoder to lend the storage directly to a driver expecting a terminated buffer.
*/
use std::fmt;
use std::mem;
use std::slice;

use crate::encoding::Unit;

/**
The unit width used by a `HostString`.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Repr {
    /// One byte per character; every character is at most U+00FF.
    Latin1,
    /// Two bytes per character, native order; every character is in the BMP.
    Ucs2,
    /// Four bytes per character, native order.
    Ucs4,
}

impl Repr {
    pub fn unit_width(self) -> usize {
        match self {
            Repr::Latin1 => 1,
            Repr::Ucs2 => 2,
            Repr::Ucs4 => 4,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum Storage {
    Latin1(Box<[u8]>),
    Ucs2(Box<[u16]>),
    Ucs4(Box<[char]>),
}

/**
An immutable string in compact storage.

The representation is canonical: two `HostString`s with the same characters always have the same `Repr`, so equality and hashing work on the storage directly.
*/
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HostString {
    data: Storage,
    ascii: bool,
}

fn terminated<U, I>(units: I, len: usize) -> Box<[U]>
where
    U: Unit,
    I: Iterator<Item = U>,
{
    let mut v = Vec::with_capacity(len + 1);
    v.extend(units);
    v.push(U::zero());
    v.into_boxed_slice()
}

fn content<U: Unit>(units: &[U]) -> &[U] {
    debug_assert!(units.last().map_or(false, Unit::is_zero));
    &units[..units.len() - 1]
}

impl HostString {
    pub fn new(s: &str) -> Self {
        let max = s.chars().map(u32::from).max().unwrap_or(0);
        let len = s.chars().count();

        let data = if max <= 0xFF {
            Storage::Latin1(terminated(s.chars().map(|c| c as u8), len))
        } else if max <= 0xFFFF {
            Storage::Ucs2(terminated(s.chars().map(|c| c as u16), len))
        } else {
            Storage::Ucs4(terminated(s.chars(), len))
        };

        HostString {
            data,
            ascii: max < 0x80,
        }
    }

    pub fn repr(&self) -> Repr {
        match self.data {
            Storage::Latin1(_) => Repr::Latin1,
            Storage::Ucs2(_) => Repr::Ucs2,
            Storage::Ucs4(_) => Repr::Ucs4,
        }
    }

    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    /**
    Number of characters.
    */
    pub fn len(&self) -> usize {
        match self.data {
            Storage::Latin1(ref v) => v.len() - 1,
            Storage::Ucs2(ref v) => v.len() - 1,
            Storage::Ucs4(ref v) => v.len() - 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn chars(&self) -> Chars<'_> {
        match self.data {
            Storage::Latin1(ref v) => Chars::Latin1(content(&v[..]).iter()),
            Storage::Ucs2(ref v) => Chars::Ucs2(content(&v[..]).iter()),
            Storage::Ucs4(ref v) => Chars::Ucs4(content(&v[..]).iter()),
        }
    }

    /**
    The raw storage as native-order bytes, *including* the trailing zero unit.

    The returned slice starts at the storage's address, so a pointer taken from it identifies this string's memory.
    */
    pub fn as_bytes_with_term(&self) -> &[u8] {
        fn bytes_of<U>(units: &[U]) -> &[u8] {
            // The unit types have no padding and every byte pattern is a valid `u8`.
            unsafe { slice::from_raw_parts(units.as_ptr() as *const u8, mem::size_of_val(units)) }
        }

        match self.data {
            Storage::Latin1(ref v) => &v[..],
            Storage::Ucs2(ref v) => bytes_of(&v[..]),
            Storage::Ucs4(ref v) => bytes_of(&v[..]),
        }
    }
}

impl fmt::Debug for HostString {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let prefix = match self.repr() {
            Repr::Latin1 => "L",
            Repr::Ucs2 => "U2",
            Repr::Ucs4 => "U4",
        };
        write!(fmt, "{}{:?}", prefix, self.to_string())
    }
}

impl fmt::Display for HostString {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use std::fmt::Write;
        for c in self.chars() {
            fmt.write_char(c)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for HostString {
    fn from(s: &'a str) -> Self {
        HostString::new(s)
    }
}

impl From<String> for HostString {
    fn from(s: String) -> Self {
        HostString::new(&s)
    }
}

impl PartialEq<str> for HostString {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<'a> PartialEq<&'a str> for HostString {
    fn eq(&self, other: &&'a str) -> bool {
        self.chars().eq(other.chars())
    }
}

/**
Iterator over the characters of a `HostString`.
*/
#[derive(Clone, Debug)]
pub enum Chars<'a> {
    Latin1(slice::Iter<'a, u8>),
    Ucs2(slice::Iter<'a, u16>),
    Ucs4(slice::Iter<'a, char>),
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match *self {
            Chars::Latin1(ref mut it) => it.next().map(|&b| char::from(b)),
            // UCS-2 storage is built from `char`s, so it never holds a surrogate.
            Chars::Ucs2(ref mut it) => it
                .next()
                .map(|&u| char::from_u32(u32::from(u)).unwrap_or(char::REPLACEMENT_CHARACTER)),
            Chars::Ucs4(ref mut it) => it.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match *self {
            Chars::Latin1(ref it) => it.size_hint(),
            Chars::Ucs2(ref it) => it.size_hint(),
            Chars::Ucs4(ref it) => it.size_hint(),
        }
    }
}

/**
A dynamically typed host value, as received from a caller binding parameters.

Only `Str` can be encoded as text.  `None` is the host's "no value" and encodes to an absent buffer.
*/
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    None,
    Str(HostString),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl HostValue {
    pub fn type_name(&self) -> &'static str {
        match *self {
            HostValue::None => "NoneType",
            HostValue::Str(_) => "str",
            HostValue::Bytes(_) => "bytes",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Bool(_) => "bool",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(*self, HostValue::None)
    }
}

impl<'a> From<&'a str> for HostValue {
    fn from(s: &'a str) -> Self {
        HostValue::Str(s.into())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::Str(s.into())
    }
}

impl From<HostString> for HostValue {
    fn from(s: HostString) -> Self {
        HostValue::Str(s)
    }
}

impl<T> From<Option<T>> for HostValue
where
    T: Into<HostValue>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(HostValue::None, Into::into)
    }
}
