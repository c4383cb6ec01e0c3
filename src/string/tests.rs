#![cfg(test)]

use std::fmt::Write;

use super::*;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

fn assert_terminated(string: &CString) {
    let bytes = string.as_bytes_with_nul();
    assert_eq!(bytes.len(), string.len() + 1);
    assert_eq!(bytes.last(), Some(&0), "A CString should always end in a NUL byte.");
}

#[test]
fn test_new() {
    let string = CString::new();
    assert!(string.is_empty());
    assert_eq!(string.as_bytes_with_nul(), &[0]);
    assert_eq!(string.as_cstr(), c"");
    assert_eq!(string, CString::default());
}

#[test]
fn test_extend_cstr() {
    let mut string = CString::from("Hello, ");
    string.extend_cstr(c"世界!");
    assert_terminated(&string);

    assert_eq!(string, CString::from("Hello, 世界!"));
    assert_eq!(string.len(), "Hello, 世界!".len());
    assert!(string.try_extend_cstr(c"\xFF").is_err());
    assert_eq!(string, "Hello, 世界!", "A failed extension should leave the string unchanged.");
}

#[test]
fn test_push_multi_byte() {
    let mut string = CString::from("Hello, ");
    for ch in ['世', '界', '!'] {
        string.push(ch);
        assert_terminated(&string);
    }

    assert_eq!(string.as_cstr(), c"Hello, 世界!");
    assert_eq!(string.len(), 14);
    assert_eq!(string.get(7), 0xE4);
    assert_eq!(string.try_get(14), Err(IndexOutOfBounds { index: 14, len: 14 }));
    assert_panics!(
        {
            string.get(14);
        },
        "The terminator shouldn't be reachable through get."
    );

    string.push('🦀');
    assert_eq!(string, "Hello, 世界!🦀");
}

#[test]
fn test_terminated_after_mutation() {
    let mut string = CString::new();

    string.push_str("abc");
    assert_terminated(&string);

    string.extend(['d', 'é']);
    assert_terminated(&string);

    string.extend(["fg", "", "h"]);
    assert_terminated(&string);

    write!(string, "{}-{:x}", 1, 255).unwrap();
    assert_terminated(&string);
    assert_eq!(string, "abcdéfgh1-ff");

    string.clear();
    assert_terminated(&string);
    assert!(string.is_empty());
}

#[test]
fn test_terminated_after_panicking_extend() {
    let mut string = CString::from("ab");
    assert_panics!(
        {
            let chars = ['c', 'd'].into_iter();
            string.extend(chars.map(|ch| if ch == 'd' { panic!("no d allowed") } else { ch }));
        },
        contains = "no d allowed"
    );

    assert_terminated(&string);
    assert_eq!(string, "abc", "Codepoints added before the panic should be kept.");
    assert_eq!(string.as_cstr(), c"abc");

    let mut string = CString::new();
    assert_panics!({
        string.extend(["x", "y", "z"].into_iter().inspect(|&text| assert_ne!(text, "z")));
    });
    assert_terminated(&string);
    assert_eq!(string, "xy");
}

#[test]
fn test_interior_nul() {
    let mut string = CString::from("ab");
    string.push('\0');
    string.push_str("cd");

    assert_eq!(string.len(), 5);
    assert_eq!(string.as_str(), "ab\0cd");
    assert_eq!(string.as_cstr(), c"ab", "C code should only see up to the first NUL.");
}

#[test]
fn test_try_from_bytes() {
    let string = CString::try_from_bytes("größe".as_bytes()).unwrap();
    assert_eq!(string, "größe");

    assert!(matches!(
        CString::try_from_bytes(&[b'a', 0xC0, 0x80]),
        Err(FromBytesError::InvalidUtf8(_))
    ));

    let mut string = CString::from("x");
    assert!(string.try_extend_bytes(&[0xE4, 0xB8]).is_err());
    assert_eq!(string, "x");
}

#[test]
fn test_codepoints() {
    for text in ["", "ascii", "Hello, 世界!", "ab\0c", "🦀 crab", "é"] {
        let string = CString::from(text);
        assert!(
            string.codepoints().eq(text.chars()),
            "Codepoints should match chars for {text:?}."
        );
        assert_eq!(string.codepoints().has_next(), !text.is_empty());
    }

    let collected: CString = "Hello, 世界!".chars().rev().collect();
    assert_eq!(collected, "!界世 ,olleH");
}

#[test]
fn test_str() {
    let string = CString::from("Hello, 世界!");
    let view = string.as_str();

    assert_eq!(view.len(), 14);
    assert_eq!(view.as_str(), "Hello, 世界!");
    assert_eq!(view.get(0), b'H');
    assert_eq!(view, Str::new("Hello, 世界!"));
    assert_eq!(view.to_string(), "Hello, 世界!");
    assert_eq!(format!("{view:?}"), "\"Hello, 世界!\"");
    assert_eq!(format!("{string:?}"), "\"Hello, 世界!\"");

    // SAFETY: The range lies within one live str and falls on codepoint boundaries.
    let sub = unsafe { Str::from_range(view.begin().add(7), view.end()) };
    assert_eq!(sub, "世界!");

    assert!(Str::new("zz") < Str::new("aaa"), "Shorter strings should sort first.");
    assert!(Str::new("abc") < Str::new("abd"));
}

#[test]
fn test_clone_and_hash() {
    use std::hash::{BuildHasher, RandomState};

    let string = CString::from("clone me");
    let clone = string.clone();
    assert_eq!(clone, string);
    assert_terminated(&clone);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&string), state.hash_one(&clone));
    assert_eq!(state.hash_one(&string), state.hash_one(string.as_str()));
}

#[test]
fn test_utf8_encode() {
    let boundaries = [
        '\0', 'a', '\u{7F}', '\u{80}', 'é', '\u{7FF}', '\u{800}', '世', '\u{FFFF}', '\u{10000}',
        '🦀', char::MAX,
    ];

    for ch in boundaries {
        let mut buf = [0; 4];
        let expected = ch.encode_utf8(&mut buf).as_bytes();

        let mut out = [0; 4];
        let width = utf8::encode(ch, &mut out);
        assert_eq!(&out[..width], expected, "Encoding of {ch:?} should match std.");
        assert_eq!(utf8::decode(&out[..width]), Some((ch, width)));
    }
}

#[test]
fn test_utf8_decode_invalid() {
    assert_eq!(utf8::decode(&[]), None);
    assert_eq!(utf8::decode(&[0x80]), None, "A lone continuation byte isn't a lead byte.");
    assert_eq!(utf8::decode(&[0xC0, 0x80]), None, "Overlong encodings should be rejected.");
    assert_eq!(utf8::decode(&[0xED, 0xA0, 0x80]), None, "Surrogates should be rejected.");
    assert_eq!(utf8::decode(&[0xF4, 0x90, 0x80, 0x80]), None, "Past U+10FFFF.");
    assert_eq!(utf8::decode(&[0xE4, 0xB8]), None, "Truncated sequences should be rejected.");
    assert_eq!(utf8::decode(&[0xE4, 0x41, 0x96]), None);
    assert_eq!(utf8::decode(&[0xFF]), None);

    assert_eq!(utf8::decode(b"ab"), Some(('a', 1)), "Only the first scalar is decoded.");
}
