//! Minimal UTF-8 encoding and decoding, one scalar value at a time.

/// Scalar values below this are encoded in one byte.
const ONE_BYTE_LIMIT: u32 = 0x80;
/// Scalar values below this are encoded in two bytes.
const TWO_BYTE_LIMIT: u32 = 0x800;
/// Scalar values below this are encoded in three bytes.
const THREE_BYTE_LIMIT: u32 = 0x10000;

const CONTINUATION: u8 = 0b1000_0000;
const CONTINUATION_MASK: u8 = 0b1100_0000;
const PAYLOAD: u32 = 0b11_1111;

/// The number of bytes needed to encode `value`.
const fn encoded_width(value: u32) -> usize {
    if value < ONE_BYTE_LIMIT {
        1
    } else if value < TWO_BYTE_LIMIT {
        2
    } else if value < THREE_BYTE_LIMIT {
        3
    } else {
        4
    }
}

/// Writes the UTF-8 encoding of `ch` to the start of `out`, returning the number of bytes written.
pub fn encode(ch: char, out: &mut [u8; 4]) -> usize {
    let value = u32::from(ch);
    let width = encoded_width(value);

    match width {
        1 => out[0] = value as u8,
        2 => {
            out[0] = 0b1100_0000 | (value >> 6) as u8;
            out[1] = CONTINUATION | (value & PAYLOAD) as u8;
        },
        3 => {
            out[0] = 0b1110_0000 | (value >> 12) as u8;
            out[1] = CONTINUATION | ((value >> 6) & PAYLOAD) as u8;
            out[2] = CONTINUATION | (value & PAYLOAD) as u8;
        },
        _ => {
            out[0] = 0b1111_0000 | (value >> 18) as u8;
            out[1] = CONTINUATION | ((value >> 12) & PAYLOAD) as u8;
            out[2] = CONTINUATION | ((value >> 6) & PAYLOAD) as u8;
            out[3] = CONTINUATION | (value & PAYLOAD) as u8;
        },
    }

    width
}

/// Returns the width of the sequence started by `lead`, or [`None`] if `lead` can't start one.
const fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Decodes the first scalar value in `bytes`, returning it along with its width in bytes.
///
/// Returns [`None`] if `bytes` is empty or doesn't start with a complete, shortest-form encoding
/// of a scalar value.
pub fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let (&lead, rest) = bytes.split_first()?;
    let width = sequence_width(lead)?;

    let mut value = match width {
        1 => return Some((char::from(lead), 1)),
        2 => u32::from(lead & 0b1_1111),
        3 => u32::from(lead & 0b1111),
        _ => u32::from(lead & 0b111),
    };

    for &byte in rest.get(..width - 1)? {
        if byte & CONTINUATION_MASK != CONTINUATION {
            return None;
        }
        value = (value << 6) | (u32::from(byte) & PAYLOAD);
    }

    // Overlong encodings.
    if encoded_width(value) != width {
        return None;
    }

    // Rejects surrogates and values past U+10FFFF.
    char::from_u32(value).map(|ch| (ch, width))
}
