#![doc = r#"
Variable-length quantities

MIDI files write delta times as big-endian base-128 numbers. Every byte but the
last has its leading bit set, marking that another byte follows.

```text
        0x00 -> 00
        0x40 -> 40
        0x7F -> 7F
        0x80 -> 81 00
      0x2000 -> C0 00
 0x0FFF_FFFF -> FF FF FF 7F
```

The file format caps delta times at four bytes (`0x0FFF_FFFF`), but this encoder
is total over `u32`: larger values take a fifth byte.
"#]

use core::ops::Deref;

/// The longest a `u32` can be when written as a VLQ.
pub const MAX_VLQ_LEN: usize = 5;

/// An encoded variable-length quantity.
///
/// Lives on the stack; deref to get the bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Vlq {
    buf: [u8; MAX_VLQ_LEN],
    start: usize,
}

impl Vlq {
    /// The encoded bytes, most significant first
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// Number of encoded bytes, `1..=5`
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        MAX_VLQ_LEN - self.start
    }
}

impl Deref for Vlq {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

/// Encode a value as a minimal variable-length quantity.
pub const fn encode_vlq(mut value: u32) -> Vlq {
    let mut buf = [0u8; MAX_VLQ_LEN];
    let mut start = MAX_VLQ_LEN - 1;
    buf[start] = (value & 0x7F) as u8;
    value >>= 7;
    while value > 0 {
        start -= 1;
        buf[start] = ((value & 0x7F) as u8) | 0x80;
        value >>= 7;
    }
    Vlq { buf, start }
}

/// The number of bytes `value` takes as a VLQ, without encoding it.
pub const fn vlq_len(value: u32) -> usize {
    let bits = u32::BITS - value.leading_zeros();
    if bits == 0 {
        1
    } else {
        bits.div_ceil(7) as usize
    }
}

#[test]
fn vlq_boundaries() {
    use pretty_assertions::assert_eq;
    let cases: [(u32, &[u8]); 10] = [
        (0, &[0x00]),
        (0x40, &[0x40]),
        (0x7F, &[0x7F]),
        (0x80, &[0x81, 0x00]),
        (0x2000, &[0xC0, 0x00]),
        (0x3FFF, &[0xFF, 0x7F]),
        (0x4000, &[0x81, 0x80, 0x00]),
        (0x1F_FFFF, &[0xFF, 0xFF, 0x7F]),
        (0x0FFF_FFFF, &[0xFF, 0xFF, 0xFF, 0x7F]),
        (u32::MAX, &[0x8F, 0xFF, 0xFF, 0xFF, 0x7F]),
    ];
    for (value, expected) in cases {
        let vlq = encode_vlq(value);
        assert_eq!(vlq.as_bytes(), expected, "encoding {value:#X}");
        assert_eq!(vlq.len(), expected.len());
        assert_eq!(vlq_len(value), expected.len());
    }
}

#[test]
fn decoding_recovers_the_value() {
    use pretty_assertions::assert_eq;
    fn decode(bytes: &[u8]) -> (u32, usize) {
        let mut value = 0u32;
        for (i, byte) in bytes.iter().enumerate() {
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return (value, i + 1);
            }
        }
        panic!("unterminated vlq {bytes:02X?}");
    }
    for value in [
        0,
        1,
        0x7F,
        0x80,
        0x3FFF,
        0x4000,
        0x1F_FFFF,
        0x20_0000,
        0x0FFF_FFFF,
        0x1000_0000,
        u32::MAX,
    ] {
        let vlq = encode_vlq(value);
        assert_eq!(decode(&vlq), (value, vlq.len()), "{value:#X}");
    }
}

#[test]
fn only_last_byte_clears_continuation() {
    let vlq = encode_vlq(0x0765_4321);
    let (last, rest) = vlq.split_last().unwrap();
    assert!(rest.iter().all(|b| b & 0x80 != 0));
    assert_eq!(last & 0x80, 0);
}
