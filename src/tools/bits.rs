//! Helpers for showing and reading bit sequences.
//!
//! Codes and encoded streams are `bit_vec::BitVec`.  These functions convert them
//! to and from the textual form `"0110..."`, and pack them into bytes for display.

use bit_vec::BitVec;
use crate::Error;

/// render bits as a string of `0` and `1`
pub fn to_bit_string(bits: &BitVec) -> String {
    bits.iter().map(|b| if b { '1' } else { '0' }).collect()
}

/// Parse a string of `0` and `1`, whitespace is skipped so that
/// wrapped or grouped output can be fed back in.
pub fn parse_bit_string(s: &str) -> Result<BitVec,Error> {
    let mut ans = BitVec::new();
    for c in s.chars() {
        match c {
            '0' => ans.push(false),
            '1' => ans.push(true),
            c if c.is_whitespace() => {},
            c => return Err(Error::BadBitString(c))
        }
    }
    Ok(ans)
}

/// MSB first, the last byte is padded with zeros
pub fn pack(bits: &BitVec) -> Vec<u8> {
    bits.to_bytes()
}

#[test]
fn string_form() {
    let bits = parse_bit_string("1100 101\n0").expect("parse failed");
    assert_eq!(bits.len(),8);
    assert_eq!(to_bit_string(&bits),"11001010");
    assert_eq!(parse_bit_string("10x1"),Err(Error::BadBitString('x')));
    assert_eq!(to_bit_string(&BitVec::new()),"");
}

#[test]
fn packing() {
    let bits = parse_bit_string("1100101011110101100100").expect("parse failed");
    assert_eq!(pack(&bits),hex::decode("CAF590").unwrap());
}
