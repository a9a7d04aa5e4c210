//! Size figures for a compressed text
use bit_vec::BitVec;

#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Stats {
    /// UTF-8 length of the input text
    pub original_bytes: usize,
    pub compressed_bits: usize,
    /// compressed bits rounded up to whole bytes
    pub compressed_bytes: usize
}

impl Stats {
    pub fn new(text: &str,bits: &BitVec) -> Self {
        Self {
            original_bytes: text.len(),
            compressed_bits: bits.len(),
            compressed_bytes: (bits.len() + 7) / 8
        }
    }
    pub fn original_kb(&self) -> f64 {
        self.original_bytes as f64 / 1024.0
    }
    /// fractional bytes are kept, so this is bits/8/1024
    pub fn compressed_kb(&self) -> f64 {
        self.compressed_bits as f64 / 8.0 / 1024.0
    }
    /// original size over compressed size, None for an empty stream
    pub fn ratio(&self) -> Option<f64> {
        match self.compressed_bits {
            0 => None,
            _ => Some(self.original_kb() / self.compressed_kb())
        }
    }
}

#[test]
fn known_example() {
    let text = "the cat sat on the mat the cat ran";
    let bits = crate::bits::parse_bit_string("1100101011110101100100").unwrap();
    let stats = Stats::new(text,&bits);
    assert_eq!(stats.original_bytes,34);
    assert_eq!(stats.compressed_bits,22);
    assert_eq!(stats.compressed_bytes,3);
    let ratio = stats.ratio().expect("no ratio");
    assert!((ratio - 34.0*8.0/22.0).abs() < 1e-9);
}

#[test]
fn empty_stream() {
    let stats = Stats::new("",&BitVec::new());
    assert_eq!(stats.ratio(),None);
    assert_eq!(stats.compressed_kb(),0.0);
}
