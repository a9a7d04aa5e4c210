//! # wordhuff
//!
//! Word-granularity Huffman coding of text.
//!
//! Text is split on whitespace into words, a prefix-free code is built over the
//! distinct words weighted by how often they occur, and the words are encoded as
//! one bit sequence.  Decoding walks the Huffman tree bit by bit.
//!
//! The pipeline is available piece by piece:
//! ```rust
//! let text = "the cat sat on the mat";
//! let freq = wordhuff::freq::analyze(text)?;
//! let tree = wordhuff::tree::build_tree(&freq)?;
//! let codes = wordhuff::codes::generate_codes(&tree);
//! let words = wordhuff::freq::words(text);
//! let bits = wordhuff::encode::encode(&words,&codes)?;
//! let decoded = wordhuff::decode::decode(&bits,&tree)?;
//! assert_eq!(decoded,words);
//! # Ok::<(),wordhuff::Error>(())
//! ```
//! or as a whole session through `word_huff::compress` and `word_huff::expand`.

mod tools;
pub mod freq;
pub mod tree;
pub mod codes;
pub mod encode;
pub mod decode;
pub mod stats;
pub mod word_huff;

pub use tools::bits;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Codec Errors
#[derive(thiserror::Error,Debug,PartialEq)]
pub enum Error {
    #[error("input text is empty")]
    EmptyInput,
    #[error("frequency table is empty")]
    EmptyFrequencyTable,
    #[error("word `{0}` is not in the code table")]
    UnknownSymbol(String),
    #[error("bit stream ends inside a code after {bits_consumed} of {total_bits} bits")]
    TruncatedStream {
        bits_consumed: usize,
        total_bits: usize
    },
    #[error("no branch for bit {bit_index}, stream and tree do not match")]
    MalformedTree {
        bit_index: usize
    },
    #[error("input is {size} bytes, limit is {max}")]
    InputTooLarge {
        size: u64,
        max: u64
    },
    #[error("unexpected character `{0}` in bit string")]
    BadBitString(char),
    #[error("decoded words do not match the input")]
    RoundTripMismatch
}

/// Options controlling compression
#[derive(Clone)]
pub struct Options {
    /// return error if the text is larger than this many bytes
    pub max_input_size: u64,
    /// decode the stream right after encoding and compare with the input words
    pub verify: bool
}

pub const STD_OPTIONS: Options = Options {
    max_input_size: u32::MAX as u64/4,
    verify: false
};
