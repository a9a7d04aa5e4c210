//! Word Huffman compression session
//!
//! Runs the whole pipeline on one text: count words, build the tree, assign codes,
//! encode.  The result keeps the tree, which is all that is needed to expand
//! the stream again.  Nothing is shared between sessions.

use bit_vec::BitVec;
use crate::codes::{self,CodeTable};
use crate::decode::{self,Progress};
use crate::tree::{self,HuffTree};
use crate::{freq,encode,Error,Options};

/// Output of one compression session
#[derive(Clone,Debug)]
pub struct Compressed {
    pub bits: BitVec,
    pub tree: HuffTree,
    pub codes: CodeTable
}

/// Main compression function.
/// Fails on empty text or text larger than `opt.max_input_size`.
/// If `opt.verify` is set the stream is decoded again and compared with the input.
pub fn compress(text: &str,opt: &Options) -> Result<Compressed,Error> {
    let size = text.len() as u64;
    if size > opt.max_input_size {
        return Err(Error::InputTooLarge { size, max: opt.max_input_size });
    }
    let freq = freq::analyze(text)?;
    let tree = tree::build_tree(&freq)?;
    let codes = codes::generate_codes(&tree);
    let words = freq::words(text);
    let bits = encode::encode(&words,&codes)?;
    if opt.verify {
        log::debug!("verifying {} bits",bits.len());
        if decode::decode(&bits,&tree)? != words {
            log::error!("decoded words differ from input");
            return Err(Error::RoundTripMismatch);
        }
    }
    Ok(Compressed { bits, tree, codes })
}

/// Main decompression function, words are joined with single spaces.
pub fn expand(compressed: &Compressed) -> Result<String,Error> {
    expand_with_progress(compressed,|_| {})
}

/// Same as `expand`, reporting progress after each word.
pub fn expand_with_progress<F>(compressed: &Compressed,observer: F) -> Result<String,Error>
where F: FnMut(&Progress) {
    let words = decode::decode_with_progress(&compressed.bits,&compressed.tree,observer)?;
    Ok(decode::join_words(&words))
}

#[test]
fn invertibility() {
    let samples = [
        "the cat sat on the mat the cat ran",
        "a a a",
        "solo",
        "I am Sam. Sam I am. I do not like this Sam I am.\n",
        "To be, or not to be, that is the question:\nWhether 'tis nobler in the mind to suffer\n\
            The slings and arrows of outrageous fortune,\nOr to take arms against a sea of troubles"
    ];
    let mut opt = crate::STD_OPTIONS.clone();
    opt.verify = true;
    for text in samples {
        let compressed = compress(text,&opt).expect("compression failed");
        assert!(compressed.codes.is_prefix_free());
        assert_eq!(compressed.bits.len(),compressed.tree.weighted_path_length());
        let expanded = expand(&compressed).expect("expansion failed");
        assert_eq!(expanded,decode::join_words(&freq::words(text)));
    }
}

#[test]
fn single_symbol_session() {
    let compressed = compress("a a a",&crate::STD_OPTIONS).expect("compression failed");
    assert_eq!(crate::bits::to_bit_string(&compressed.bits),"000");
    assert_eq!(compressed.codes.to_string(),"a\t0\n");
    assert_eq!(expand(&compressed),Ok("a a a".to_string()));
}

#[test]
fn rejects_empty_and_large() {
    assert_eq!(compress("   ",&crate::STD_OPTIONS).map(|_| ()),Err(Error::EmptyInput));
    let opt = Options { max_input_size: 4, verify: false };
    assert_eq!(compress("abc de",&opt).map(|_| ()),Err(Error::InputTooLarge { size: 6, max: 4 }));
}

#[test]
fn progress_does_not_change_output() {
    let compressed = compress("x y x z x y",&crate::STD_OPTIONS).expect("compression failed");
    let mut calls = 0;
    let with = expand_with_progress(&compressed,|_| calls += 1).expect("expansion failed");
    assert_eq!(calls,6);
    assert_eq!(with,expand(&compressed).expect("expansion failed"));
}
