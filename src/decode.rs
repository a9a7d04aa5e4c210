//! Decoding a bit stream by walking the Huffman tree
//!
//! A cursor starts at the root, each bit moves it left (0) or right (1), and
//! landing on a leaf emits that word and puts the cursor back at the root.
//! The stream has to end with the cursor at the root, otherwise the last code
//! was cut short.

use bit_vec::BitVec;
use crate::tree::{HuffTree,Node};
use crate::Error;

/// Snapshot passed to a progress observer after each decoded word.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Progress {
    pub symbols_decoded: usize,
    pub total_bits: usize,
    pub bits_consumed: usize
}

impl Progress {
    /// fraction of the stream consumed, in [0,1]
    pub fn fraction(&self) -> f64 {
        match self.total_bits {
            0 => 1.0,
            n => self.bits_consumed as f64 / n as f64
        }
    }
    pub fn percent(&self) -> f64 {
        100.0 * self.fraction()
    }
}

/// Decode `bits` against `tree`, returning the words in order.
pub fn decode(bits: &BitVec,tree: &HuffTree) -> Result<Vec<String>,Error> {
    decode_with_progress(bits,tree,|_| {})
}

/// Same as `decode`, calling `observer` after every word is emitted.
/// The observer only watches, it has no way to change the result.
pub fn decode_with_progress<F>(bits: &BitVec,tree: &HuffTree,mut observer: F) -> Result<Vec<String>,Error>
where F: FnMut(&Progress) {
    let total_bits = bits.len();
    let mut ans: Vec<String> = Vec::new();
    let root = tree.root();
    let mut emit = |symbol: &str,bits_consumed: usize,ans: &mut Vec<String>| {
        ans.push(symbol.to_string());
        observer(&Progress {
            symbols_decoded: ans.len(),
            total_bits,
            bits_consumed
        });
    };
    // lone leaf, its code is the single bit 0
    if let Node::Leaf { symbol, .. } = root {
        for (i,bit) in bits.iter().enumerate() {
            if bit {
                log::error!("bit {} is 1 but the tree has a single leaf",i);
                return Err(Error::MalformedTree { bit_index: i });
            }
            emit(symbol.as_str(),i+1,&mut ans);
        }
        log::debug!("decoded {} words from {} bits",ans.len(),total_bits);
        return Ok(ans);
    }
    let mut curs = root;
    let mut pending = 0;
    for (i,bit) in bits.iter().enumerate() {
        curs = match curs.child(bit) {
            Some(node) => node,
            None => {
                log::error!("no branch for bit {}",i);
                return Err(Error::MalformedTree { bit_index: i });
            }
        };
        pending += 1;
        if let Node::Leaf { symbol, .. } = curs {
            emit(symbol.as_str(),i+1,&mut ans);
            curs = root;
            pending = 0;
        }
    }
    if pending > 0 {
        log::error!("stream ended {} bits into a code",pending);
        return Err(Error::TruncatedStream { bits_consumed: total_bits, total_bits });
    }
    log::debug!("decoded {} words from {} bits",ans.len(),total_bits);
    Ok(ans)
}

/// Rebuild text from decoded words.  Original spacing is not recoverable,
/// words are always separated by one space.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
fn setup(text: &str) -> (Vec<String>,BitVec,HuffTree) {
    let freq = crate::freq::analyze(text).expect("analyze failed");
    let tree = crate::tree::build_tree(&freq).expect("build failed");
    let codes = crate::codes::generate_codes(&tree);
    let words = crate::freq::words(text);
    let bits = crate::encode::encode(&words,&codes).expect("encode failed");
    (words,bits,tree)
}

#[test]
fn known_example() {
    let text = "the cat sat on the mat the cat ran";
    let (words,bits,tree) = setup(text);
    let decoded = decode(&bits,&tree).expect("decode failed");
    assert_eq!(decoded.len(),9);
    assert_eq!(decoded,words);
    assert_eq!(join_words(&decoded),text);
}

#[test]
fn single_symbol() {
    let (_,bits,tree) = setup("a a a");
    let decoded = decode(&bits,&tree).expect("decode failed");
    assert_eq!(join_words(&decoded),"a a a");
    let bad = crate::bits::parse_bit_string("010").unwrap();
    assert_eq!(decode(&bad,&tree),Err(Error::MalformedTree { bit_index: 1 }));
}

#[test]
fn whitespace_is_normalized() {
    let text = "  one\ttwo\n\nthree   one  ";
    let (_,bits,tree) = setup(text);
    let decoded = decode(&bits,&tree).expect("decode failed");
    assert_eq!(join_words(&decoded),"one two three one");
}

#[test]
fn truncated_stream() {
    let (_,mut bits,tree) = setup("the cat sat on the mat the cat ran");
    let n = bits.len();
    bits.truncate(n-1);
    assert_eq!(decode(&bits,&tree),Err(Error::TruncatedStream { bits_consumed: 21, total_bits: 21 }));
}

#[test]
fn empty_stream() {
    let (_,_,tree) = setup("x y");
    assert_eq!(decode(&BitVec::new(),&tree),Ok(Vec::new()));
}

#[test]
fn progress_reports() {
    let (_,bits,tree) = setup("the cat sat on the mat the cat ran");
    let mut seen: Vec<Progress> = Vec::new();
    let decoded = decode_with_progress(&bits,&tree,|p| seen.push(*p)).expect("decode failed");
    assert_eq!(seen.len(),decoded.len());
    for (i,p) in seen.iter().enumerate() {
        assert_eq!(p.symbols_decoded,i+1);
        assert_eq!(p.total_bits,22);
        if i > 0 {
            assert!(p.bits_consumed > seen[i-1].bits_consumed);
        }
    }
    // codes are 2,2,3,3,2,3,2,2,3 bits long
    let consumed: Vec<usize> = seen.iter().map(|p| p.bits_consumed).collect();
    assert_eq!(consumed,vec![2,4,7,10,12,15,17,19,22]);
    assert_eq!(seen.last().map(|p| p.percent()),Some(100.0));
}
