//! Encoding words as a bit stream

use bit_vec::BitVec;
use crate::codes::CodeTable;
use crate::Error;

/// Concatenate the code of every word, in order.
/// Fails with `Error::UnknownSymbol` on the first word missing from the table.
pub fn encode<S: AsRef<str>>(words: &[S],codes: &CodeTable) -> Result<BitVec,Error> {
    let mut ans = BitVec::new();
    for word in words {
        match codes.get(word.as_ref()) {
            Some(code) => ans.extend(code.iter()),
            None => return Err(Error::UnknownSymbol(word.as_ref().to_string()))
        }
    }
    log::debug!("{} words encoded into {} bits",words.len(),ans.len());
    Ok(ans)
}

#[cfg(test)]
fn setup(text: &str) -> (Vec<String>,CodeTable) {
    let freq = crate::freq::analyze(text).expect("analyze failed");
    let tree = crate::tree::build_tree(&freq).expect("build failed");
    (crate::freq::words(text),crate::codes::generate_codes(&tree))
}

#[test]
fn known_example() {
    let (words,codes) = setup("the cat sat on the mat the cat ran");
    let bits = encode(&words,&codes).expect("encode failed");
    assert_eq!(bits.len(),22);
    assert_eq!(crate::bits::to_bit_string(&bits),"1100101011110101100100");
}

#[test]
fn single_symbol() {
    let (words,codes) = setup("a a a");
    let bits = encode(&words,&codes).expect("encode failed");
    assert_eq!(crate::bits::to_bit_string(&bits),"000");
}

#[test]
fn unknown_word() {
    let (_,codes) = setup("a b a");
    assert_eq!(encode(&["a","c","b"],&codes),Err(Error::UnknownSymbol("c".to_string())));
}

#[test]
fn no_words() {
    let (_,codes) = setup("a b");
    let empty: [&str;0] = [];
    assert_eq!(encode(&empty,&codes).map(|b| b.len()),Ok(0));
}
