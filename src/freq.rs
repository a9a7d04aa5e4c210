//! Word frequency analysis
//!
//! Words are whatever `str::split_whitespace` yields, so runs of spaces, tabs and
//! newlines all act as a single separator.

use std::collections::BTreeMap;
use crate::Error;

/// Occurrence count of each distinct word.
/// Iteration is in word order, which is what keeps tree construction reproducible.
#[derive(Clone,Debug,PartialEq,Default)]
pub struct FrequencyTable {
    counts: BTreeMap<String,usize>
}

impl FrequencyTable {
    /// count of `word`, or None if the word never occurred
    pub fn get(&self,word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }
    /// number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// total number of words counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
    pub fn iter(&self) -> impl Iterator<Item=(&str,usize)> {
        self.counts.iter().map(|(w,c)| (w.as_str(),*c))
    }
}

impl<S: Into<String>> FromIterator<(S,usize)> for FrequencyTable {
    /// Build a table directly from (word,count) pairs, zero counts are dropped
    /// and repeated words are summed.
    fn from_iter<I: IntoIterator<Item=(S,usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (word,count) in iter {
            if count > 0 {
                *counts.entry(word.into()).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

/// Split text into its words, in order.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| w.to_string()).collect()
}

/// Count the words in `text`.
/// Fails with `Error::EmptyInput` if there are no words after trimming.
pub fn analyze(text: &str) -> Result<FrequencyTable,Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut counts: BTreeMap<String,usize> = BTreeMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    log::debug!("{} distinct words in {} bytes of text",counts.len(),text.len());
    Ok(FrequencyTable { counts })
}

#[test]
fn counts_words() {
    let freq = analyze("the cat sat on the mat the cat ran").expect("analyze failed");
    assert_eq!(freq.len(),6);
    assert_eq!(freq.total(),9);
    assert_eq!(freq.get("the"),Some(3));
    assert_eq!(freq.get("cat"),Some(2));
    for w in ["sat","on","mat","ran"] {
        assert_eq!(freq.get(w),Some(1));
    }
    assert_eq!(freq.get("dog"),None);
}

#[test]
fn mixed_whitespace() {
    let freq = analyze("  a\tb\n\na   b  c\r\n").expect("analyze failed");
    let pairs: Vec<(&str,usize)> = freq.iter().collect();
    assert_eq!(pairs,vec![("a",2),("b",2),("c",1)]);
    assert_eq!(words("  a\tb\n\na   b  c\r\n"),vec!["a","b","a","b","c"]);
}

#[test]
fn empty_input() {
    assert_eq!(analyze(""),Err(Error::EmptyInput));
    assert_eq!(analyze("   "),Err(Error::EmptyInput));
    assert_eq!(analyze("\n\t \r\n"),Err(Error::EmptyInput));
}

#[test]
fn from_pairs() {
    let freq: FrequencyTable = [("x",2),("y",0),("x",1)].into_iter().collect();
    assert_eq!(freq.len(),1);
    assert_eq!(freq.get("x"),Some(3));
}
