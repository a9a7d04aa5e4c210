//! Code table generation
//!
//! Each leaf's code is its path from the root, 0 for a left branch and 1 for a right branch.

use std::collections::BTreeMap;
use bit_vec::BitVec;
use crate::tree::{HuffTree,Node};
use crate::tools::bits::to_bit_string;

/// Map from word to its code.  Codes are prefix-free because they are leaf paths.
#[derive(Clone,Debug,PartialEq,Default)]
pub struct CodeTable {
    codes: BTreeMap<String,BitVec>
}

impl CodeTable {
    pub fn get(&self,word: &str) -> Option<&BitVec> {
        self.codes.get(word)
    }
    pub fn len(&self) -> usize {
        self.codes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
    /// (word,code) pairs in word order
    pub fn iter(&self) -> impl Iterator<Item=(&str,&BitVec)> {
        self.codes.iter().map(|(w,c)| (w.as_str(),c))
    }
    /// true if no code is a prefix of another
    pub fn is_prefix_free(&self) -> bool {
        let all: Vec<&BitVec> = self.codes.values().collect();
        for (i,a) in all.iter().enumerate() {
            for (j,b) in all.iter().enumerate() {
                if i!=j && a.len() <= b.len() && a.iter().zip(b.iter()).all(|(x,y)| x==y) {
                    return false;
                }
            }
        }
        true
    }
}

impl std::fmt::Display for CodeTable {
    /// one `word<TAB>code` line per entry
    fn fmt(&self,f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (word,code) in self.iter() {
            writeln!(f,"{}\t{}",word,to_bit_string(code))?;
        }
        Ok(())
    }
}

/// Walk the tree and record the path to every leaf.
/// A tree that is a single leaf gets the code `0`.
pub fn generate_codes(tree: &HuffTree) -> CodeTable {
    let mut codes = BTreeMap::new();
    match tree.root() {
        Node::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(),BitVec::from_elem(1,false));
        },
        root => {
            let mut stack = vec![(root,BitVec::new())];
            while let Some((node,path)) = stack.pop() {
                match node {
                    Node::Leaf { symbol, .. } => {
                        log::trace!("{} -> {}",symbol,to_bit_string(&path));
                        codes.insert(symbol.clone(),path);
                    },
                    Node::Internal { left, right, .. } => {
                        let mut rpath = path.clone();
                        rpath.push(true);
                        let mut lpath = path;
                        lpath.push(false);
                        stack.push((right.as_ref(),rpath));
                        stack.push((left.as_ref(),lpath));
                    }
                }
            }
        }
    }
    log::debug!("{} codes generated",codes.len());
    CodeTable { codes }
}

#[cfg(test)]
fn code_strings(codes: &CodeTable) -> Vec<(String,String)> {
    codes.iter().map(|(w,c)| (w.to_string(),to_bit_string(c))).collect()
}

#[test]
fn known_example() {
    let freq = crate::freq::analyze("the cat sat on the mat the cat ran").expect("analyze failed");
    let tree = crate::tree::build_tree(&freq).expect("build failed");
    let codes = generate_codes(&tree);
    let expected: Vec<(String,String)> = [
        ("cat","00"),("mat","010"),("on","011"),("ran","100"),("sat","101"),("the","11")
    ].iter().map(|(w,c)| (w.to_string(),c.to_string())).collect();
    assert_eq!(code_strings(&codes),expected);
    assert!(codes.is_prefix_free());
    for (word,code) in codes.iter() {
        assert_eq!(tree.depth_of(word),Some(code.len()));
    }
}

#[test]
fn single_leaf_gets_one_bit() {
    let freq = crate::freq::analyze("a a a").expect("analyze failed");
    let codes = generate_codes(&crate::tree::build_tree(&freq).expect("build failed"));
    assert_eq!(code_strings(&codes),vec![("a".to_string(),"0".to_string())]);
    assert_eq!(codes.to_string(),"a\t0\n");
}

#[test]
fn prefix_free_and_complete() {
    let text = "it was the best of times it was the worst of times it was the age of wisdom \
        it was the age of foolishness it was the epoch of belief";
    let freq = crate::freq::analyze(text).expect("analyze failed");
    let codes = generate_codes(&crate::tree::build_tree(&freq).expect("build failed"));
    assert_eq!(codes.len(),freq.len());
    for (word,_) in freq.iter() {
        assert!(codes.get(word).map(|c| c.len() > 0).unwrap_or(false));
    }
    assert!(codes.is_prefix_free());
}

#[test]
fn prefix_check_detects_overlap() {
    let mut codes = BTreeMap::new();
    codes.insert("a".to_string(),crate::bits::parse_bit_string("01").unwrap());
    codes.insert("b".to_string(),crate::bits::parse_bit_string("011").unwrap());
    assert!(!CodeTable { codes }.is_prefix_free());
}

#[test]
fn repeatable() {
    let text = "x y z x y x w v u t x";
    let first = generate_codes(&crate::tree::build_tree(&crate::freq::analyze(text).unwrap()).unwrap());
    for _i in 0..5 {
        let again = generate_codes(&crate::tree::build_tree(&crate::freq::analyze(text).unwrap()).unwrap());
        assert_eq!(code_strings(&first),code_strings(&again));
    }
}
