//! Huffman tree construction
//!
//! Nodes are merged from a min-priority queue ordered by (weight, seq).
//! Leaves get sequence numbers in word order, and each new internal node takes
//! the next unused one, so identical tables always give identical trees.
//! The first node popped becomes the left child.

use crate::freq::FrequencyTable;
use crate::tools::min_queue::MinQueue;
use crate::Error;

/// Tree node, internal nodes own both children.
#[derive(Clone,Debug,PartialEq)]
pub enum Node {
    Leaf {
        symbol: String,
        weight: usize
    },
    Internal {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>
    }
}

impl Node {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self,Node::Leaf { .. })
    }
    /// left child for bit 0, right child for bit 1, None for a leaf
    pub fn child(&self,bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left })
        }
    }
    fn merge(left: Node,right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right)
        }
    }
}

/// Huffman tree for one compression session.
/// This is all the decoder needs, the code table is not required.
#[derive(Clone,Debug,PartialEq)]
pub struct HuffTree {
    root: Node
}

impl HuffTree {
    pub fn root(&self) -> &Node {
        &self.root
    }
    /// total weight, i.e., the number of words coded
    pub fn weight(&self) -> usize {
        self.root.weight()
    }
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }
    /// Depth of the leaf holding `symbol`, which is its code length.
    /// A lone root leaf counts as depth 1, since it is given a 1-bit code.
    pub fn depth_of(&self,symbol: &str) -> Option<usize> {
        let mut stack = vec![(&self.root,0)];
        while let Some((node,depth)) = stack.pop() {
            match node {
                Node::Leaf { symbol: s, .. } => {
                    if s == symbol {
                        return Some(depth.max(1));
                    }
                },
                Node::Internal { left, right, .. } => {
                    stack.push((right,depth+1));
                    stack.push((left,depth+1));
                }
            }
        }
        None
    }
    /// Sum over leaves of weight times code length.
    /// This is the encoded stream length in bits for the text the tree was built from.
    pub fn weighted_path_length(&self) -> usize {
        let mut ans = 0;
        let mut stack = vec![(&self.root,0)];
        while let Some((node,depth)) = stack.pop() {
            match node {
                Node::Leaf { weight, .. } => ans += weight * usize::max(depth,1),
                Node::Internal { left, right, .. } => {
                    stack.push((right,depth+1));
                    stack.push((left,depth+1));
                }
            }
        }
        ans
    }
}

/// Build the Huffman tree for a frequency table.
/// A table with one word gives a tree that is a single leaf.
pub fn build_tree(freq: &FrequencyTable) -> Result<HuffTree,Error> {
    if freq.is_empty() {
        return Err(Error::EmptyFrequencyTable);
    }
    let mut queue: MinQueue<usize,Node> = MinQueue::new();
    for (word,count) in freq.iter() {
        queue.push(count,Node::Leaf { symbol: word.to_string(), weight: count });
    }
    log::debug!("merging {} leaves",queue.len());
    while queue.len() > 1 {
        let (left,right) = match (queue.pop(),queue.pop()) {
            (Some((_,l)),Some((_,r))) => (l,r),
            _ => return Err(Error::EmptyFrequencyTable)
        };
        let parent = Node::merge(left,right);
        log::trace!("merge to weight {}",parent.weight());
        queue.push(parent.weight(),parent);
    }
    match queue.pop() {
        Some((_,root)) => {
            log::debug!("tree built with total weight {}",root.weight());
            Ok(HuffTree { root })
        },
        None => Err(Error::EmptyFrequencyTable)
    }
}

#[cfg(test)]
fn leaf(symbol: &str,weight: usize) -> Node {
    Node::Leaf { symbol: symbol.to_string(), weight }
}

/// Smallest possible weighted path length over all binary trees with these leaf weights.
/// Every full binary tree can be built by some sequence of pairwise merges, and its
/// weighted path length is the sum of the merged weights, so try every sequence.
#[cfg(test)]
fn brute_force_wpl(weights: &[usize]) -> usize {
    if weights.len() < 2 {
        return weights.iter().sum();
    }
    let mut best = usize::MAX;
    for i in 0..weights.len() {
        for j in i+1..weights.len() {
            let merged = weights[i] + weights[j];
            let mut rest: Vec<usize> = weights.iter().enumerate()
                .filter(|(k,_)| *k!=i && *k!=j)
                .map(|(_,w)| *w)
                .collect();
            rest.push(merged);
            let cost = match rest.len() {
                1 => merged,
                _ => merged + brute_force_wpl(&rest)
            };
            best = best.min(cost);
        }
    }
    best
}

#[test]
fn known_example() {
    let freq = crate::freq::analyze("the cat sat on the mat the cat ran").expect("analyze failed");
    let tree = build_tree(&freq).expect("build failed");
    assert_eq!(tree.weight(),9);
    assert_eq!(tree.leaf_count(),6);
    assert_eq!(tree.weighted_path_length(),22);
    assert_eq!(brute_force_wpl(&[3,2,1,1,1,1]),22);
    assert_eq!(tree.depth_of("the"),Some(2));
    assert_eq!(tree.depth_of("cat"),Some(2));
    assert_eq!(tree.depth_of("ran"),Some(3));
    assert_eq!(tree.depth_of("dog"),None);
    let expected = Node::merge(
        Node::merge(leaf("cat",2),Node::merge(leaf("mat",1),leaf("on",1))),
        Node::merge(Node::merge(leaf("ran",1),leaf("sat",1)),leaf("the",3))
    );
    assert_eq!(tree.root(),&expected);
}

#[test]
fn single_leaf() {
    let freq = crate::freq::analyze("a a a").expect("analyze failed");
    let tree = build_tree(&freq).expect("build failed");
    assert_eq!(tree.root(),&leaf("a",3));
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().child(false),None);
    assert_eq!(tree.depth_of("a"),Some(1));
    assert_eq!(tree.weighted_path_length(),3);
}

#[test]
fn empty_table() {
    let freq = FrequencyTable::default();
    assert_eq!(build_tree(&freq),Err(Error::EmptyFrequencyTable));
}

#[test]
fn minimal_weighted_path() {
    let cases: [&[usize];8] = [
        &[1,1],
        &[5,1,1],
        &[1,2,3,4],
        &[1,1,1,1,1],
        &[7,7,7,1,1,1],
        &[1,2,4,8,16,32],
        &[10,1,3,3,2,9],
        &[2,2,2,3,3,3]
    ];
    for weights in cases {
        let freq: FrequencyTable = weights.iter().enumerate()
            .map(|(i,w)| (format!("w{}",i),*w))
            .collect();
        let tree = build_tree(&freq).expect("build failed");
        assert_eq!(tree.weighted_path_length(),brute_force_wpl(weights),"weights {:?}",weights);
    }
}

#[test]
fn deterministic() {
    let text = "b a d c b a e f g h a a b";
    let t1 = build_tree(&crate::freq::analyze(text).unwrap()).unwrap();
    let t2 = build_tree(&crate::freq::analyze(text).unwrap()).unwrap();
    assert_eq!(t1,t2);
}
