//! Min-priority queue for Huffman node merging
use std::cmp::{Ordering,Reverse};
use std::collections::BinaryHeap;
use num_traits::PrimInt;

/// Item wrapper whose order is exactly (weight, seq), the payload never takes part.
/// `seq` is unique per queue, so this is a total order and equal weights
/// always come out in insertion order.
struct Entry<W: PrimInt,T> {
    weight: W,
    seq: u64,
    item: T
}

impl<W: PrimInt,T> Entry<W,T> {
    fn key(&self) -> (W,u64) {
        (self.weight,self.seq)
    }
}

impl<W: PrimInt,T> PartialEq for Entry<W,T> {
    fn eq(&self,other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<W: PrimInt,T> Eq for Entry<W,T> {}

impl<W: PrimInt,T> PartialOrd for Entry<W,T> {
    fn partial_cmp(&self,other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PrimInt,T> Ord for Entry<W,T> {
    fn cmp(&self,other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

pub struct MinQueue<W: PrimInt,T> {
    heap: BinaryHeap<Reverse<Entry<W,T>>>,
    next_seq: u64
}

impl<W: PrimInt,T> MinQueue<W,T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0
        }
    }
    /// insert an item, returns the sequence number it was given
    pub fn push(&mut self,weight: W,item: T) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { weight, seq, item }));
        seq
    }
    /// remove the item with the smallest (weight, seq)
    pub fn pop(&mut self) -> Option<(W,T)> {
        self.heap.pop().map(|Reverse(e)| (e.weight,e.item))
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<W: PrimInt,T> Default for MinQueue<W,T> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn weight_then_insertion_order() {
    let mut q: MinQueue<u32,&str> = MinQueue::new();
    q.push(3,"c");
    q.push(1,"a1");
    q.push(2,"b");
    q.push(1,"a2");
    q.push(1,"a3");
    assert_eq!(q.len(),5);
    let order: Vec<&str> = std::iter::from_fn(|| q.pop().map(|(_,s)| s)).collect();
    assert_eq!(order,vec!["a1","a2","a3","b","c"]);
    assert!(q.pop().is_none());
}

#[test]
fn sequence_numbers() {
    let mut q: MinQueue<usize,()> = MinQueue::new();
    assert_eq!(q.push(5,()),0);
    assert_eq!(q.push(5,()),1);
    q.pop();
    assert_eq!(q.push(1,()),2);
}
