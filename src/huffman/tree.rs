use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::code::{Code, CodeTable, MAX_CODE_LENGTH};
use crate::error::{Error, Result};

/// Symbol occurrence counts for one buffer
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every symbol in the buffer
    pub fn from_symbols(symbols: &[u8]) -> Self {
        let mut table = Self::new();
        for &symbol in symbols {
            table.counts[symbol as usize] += 1;
        }
        table
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Symbols that occur at least once, in ascending symbol order
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().enumerate().filter(|(_, &f)| f > 0).map(|(s, &f)| (s as u8, f))
    }

    /// Number of distinct symbols
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&f| f > 0).count()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Huffman tree node; every child has exactly one owner
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf { symbol: u8, freq: u64 },
    Internal { freq: u64, left: Box<HuffmanNode>, right: Box<HuffmanNode> },
}

impl HuffmanNode {
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } | HuffmanNode::Internal { freq, .. } => *freq,
        }
    }
}

/// Priority queue entry ordered by frequency, then by insertion order
struct HeapNode {
    freq: u64,
    seq: usize,
    node: HuffmanNode,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        (self.freq, self.seq) == (other.freq, other.seq)
    }
}
impl Eq for HeapNode {}
impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq.cmp(&other.freq).then(self.seq.cmp(&other.seq))
    }
}

/// Build the Huffman tree for a frequency table
///
/// Leaves enter the queue in ascending symbol order and each merged node gets
/// the next sequence number, so equal frequencies always pop oldest first and
/// the tree shape is reproducible. The first node popped becomes the left
/// child. Returns `None` when no symbol occurs.
pub fn build_tree(freqs: &FrequencyTable) -> Option<HuffmanNode> {
    let mut heap: BinaryHeap<Reverse<HeapNode>> = freqs
        .present()
        .enumerate()
        .map(|(seq, (symbol, freq))| {
            Reverse(HeapNode { freq, seq, node: HuffmanNode::Leaf { symbol, freq } })
        })
        .collect();
    let mut next_seq = heap.len();

    while heap.len() > 1 {
        let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
            break;
        };

        let freq = left.freq + right.freq;
        heap.push(Reverse(HeapNode {
            freq,
            seq: next_seq,
            node: HuffmanNode::Internal {
                freq,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        }));
        next_seq += 1;
    }

    heap.pop().map(|Reverse(root)| root.node)
}

/// Derive the code table by walking the tree with an explicit stack
///
/// Left edges append `0`, right edges append `1`. A tree that is a single
/// leaf gets the one-bit code `0`.
pub fn derive_codes(root: &HuffmanNode) -> Result<CodeTable> {
    let mut table = CodeTable::new();

    if let HuffmanNode::Leaf { symbol, .. } = root {
        table.insert(*symbol, Code::new(0, 1)?);
        return Ok(table);
    }

    let mut stack: Vec<(&HuffmanNode, Code)> = vec![(root, Code::EMPTY)];
    while let Some((node, path)) = stack.pop() {
        match node {
            HuffmanNode::Leaf { symbol, .. } => table.insert(*symbol, path),
            HuffmanNode::Internal { left, right, .. } => {
                let overflow =
                    || Error::Internal(format!("Huffman code exceeds {MAX_CODE_LENGTH} bits"));
                stack.push((right, path.push_bit(true).ok_or_else(overflow)?));
                stack.push((left, path.push_bit(false).ok_or_else(overflow)?));
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_for(symbols: &[u8]) -> CodeTable {
        let root = build_tree(&FrequencyTable::from_symbols(symbols)).unwrap();
        derive_codes(&root).unwrap()
    }

    #[test]
    fn test_frequency_table() {
        let freqs = FrequencyTable::from_symbols(&[3, 1, 3, 3, 200]);
        assert_eq!(freqs.count(3), 3);
        assert_eq!(freqs.count(0), 0);
        assert_eq!(freqs.distinct(), 3);
        assert_eq!(freqs.present().collect::<Vec<_>>(), vec![(1, 1), (3, 3), (200, 1)]);
    }

    #[test]
    fn test_empty_tree() {
        assert!(build_tree(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn test_single_leaf_gets_one_bit() {
        let table = codes_for(&[9, 9, 9, 9]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(9).unwrap().to_string(), "0");
    }

    #[test]
    fn test_root_frequency_is_total() {
        let root = build_tree(&FrequencyTable::from_symbols(b"abracadabra")).unwrap();
        assert_eq!(root.freq(), 11);
    }

    #[test]
    fn test_tie_break_is_insertion_order() {
        // Four symbols with equal frequency: (1,2) merge first, then (3,4),
        // then the two internal nodes in creation order.
        let table = codes_for(&[4, 3, 2, 1]);
        assert_eq!(table.get(1).unwrap().to_string(), "00");
        assert_eq!(table.get(2).unwrap().to_string(), "01");
        assert_eq!(table.get(3).unwrap().to_string(), "10");
        assert_eq!(table.get(4).unwrap().to_string(), "11");
    }

    #[test]
    fn test_skewed_frequencies() {
        let mut data = vec![0u8; 100];
        data.extend_from_slice(&[1, 2, 3]);
        let table = codes_for(&data);
        let common = table.get(0).unwrap().len();
        assert_eq!(common, 1);
        for s in 1..=3 {
            assert!(table.get(s).unwrap().len() >= common);
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_all_symbols_prefix_free() {
        let data: Vec<u8> = (0..=255u8).chain(0..50).collect();
        let table = codes_for(&data);
        assert_eq!(table.len(), 256);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_deterministic() {
        let data = b"mississippi river banks";
        assert_eq!(codes_for(data), codes_for(data));
    }
}
