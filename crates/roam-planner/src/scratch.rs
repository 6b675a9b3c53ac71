//! Reusable per-search buffers.
//!
//! The planning graph is immutable; everything a search mutates lives
//! here. [`SearchScratch::reset`] clears the buffers without releasing
//! their capacity, so repeated searches on one planner do not allocate
//! once the buffers have grown to their working size.

/// Fixed-capacity bitset over node slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VisitSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Mark `index`; returns `true` if it was not already marked.
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        debug_assert!(index < self.len, "index {index} >= {}", self.len);
        let (word, bit) = (index / 64, 1u64 << (index % 64));
        let fresh = self.words[word] & bit == 0;
        self.words[word] |= bit;
        fresh
    }

    pub(crate) fn clear(&mut self) {
        self.words.fill(0);
    }

    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Mutable state of one two-tier search.
#[derive(Clone, Debug)]
pub(crate) struct SearchScratch {
    /// Predecessor link per node slot.
    pub(crate) predecessors: Vec<Option<usize>>,
    /// Nodes discovered so far.
    pub(crate) seen: VisitSet,
    /// Current frontier inside the primary area.
    pub(crate) open: Vec<usize>,
    /// Nodes discovered outside the primary area, parked until the
    /// primary area is exhausted.
    pub(crate) secondary: Vec<usize>,
    /// Next frontier under construction.
    pub(crate) next: Vec<usize>,
}

impl SearchScratch {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            predecessors: vec![None; node_count],
            seen: VisitSet::new(node_count),
            open: Vec::new(),
            secondary: Vec::new(),
            next: Vec::new(),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.predecessors.fill(None);
        self.seen.clear();
        self.open.clear();
        self.secondary.clear();
        self.next.clear();
    }
}
