//! Indexed binary min-heap with decrease-key.
//!
//! Keys Prim's relaxation: each of `0..n` items appears at most once,
//! and lowering an item's key restores heap order in O(log n) instead
//! of re-sorting a queue on every update.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6.5

/// A min-heap over items `0..n` keyed by `f64`, supporting decrease-key.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Heap array of item indices.
    heap: Vec<usize>,
    /// Item index → position in `heap`, `None` when absent.
    pos: Vec<Option<usize>>,
    /// Item index → current key (meaningful only while present).
    key: Vec<f64>,
}

impl IndexedMinHeap {
    /// Creates an empty heap for items `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            heap: Vec::with_capacity(n),
            pos: vec![None; n],
            key: vec![f64::INFINITY; n],
        }
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of items currently in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether `item` is currently in the heap.
    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.pos[item].is_some()
    }

    /// Inserts an absent item with the given key.
    pub fn insert(&mut self, item: usize, key: f64) {
        debug_assert!(self.pos[item].is_none());
        self.key[item] = key;
        let at = self.heap.len();
        self.heap.push(item);
        self.pos[item] = Some(at);
        self.sift_up(at);
    }

    /// Lowers the key of a present item.
    ///
    /// Returns `false` (and changes nothing) if `new_key` is not
    /// strictly smaller than the current key.
    pub fn decrease_key(&mut self, item: usize, new_key: f64) -> bool {
        let at = match self.pos[item] {
            Some(at) => at,
            None => return false,
        };
        if new_key >= self.key[item] {
            return false;
        }
        self.key[item] = new_key;
        self.sift_up(at);
        true
    }

    /// Removes and returns the item with the smallest key.
    pub fn pop_min(&mut self) -> Option<(usize, f64)> {
        let min = *self.heap.first()?;
        let key = self.key[min];

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        self.pos[self.heap[0]] = Some(0);
        self.heap.pop();
        self.pos[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((min, key))
    }

    fn sift_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if self.key[self.heap[at]] >= self.key[self.heap[parent]] {
                break;
            }
            self.swap(at, parent);
            at = parent;
        }
    }

    fn sift_down(&mut self, mut at: usize) {
        loop {
            let left = 2 * at + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < self.heap.len() && self.key[self.heap[right]] < self.key[self.heap[left]] {
                smallest = right;
            }
            if self.key[self.heap[smallest]] >= self.key[self.heap[at]] {
                break;
            }
            self.swap(at, smallest);
            at = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = Some(a);
        self.pos[self.heap[b]] = Some(b);
    }
}
