use tracing::warn;

use crate::error::{Error, Result};

/// A heap entry: one vertex and the cost currently associated with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexCost {
    pub vertex: usize,
    pub cost: f64,
}

/// Binary min-heap over [`VertexCost`] entries with an auxiliary position
/// index, giving O(log n) decrease-key and O(1) membership tests.
///
/// `positions[v]` is the slot currently holding vertex `v`, kept consistent
/// through every swap. Extraction does not remove entries physically: the
/// root is swapped to the last live slot and `len` shrinks past it, so a
/// vertex is active exactly when `positions[v] < len`.
#[derive(Debug)]
pub struct MinHeap {
    entries: Vec<VertexCost>,
    positions: Vec<usize>,
    len: usize,
}

impl MinHeap {
    /// Arrange one entry per vertex (ids `0..n`) into heap order with a
    /// bottom-up pass of sift-downs.
    pub fn build(entries: Vec<VertexCost>) -> Self {
        let len = entries.len();
        let mut positions = vec![0; len];
        for (slot, entry) in entries.iter().enumerate() {
            positions[entry.vertex] = slot;
        }
        let mut heap = Self {
            entries,
            positions,
            len,
        };
        for slot in (0..len / 2).rev() {
            heap.sift_down(slot);
        }
        heap
    }

    /// Remove and return the minimum-cost entry.
    pub fn extract_min(&mut self) -> Result<VertexCost> {
        if self.len == 0 {
            return Err(Error::HeapUnderflow);
        }

        let root = self.entries[0];
        let last = self.len - 1;
        self.positions[root.vertex] = last;
        self.positions[self.entries[last].vertex] = 0;
        self.entries.swap(0, last);
        self.len -= 1;
        self.sift_down(0);

        Ok(root)
    }

    /// Lower `vertex`'s cost to `cost` and restore heap order upwards.
    ///
    /// A `cost` above the current value violates the caller's precondition;
    /// the attempt is reported and the heap left untouched.
    pub fn decrease_key(&mut self, vertex: usize, cost: f64) {
        let slot = self.positions[vertex];
        debug_assert!(slot < self.len, "decrease_key on an extracted vertex");
        let current = self.entries[slot].cost;
        if cost > current {
            warn!(vertex, cost, current, "decrease_key ignored: new cost exceeds the current cost");
            return;
        }

        self.entries[slot].cost = cost;
        self.sift_up(slot);
    }

    /// Whether `vertex` is still live, i.e. not yet extracted.
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions[vertex] < self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.positions[self.entries[a].vertex] = b;
        self.positions[self.entries[b].vertex] = a;
        self.entries.swap(a, b);
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.len && self.entries[left].cost < self.entries[smallest].cost {
                smallest = left;
            }
            if right < self.len && self.entries[right].cost < self.entries[smallest].cost {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].cost <= self.entries[slot].cost {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }
}

#[cfg(test)]
fn heap_over(costs: &[f64]) -> MinHeap {
    MinHeap::build(
        costs
            .iter()
            .enumerate()
            .map(|(vertex, cost)| VertexCost {
                vertex,
                cost: *cost,
            })
            .collect(),
    )
}

#[cfg(test)]
#[test]
fn extraction_yields_costs_in_nondecreasing_order() {
    let mut heap = heap_over(&[5., 3., 8., 1., 9., 2.]);

    let mut extracted = Vec::new();
    while !heap.is_empty() {
        extracted.push(heap.extract_min().unwrap());
    }
    assert_eq!(
        extracted.iter().map(|entry| entry.cost).collect::<Vec<_>>(),
        vec![1., 2., 3., 5., 8., 9.]
    );
    assert_eq!(
        extracted
            .iter()
            .map(|entry| entry.vertex)
            .collect::<Vec<_>>(),
        vec![3, 5, 1, 0, 2, 4]
    );
}

#[cfg(test)]
#[test]
fn decrease_key_reorders_the_heap() {
    let mut heap = heap_over(&[f64::INFINITY; 5]);

    heap.decrease_key(4, 10.);
    heap.decrease_key(2, 3.);
    heap.decrease_key(4, 1.);

    assert_eq!(
        heap.extract_min().unwrap(),
        VertexCost {
            vertex: 4,
            cost: 1.
        }
    );
    assert_eq!(
        heap.extract_min().unwrap(),
        VertexCost {
            vertex: 2,
            cost: 3.
        }
    );
}

#[cfg(test)]
#[test]
fn contains_tracks_the_live_prefix() {
    let mut heap = heap_over(&[4., 2., 7.]);
    assert!((0..3).all(|vertex| heap.contains(vertex)));

    let first = heap.extract_min().unwrap().vertex;
    assert!(!heap.contains(first));
    assert_eq!((0..3).filter(|vertex| heap.contains(*vertex)).count(), 2);

    heap.extract_min().unwrap();
    heap.extract_min().unwrap();
    assert!(heap.is_empty());
    assert!((0..3).all(|vertex| !heap.contains(vertex)));
}

#[cfg(test)]
#[test]
fn extracting_from_an_empty_heap_underflows() {
    let mut heap = heap_over(&[1.]);
    heap.extract_min().unwrap();
    assert!(matches!(heap.extract_min(), Err(Error::HeapUnderflow)));
}

#[cfg(test)]
#[test]
fn increasing_a_key_is_rejected_without_corrupting_the_heap() {
    let mut heap = heap_over(&[4., 2., 7.]);
    heap.decrease_key(1, 100.);

    assert_eq!(heap.len(), 3);
    let mut extracted = Vec::new();
    while !heap.is_empty() {
        extracted.push(heap.extract_min().unwrap().vertex);
    }
    assert_eq!(extracted, vec![1, 0, 2]);
}
