//! Array-backed binary heaps.
//!
//! The classic layout: parent of `i` at `(i - 1) / 2`, children at
//! `2i + 1` and `2i + 2`, all in one `Vec` with no link fields at all.
//! `push` sifts the new element up, `pop` swaps the last element into
//! the root and sifts it down, `from_vec` heapifies bottom-up from the
//! last parent in O(n). Ordering comes from the same [`Relatable`]
//! capability the trees use.

use crate::relate::Relatable;

#[derive(Debug, Clone)]
struct Heap<E> {
    items: Vec<E>,
    min_first: bool,
}

impl<E: Relatable> Heap<E> {
    fn from_vec(items: Vec<E>, min_first: bool) -> Self {
        let mut heap = Heap { items, min_first };
        if heap.items.len() > 1 {
            for index in (0..=(heap.items.len() - 2) / 2).rev() {
                heap.sift_down(index);
            }
        }
        heap
    }

    /// Whether `a` belongs closer to the root than `b`.
    #[inline(always)]
    fn ahead_of(&self, a: &E, b: &E) -> bool {
        if self.min_first {
            a.is_less_than(b)
        } else {
            a.is_greater_than(b)
        }
    }

    fn push(&mut self, element: E) {
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
    }

    fn pop(&mut self) -> Option<E> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.ahead_of(&self.items[index], &self.items[parent]) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;
            if left < self.items.len() && self.ahead_of(&self.items[left], &self.items[best]) {
                best = left;
            }
            if right < self.items.len() && self.ahead_of(&self.items[right], &self.items[best]) {
                best = right;
            }
            if best == index {
                return;
            }
            self.items.swap(index, best);
            index = best;
        }
    }
}

/// A heap that serves its smallest element first.
#[derive(Debug, Clone)]
pub struct MinHeap<E> {
    heap: Heap<E>,
}

impl<E: Relatable> Default for MinHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Relatable> MinHeap<E> {
    pub fn new() -> Self {
        MinHeap {
            heap: Heap {
                items: Vec::new(),
                min_first: true,
            },
        }
    }

    /// Builds the heap in O(n), cheaper than pushing one at a time.
    pub fn from_vec(items: Vec<E>) -> Self {
        MinHeap {
            heap: Heap::from_vec(items, true),
        }
    }

    pub fn push(&mut self, element: E) {
        self.heap.push(element);
    }

    /// Takes the smallest element, or `None` when empty.
    pub fn pop(&mut self) -> Option<E> {
        self.heap.pop()
    }

    /// The smallest element, without taking it.
    pub fn peek(&self) -> Option<&E> {
        self.heap.items.first()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.items.is_empty()
    }

    /// The backing storage, in heap order rather than sorted order.
    pub fn into_vec(self) -> Vec<E> {
        self.heap.items
    }
}

/// A heap that serves its largest element first.
#[derive(Debug, Clone)]
pub struct MaxHeap<E> {
    heap: Heap<E>,
}

impl<E: Relatable> Default for MaxHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Relatable> MaxHeap<E> {
    pub fn new() -> Self {
        MaxHeap {
            heap: Heap {
                items: Vec::new(),
                min_first: false,
            },
        }
    }

    /// Builds the heap in O(n), cheaper than pushing one at a time.
    pub fn from_vec(items: Vec<E>) -> Self {
        MaxHeap {
            heap: Heap::from_vec(items, false),
        }
    }

    pub fn push(&mut self, element: E) {
        self.heap.push(element);
    }

    /// Takes the largest element, or `None` when empty.
    pub fn pop(&mut self) -> Option<E> {
        self.heap.pop()
    }

    /// The largest element, without taking it.
    pub fn peek(&self) -> Option<&E> {
        self.heap.items.first()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.items.is_empty()
    }

    /// The backing storage, in heap order rather than sorted order.
    pub fn into_vec(self) -> Vec<E> {
        self.heap.items
    }
}
