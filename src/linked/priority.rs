//! Rank-ordered queues over a sorted chain.
//!
//! Enqueue walks the chain from the back past every entry the new one
//! outranks and splices in behind the first that it does not, so equal
//! priorities keep their arrival order. Dequeue always takes the front.
//! The chain stays fully sorted at all times; the cost model is O(n)
//! enqueue, O(1) dequeue, the reverse of a heap, which suits workloads
//! that drain far more often than they feed.

use crate::linked::{LinkId, NIL};

#[derive(Debug, Clone)]
struct Entry<E> {
    element: E,
    priority: i32,
    prev: LinkId,
    next: LinkId,
}

/// The shared chain; `max_first` decides which direction "outranks".
#[derive(Debug, Clone)]
struct RankedQueue<E> {
    entries: Vec<Entry<E>>,
    head: LinkId,
    tail: LinkId,
    max_first: bool,
}

impl<E> RankedQueue<E> {
    fn new(max_first: bool) -> Self {
        RankedQueue {
            entries: Vec::new(),
            head: NIL,
            tail: NIL,
            max_first,
        }
    }

    #[inline(always)]
    fn outranks(&self, a: i32, b: i32) -> bool {
        if self.max_first { a > b } else { a < b }
    }

    fn enqueue(&mut self, element: E, priority: i32) {
        let mut after = self.tail;
        while after != NIL && self.outranks(priority, self.entries[after as usize].priority) {
            after = self.entries[after as usize].prev;
        }
        let id = self.entries.len() as LinkId;
        if after == NIL {
            // Outranks the entire chain: new front.
            self.entries.push(Entry {
                element,
                priority,
                prev: NIL,
                next: self.head,
            });
            if self.head != NIL {
                self.entries[self.head as usize].prev = id;
            } else {
                self.tail = id;
            }
            self.head = id;
        } else {
            let next = self.entries[after as usize].next;
            self.entries.push(Entry {
                element,
                priority,
                prev: after,
                next,
            });
            self.entries[after as usize].next = id;
            if next != NIL {
                self.entries[next as usize].prev = id;
            } else {
                self.tail = id;
            }
        }
    }

    fn dequeue(&mut self) -> Option<E> {
        if self.head == NIL {
            return None;
        }
        let id = self.head;
        let next = self.entries[id as usize].next;
        self.head = next;
        if next != NIL {
            self.entries[next as usize].prev = NIL;
        } else {
            self.tail = NIL;
        }
        Some(self.release(id))
    }

    fn peek(&self) -> Option<&E> {
        if self.head == NIL {
            None
        } else {
            Some(&self.entries[self.head as usize].element)
        }
    }

    // Same dense-arena compaction as List::release.
    fn release(&mut self, id: LinkId) -> E {
        let removed = self.entries.swap_remove(id as usize);
        if (id as usize) < self.entries.len() {
            let prev = self.entries[id as usize].prev;
            let next = self.entries[id as usize].next;
            if prev != NIL {
                self.entries[prev as usize].next = id;
            } else {
                self.head = id;
            }
            if next != NIL {
                self.entries[next as usize].prev = id;
            } else {
                self.tail = id;
            }
        }
        removed.element
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Dequeues the highest priority first; ties leave in arrival order.
#[derive(Debug, Clone)]
pub struct HighPriorityQueue<E> {
    inner: RankedQueue<E>,
}

impl<E> Default for HighPriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HighPriorityQueue<E> {
    pub fn new() -> Self {
        HighPriorityQueue {
            inner: RankedQueue::new(true),
        }
    }

    pub fn enqueue(&mut self, element: E, priority: i32) {
        self.inner.enqueue(element, priority);
    }

    /// Enqueues at priority 0.
    pub fn enqueue_default(&mut self, element: E) {
        self.inner.enqueue(element, 0);
    }

    pub fn dequeue(&mut self) -> Option<E> {
        self.inner.dequeue()
    }

    pub fn peek(&self) -> Option<&E> {
        self.inner.peek()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }
}

/// Dequeues the lowest priority first; ties leave in arrival order.
#[derive(Debug, Clone)]
pub struct LowPriorityQueue<E> {
    inner: RankedQueue<E>,
}

impl<E> Default for LowPriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> LowPriorityQueue<E> {
    pub fn new() -> Self {
        LowPriorityQueue {
            inner: RankedQueue::new(false),
        }
    }

    pub fn enqueue(&mut self, element: E, priority: i32) {
        self.inner.enqueue(element, priority);
    }

    /// Enqueues at priority 0.
    pub fn enqueue_default(&mut self, element: E) {
        self.inner.enqueue(element, 0);
    }

    pub fn dequeue(&mut self) -> Option<E> {
        self.inner.dequeue()
    }

    pub fn peek(&self) -> Option<&E> {
        self.inner.peek()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_queue_serves_the_largest_priority() {
        let mut queue = HighPriorityQueue::new();
        queue.enqueue("low", 1);
        queue.enqueue("high", 9);
        queue.enqueue("mid", 5);
        assert_eq!(queue.peek(), Some(&"high"));
        assert_eq!(queue.dequeue(), Some("high"));
        assert_eq!(queue.dequeue(), Some("mid"));
        assert_eq!(queue.dequeue(), Some("low"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn low_queue_serves_the_smallest_priority() {
        let mut queue = LowPriorityQueue::new();
        queue.enqueue("c", 30);
        queue.enqueue("a", 10);
        queue.enqueue("b", 20);
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
    }

    #[test]
    fn equal_priorities_keep_arrival_order() {
        let mut queue = HighPriorityQueue::new();
        queue.enqueue("first", 5);
        queue.enqueue("second", 5);
        queue.enqueue("urgent", 7);
        queue.enqueue("third", 5);
        assert_eq!(queue.dequeue(), Some("urgent"));
        assert_eq!(queue.dequeue(), Some("first"));
        assert_eq!(queue.dequeue(), Some("second"));
        assert_eq!(queue.dequeue(), Some("third"));
    }

    #[test]
    fn default_priority_is_zero() {
        let mut queue = HighPriorityQueue::new();
        queue.enqueue_default("plain");
        queue.enqueue("ahead", 1);
        queue.enqueue("behind", -1);
        assert_eq!(queue.dequeue(), Some("ahead"));
        assert_eq!(queue.dequeue(), Some("plain"));
        assert_eq!(queue.dequeue(), Some("behind"));
    }

    #[test]
    fn negative_priorities_order_correctly() {
        let mut queue = LowPriorityQueue::new();
        queue.enqueue(1, -5);
        queue.enqueue(2, 0);
        queue.enqueue(3, -20);
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
    }

    #[test]
    fn drain_and_refill() {
        let mut queue = HighPriorityQueue::new();
        for round in 0..3 {
            for priority in 0..10 {
                queue.enqueue(priority, priority);
            }
            let mut drained = Vec::new();
            while let Some(value) = queue.dequeue() {
                drained.push(value);
            }
            assert_eq!(drained, (0..10).rev().collect::<Vec<_>>(), "round {round}");
            assert!(queue.is_empty());
        }
    }
}
