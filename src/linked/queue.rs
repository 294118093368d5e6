//! End-restricted adapters over [`List`].
//!
//! Each adapter owns a private list and exposes only the motions its
//! discipline allows. No link bookkeeping happens here.

use crate::linked::List;

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<E> {
    list: List<E>,
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Queue<E> {
    pub fn new() -> Self {
        Queue { list: List::new() }
    }

    /// Adds `element` at the back.
    pub fn enqueue(&mut self, element: E) {
        self.list.push_back(element);
    }

    /// Takes the oldest element, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<E> {
        self.list.pop_front()
    }

    /// The element `dequeue` would return, without taking it.
    pub fn peek(&self) -> Option<&E> {
        self.list.first()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Last in, first out. Both motions work the front of the chain.
#[derive(Debug, Clone)]
pub struct Stack<E> {
    list: List<E>,
}

impl<E> Default for Stack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Stack<E> {
    pub fn new() -> Self {
        Stack { list: List::new() }
    }

    pub fn push(&mut self, element: E) {
        self.list.push_front(element);
    }

    pub fn pop(&mut self) -> Option<E> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&E> {
        self.list.first()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// A queue whose middle is reachable: ordinary FIFO motion plus
/// targeted removal of enqueued elements that turned out not to be
/// needed after all.
#[derive(Debug, Clone)]
pub struct PullQueue<E> {
    list: List<E>,
}

impl<E> Default for PullQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PullQueue<E> {
    pub fn new() -> Self {
        PullQueue { list: List::new() }
    }

    pub fn enqueue(&mut self, element: E) {
        self.list.push_back(element);
    }

    pub fn dequeue(&mut self) -> Option<E> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&E> {
        self.list.first()
    }

    /// Removes the element at `index` counted from the front, leaving
    /// the rest in arrival order.
    pub fn pull_at(&mut self, index: usize) -> Option<E> {
        self.list.remove_at(index)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<E: PartialEq> PullQueue<E> {
    /// Removes the first enqueued element equal to `element`.
    pub fn pull(&mut self, element: &E) -> bool {
        self.list.remove(element)
    }
}
