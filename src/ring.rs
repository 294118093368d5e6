//! Fixed-capacity ring buffer.
//!
//! Two cursors chase each other around a `Vec` of `Option` slots,
//! wrapping modulo the capacity. Rejecting a push when full hands the
//! element back in `Err` instead of dropping or reallocating; the
//! capacity chosen at construction is final.

/// A bounded FIFO over preallocated slots.
#[derive(Debug, Clone)]
pub struct CircularBuffer<E> {
    slots: Vec<Option<E>>,
    read: usize,
    write: usize,
    len: usize,
}

impl<E> CircularBuffer<E> {
    /// Allocates every slot up front.
    ///
    /// # Panics
    ///
    /// Panics when `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "a ring buffer needs at least one slot");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        CircularBuffer {
            slots,
            read: 0,
            write: 0,
            len: 0,
        }
    }

    /// Appends `element`, or hands it back when the buffer is full.
    pub fn try_push(&mut self, element: E) -> Result<(), E> {
        if self.len == self.slots.len() {
            return Err(element);
        }
        self.slots[self.write] = Some(element);
        self.write = (self.write + 1) % self.slots.len();
        self.len += 1;
        Ok(())
    }

    /// Takes the oldest element, or `None` when empty.
    pub fn try_pop(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        let element = self.slots[self.read].take();
        debug_assert!(element.is_some(), "occupied slot held nothing");
        self.read = (self.read + 1) % self.slots.len();
        self.len -= 1;
        element
    }

    /// The element `try_pop` would return, without taking it.
    pub fn peek(&self) -> Option<&E> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.read].as_ref()
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
