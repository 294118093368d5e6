//! Doubly linked chains.
//!
//! Same arena discipline as the trees: every link lives in a `Vec`,
//! wired up with `u32` indices and a `u32::MAX` nil sentinel, and
//! removal swaps the last slot into the vacated one and repoints the
//! few indices that referenced it. The arena never fragments, `len` is
//! always the arena length, and there is no unsafe pointer chasing
//! anywhere.
//!
//! [`List`] is the core. [`Queue`], [`Stack`], and [`PullQueue`]
//! restrict which ends you may touch; the priority queues keep the
//! chain sorted by a rank instead.

mod priority;
mod queue;

pub use priority::{HighPriorityQueue, LowPriorityQueue};
pub use queue::{PullQueue, Queue, Stack};

pub(crate) type LinkId = u32;
pub(crate) const NIL: LinkId = u32::MAX;

#[derive(Debug, Clone)]
struct Link<E> {
    element: E,
    prev: LinkId,
    next: LinkId,
}

/// A doubly linked list addressable from both ends.
///
/// Positional operations (`get`, `insert`, `remove_at`) walk from
/// whichever end is closer, so they cost at most `len / 2` hops.
#[derive(Debug, Clone)]
pub struct List<E> {
    links: Vec<Link<E>>,
    head: LinkId,
    tail: LinkId,
}

impl<E> Default for List<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> List<E> {
    pub fn new() -> Self {
        List {
            links: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn push_front(&mut self, element: E) {
        let id = self.links.len() as LinkId;
        self.links.push(Link {
            element,
            prev: NIL,
            next: self.head,
        });
        if self.head != NIL {
            self.links[self.head as usize].prev = id;
        } else {
            self.tail = id;
        }
        self.head = id;
    }

    pub fn push_back(&mut self, element: E) {
        let id = self.links.len() as LinkId;
        self.links.push(Link {
            element,
            prev: self.tail,
            next: NIL,
        });
        if self.tail != NIL {
            self.links[self.tail as usize].next = id;
        } else {
            self.head = id;
        }
        self.tail = id;
    }

    pub fn pop_front(&mut self) -> Option<E> {
        if self.head == NIL {
            return None;
        }
        Some(self.unlink(self.head))
    }

    pub fn pop_back(&mut self) -> Option<E> {
        if self.tail == NIL {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    pub fn first(&self) -> Option<&E> {
        if self.head == NIL {
            None
        } else {
            Some(&self.links[self.head as usize].element)
        }
    }

    pub fn last(&self) -> Option<&E> {
        if self.tail == NIL {
            None
        } else {
            Some(&self.links[self.tail as usize].element)
        }
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        let id = self.seek(index)?;
        Some(&self.links[id as usize].element)
    }

    /// Inserts `element` so that it ends up at `index`. `index == len`
    /// appends.
    ///
    /// # Panics
    ///
    /// Panics when `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, element: E) {
        if index == 0 {
            self.push_front(element);
            return;
        }
        if index == self.len() {
            self.push_back(element);
            return;
        }
        let Some(at) = self.seek(index) else {
            panic!(
                "insertion index {index} out of range for a list of length {}",
                self.len()
            );
        };
        let id = self.links.len() as LinkId;
        let prev = self.links[at as usize].prev;
        self.links.push(Link {
            element,
            prev,
            next: at,
        });
        self.links[at as usize].prev = id;
        self.links[prev as usize].next = id;
    }

    pub fn remove_at(&mut self, index: usize) -> Option<E> {
        let id = self.seek(index)?;
        Some(self.unlink(id))
    }

    /// Visits the elements front to back.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            links: &self.links,
            cur: self.head,
        }
    }

    /// Walks to the link at `index` from the nearer end.
    fn seek(&self, index: usize) -> Option<LinkId> {
        if index >= self.len() {
            return None;
        }
        let mut id;
        if index <= self.len() / 2 {
            id = self.head;
            for _ in 0..index {
                id = self.links[id as usize].next;
            }
        } else {
            id = self.tail;
            for _ in 0..self.len() - 1 - index {
                id = self.links[id as usize].prev;
            }
        }
        Some(id)
    }

    /// Detaches `id` from the chain and frees its slot, returning the
    /// element.
    fn unlink(&mut self, id: LinkId) -> E {
        let prev = self.links[id as usize].prev;
        let next = self.links[id as usize].next;
        if prev != NIL {
            self.links[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.links[next as usize].prev = prev;
        } else {
            self.tail = prev;
        }
        self.release(id)
    }

    /// Frees an already-detached slot, keeping the arena dense. The
    /// former last link moves into the hole and its neighbors (or the
    /// head/tail anchors) are repointed at the new slot.
    fn release(&mut self, id: LinkId) -> E {
        let removed = self.links.swap_remove(id as usize);
        if (id as usize) < self.links.len() {
            let prev = self.links[id as usize].prev;
            let next = self.links[id as usize].next;
            if prev != NIL {
                self.links[prev as usize].next = id;
            } else {
                self.head = id;
            }
            if next != NIL {
                self.links[next as usize].prev = id;
            } else {
                self.tail = id;
            }
        }
        removed.element
    }
}

impl<E: PartialEq> List<E> {
    /// Removes the first element equal to `element`; `false` when no
    /// match exists.
    pub fn remove(&mut self, element: &E) -> bool {
        let mut id = self.head;
        while id != NIL {
            if self.links[id as usize].element == *element {
                self.unlink(id);
                return true;
            }
            id = self.links[id as usize].next;
        }
        false
    }

    pub fn contains(&self, element: &E) -> bool {
        self.iter().any(|e| e == element)
    }
}

pub struct Iter<'a, E> {
    links: &'a [Link<E>],
    cur: LinkId,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == NIL {
            return None;
        }
        let link = &self.links[self.cur as usize];
        self.cur = link.next;
        Some(&link.element)
    }
}

// =============================================================================
// Tests
// =============================================================================
