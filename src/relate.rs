//! Three-way comparison capability for ordered containers.
//!
//! The trees and heaps in this crate never hash their elements and never
//! clone them; the only thing they ask of an element is that any two can
//! be related as less, equal, or greater. [`Relatable`] is that contract.
//!
//! Every `T: Ord` is `Relatable` for free. A type that cannot or should
//! not implement `Ord` (partial payloads, ordering on one field only) can
//! implement the three methods directly:
//!
//! ```
//! use grove::relate::Relatable;
//!
//! struct Ticket {
//!     serial: u32,
//!     note: String,
//! }
//!
//! impl Relatable for Ticket {
//!     fn is_equal_to(&self, other: &Self) -> bool {
//!         self.serial == other.serial
//!     }
//!     fn is_less_than(&self, other: &Self) -> bool {
//!         self.serial < other.serial
//!     }
//!     fn is_greater_than(&self, other: &Self) -> bool {
//!         self.serial > other.serial
//!     }
//! }
//!
//! let a = Ticket { serial: 7, note: "first".into() };
//! let b = Ticket { serial: 9, note: "second".into() };
//! assert!(a.is_less_than(&b));
//! ```

/// A total order expressed as three mutually consistent predicates.
///
/// For any two values exactly one of `is_less_than`, `is_equal_to`,
/// `is_greater_than` must hold, and the order must be antisymmetric and
/// transitive. Containers in this crate assume this and do not attempt to
/// detect an inconsistent implementation; an element type that breaks the
/// contract gets arbitrary placement, never unsafety.
pub trait Relatable {
    fn is_equal_to(&self, other: &Self) -> bool;
    fn is_less_than(&self, other: &Self) -> bool;
    fn is_greater_than(&self, other: &Self) -> bool;
}

impl<T: Ord> Relatable for T {
    #[inline(always)]
    fn is_equal_to(&self, other: &Self) -> bool {
        self == other
    }

    #[inline(always)]
    fn is_less_than(&self, other: &Self) -> bool {
        self < other
    }

    #[inline(always)]
    fn is_greater_than(&self, other: &Self) -> bool {
        self > other
    }
}
