//! Typed id handles for graph entities.
//!
//! Vertices, halfedges, and faces live in arenas inside the graph and are
//! addressed by these copyable ids rather than by references, so clearing
//! the graph is a plain arena reset with no dangling-pointer bookkeeping.
//! An id is either a valid arena index or the invalid sentinel.

use std::fmt::{self, Debug};

const INVALID: u32 = u32::MAX;

macro_rules! impl_id_type {
    ($name:ident, $display:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new id from an arena index.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < INVALID as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// Create the invalid/null id.
            #[inline]
            pub fn invalid() -> Self {
                Self(INVALID)
            }

            /// Get the arena index.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Check if this is a valid (non-null) id.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != INVALID
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_id_type!(VertexId, "V", "A type-safe vertex id.");
impl_id_type!(HalfedgeId, "HE", "A type-safe halfedge id.");
impl_id_type!(FaceId, "F", "A type-safe face id.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert!(v.is_valid());

        let invalid = VertexId::invalid();
        assert!(!invalid.is_valid());
        assert_eq!(VertexId::default(), invalid);
    }

    #[test]
    fn test_type_safety() {
        // Same raw value, distinct types
        let v = VertexId::new(0);
        let he = HalfedgeId::new(0);
        let f = FaceId::new(0);

        assert_eq!(v.index(), he.index());
        assert_eq!(he.index(), f.index());
    }

    #[test]
    fn test_debug_format() {
        let he = HalfedgeId::new(7);
        assert_eq!(format!("{:?}", he), "HE(7)");

        let invalid = HalfedgeId::invalid();
        assert_eq!(format!("{:?}", invalid), "HE(INVALID)");
    }
}
