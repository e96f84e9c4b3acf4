//! Sentinel-based links between arena nodes.
//!
//! List nodes refer to each other by their slab key. Instead of
//! `Option<usize>`, a reserved sentinel (`usize::MAX`) marks an absent link.
//! Slab keys are dense indices, so the sentinel is never handed out.

/// A copyable reference to a node in a list's arena, or the sentinel `NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link(usize);

impl Link {
    /// Sentinel value representing "no node".
    pub(crate) const NONE: Self = Link(usize::MAX);

    /// Wraps a slab key.
    #[inline]
    pub(crate) const fn to(key: usize) -> Self {
        debug_assert!(key != usize::MAX, "slab key collides with sentinel");
        Link(key)
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub(crate) const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the raw slab key. The sentinel maps to an index no slab holds.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }

    /// Returns the slab key, or `None` for the sentinel.
    #[inline]
    pub(crate) const fn key(self) -> Option<usize> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(Link::NONE.is_none());
        assert!(!Link::NONE.is_some());
        assert_eq!(Link::NONE.key(), None);
    }

    #[test]
    fn key_roundtrip() {
        for key in [0usize, 1, 100, u32::MAX as usize] {
            let link = Link::to(key);
            assert!(link.is_some());
            assert_eq!(link.key(), Some(key));
        }
    }
}
