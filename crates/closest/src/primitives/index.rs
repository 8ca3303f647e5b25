//! Index reporting convention.
//!
//! Results are stored 0-based internally. Hosts that count from one (the
//! historical convention of this routine) ask for [`IndexBase::One`] when
//! reading them out.

/// Base added to every reported column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    /// First target column is `0`.
    #[default]
    Zero,
    /// First target column is `1`.
    One,
}

impl IndexBase {
    /// Offset to add to a 0-based position.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Convert a 0-based position into this base.
    #[inline]
    pub fn apply(self, index: usize) -> usize {
        index + self.offset()
    }
}
