//! Size arithmetic that refuses to wrap.

use crate::error::{Error, Result};

/// Returns `a + b`, or `RangeExceeded` if the sum does not fit in `usize`.
#[inline]
pub fn try_add(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b).ok_or(Error::RangeExceeded)
}

/// Returns `a * b`, or `RangeExceeded` if the product does not fit in `usize`.
#[inline]
pub fn try_mul(a: usize, b: usize) -> Result<usize> {
    a.checked_mul(b).ok_or(Error::RangeExceeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(try_add(1, 2), Ok(3));
        assert_eq!(try_add(usize::MAX, 0), Ok(usize::MAX));
        assert_eq!(try_add(usize::MAX, 1), Err(Error::RangeExceeded));
        assert_eq!(try_add(usize::MAX / 2 + 1, usize::MAX / 2 + 1), Err(Error::RangeExceeded));
    }

    #[test]
    fn mul() {
        assert_eq!(try_mul(6, 7), Ok(42));
        assert_eq!(try_mul(usize::MAX, 1), Ok(usize::MAX));
        assert_eq!(try_mul(usize::MAX / 2 + 1, 2), Err(Error::RangeExceeded));
    }
}
