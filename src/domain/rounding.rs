//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the pool.
///
/// The pool never divides without stating which way the remainder goes.
/// Outputs paid to callers (swap quotes, withdrawal shares, minted LP
/// units) round [`Down`](Self::Down); the token amount pulled on deposit
/// rounds [`Up`](Self::Up).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
    }

    #[test]
    fn down_is_down() {
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }

    #[test]
    fn directions_differ() {
        assert_ne!(Rounding::Up, Rounding::Down);
    }
}
