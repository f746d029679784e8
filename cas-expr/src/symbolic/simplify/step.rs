#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `2+3 = 5`
    AddConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `2x+3x = 5x`
    /// `x+3x = 4x`
    /// `2x+x = 3x`
    CombineLikeTerms,

    /// `2*3 = 6`
    MultiplyConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,
}
