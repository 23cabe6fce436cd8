use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{CheckedAdd, One, Zero};

/// A trait representing the capacity/flow type, typically a signed integer.
///
/// Results are exact as long as the true maximum flow (and every running sum
/// of bottleneck values on the way there) fits the chosen type. Cumulative
/// additions go through `CheckedAdd`, so exceeding the type surfaces as
/// [`Error::ArithmeticOverflow`](crate::Error::ArithmeticOverflow) instead of
/// wrapping.
pub trait Flow:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + CheckedAdd
    + Debug
    + Display
    + Default
{
}

impl Flow for i32 {}

impl Flow for i64 {}
