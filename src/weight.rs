use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

/// An edge weight the router can sum up and compare. Floats use the IEEE total order.
pub trait Weight: Copy + Debug + Add<Output = Self> + Zero + Send + Sync {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Weight for f64 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl Weight for u32 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
