use super::FuzzyEq;

/// Tolerance based ordering, used when deciding whether hull points turn or are collinear.
pub trait FuzzyOrd: FuzzyEq {
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Fuzzy greater than.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Fuzzy less than.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self > other + fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self + fuzzy_epsilon < other
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_outside_epsilon() {
        assert!(1.0f64.fuzzy_gt(0.5));
        assert!(!1.0f64.fuzzy_gt(1.0 - 1e-10));
        assert!(0.5f64.fuzzy_lt(1.0));
        assert!(!1.0f64.fuzzy_lt(1.0 + 1e-10));
    }
}
