use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Scalar type used for all rectangle, point, and shape coordinates.
///
/// Implemented for `f32` and `f64`; `f64` is the default type parameter everywhere.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Convert an `f64` literal into `Self`.
    #[inline]
    fn lit(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns `false` for NaN and infinite values.
    #[inline]
    fn is_finite(self) -> bool {
        // NaN - NaN and inf - inf are both NaN which never compares equal
        self - self == Self::zero()
    }
}

impl Real for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
