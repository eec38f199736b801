use super::Vector2;
use crate::core::traits::Real;

/// Twice the signed area of the triangle `p0`, `p1`, `p2`.
///
/// Positive if the points turn counter clockwise, negative if they turn clockwise, and zero if
/// they are collinear.
#[inline]
pub fn orientation<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).perp_dot(p2 - p0)
}

/// Midpoint between `p0` and `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}
