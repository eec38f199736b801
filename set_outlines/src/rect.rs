use crate::core::{
    math::{Vector2, vec2},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_aabb2d_index::AABB;

/// Axis-aligned rectangle given by its minimum corner and its size.
///
/// `width` and `height` are expected to be non-negative but this is not enforced, callers are
/// responsible for the geometry they pass in.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(min_x: T, min_y: T, width: T, height: T) -> Self {
        Rect {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning two corners given in any order.
    pub fn from_corners(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        let min_x = num_traits::real::Real::min(p0.x, p1.x);
        let min_y = num_traits::real::Real::min(p0.y, p1.y);
        let max_x = num_traits::real::Real::max(p0.x, p1.x);
        let max_y = num_traits::real::Real::max(p0.y, p1.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.min_x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.min_y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        vec2(
            self.min_x + self.width / T::two(),
            self.min_y + self.height / T::two(),
        )
    }

    /// The four corners in counter clockwise order starting at `(min_x, min_y)`.
    pub fn corners(&self) -> [Vector2<T>; 4] {
        let max_x = self.max_x();
        let max_y = self.max_y();
        [
            vec2(self.min_x, self.min_y),
            vec2(max_x, self.min_y),
            vec2(max_x, max_y),
            vec2(self.min_x, max_y),
        ]
    }

    /// Grow every side of the rectangle by `amount` (negative values shrink it).
    ///
    /// The result is not clamped, shrinking by more than half the size yields a negative width
    /// or height.
    #[inline]
    pub fn inflate(&self, amount: T) -> Self {
        Rect::new(
            self.min_x - amount,
            self.min_y - amount,
            self.width + T::two() * amount,
            self.height + T::two() * amount,
        )
    }

    /// `true` if every coordinate and size component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Fuzzy equal comparison with another rectangle using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.min_x.fuzzy_eq_eps(other.min_x, fuzzy_epsilon)
            && self.min_y.fuzzy_eq_eps(other.min_y, fuzzy_epsilon)
            && self.width.fuzzy_eq_eps(other.width, fuzzy_epsilon)
            && self.height.fuzzy_eq_eps(other.height, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another rectangle using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(self.min_x, self.min_y, self.max_x(), self.max_y())
    }

    #[inline]
    pub fn from_aabb(aabb: &AABB<T>) -> Self {
        Rect::new(
            aabb.min_x,
            aabb.min_y,
            aabb.max_x - aabb.min_x,
            aabb.max_y - aabb.min_y,
        )
    }
}

/// Combined extents of all the rectangles given, `None` if there are none.
pub fn rects_extents<'a, T, I>(rects: I) -> Option<AABB<T>>
where
    T: Real,
    I: IntoIterator<Item = &'a Rect<T>>,
{
    let mut iter = rects.into_iter();
    let first = iter.next()?;
    let mut result = first.to_aabb();
    for r in iter {
        result.min_x = num_traits::real::Real::min(result.min_x, r.min_x);
        result.min_y = num_traits::real::Real::min(result.min_y, r.min_y);
        result.max_x = num_traits::real::Real::max(result.max_x, r.max_x());
        result.max_y = num_traits::real::Real::max(result.max_y, r.max_y());
    }

    Some(result)
}
