//! Outline generators: strategies turning the member rectangles of one set (and the rectangles
//! of every other set) into an ordered boundary point sequence.
mod bounding_box;
mod convex_hull;

pub use bounding_box::*;
pub use convex_hull::*;

use crate::{
    Rect,
    core::{math::Vector2, traits::Real},
};

/// Computes the boundary of one set of rectangles.
///
/// Implementations receive the already mapped `members` of the set and the `non_members`
/// (rectangles of every other set) which the boundary should steer away from. The returned
/// points are in traversal order and the boundary is implicitly closed (the last point connects
/// to the first).
///
/// Implementations must:
/// * return an empty sequence (not an error) if `members` is empty,
/// * be deterministic, the same inputs always produce the same points.
///
/// Errors returned are passed through [ShapeCreator](crate::ShapeCreator) unchanged.
pub trait SetOutline<T = f64>
where
    T: Real,
{
    type Error: std::error::Error + 'static;

    fn create_outline(
        &self,
        members: &[Rect<T>],
        non_members: &[Rect<T>],
    ) -> Result<Vec<Vector2<T>>, Self::Error>;
}

impl<T, G> SetOutline<T> for &G
where
    T: Real,
    G: SetOutline<T> + ?Sized,
{
    type Error = G::Error;

    #[inline]
    fn create_outline(
        &self,
        members: &[Rect<T>],
        non_members: &[Rect<T>],
    ) -> Result<Vec<Vector2<T>>, Self::Error> {
        (**self).create_outline(members, non_members)
    }
}

impl<T, G> SetOutline<T> for Box<G>
where
    T: Real,
    G: SetOutline<T> + ?Sized,
{
    type Error = G::Error;

    #[inline]
    fn create_outline(
        &self,
        members: &[Rect<T>],
        non_members: &[Rect<T>],
    ) -> Result<Vec<Vector2<T>>, Self::Error> {
        (**self).create_outline(members, non_members)
    }
}
