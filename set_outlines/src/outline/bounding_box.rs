use super::SetOutline;
use crate::{
    Rect,
    core::{math::Vector2, traits::Real},
    rect::rects_extents,
};
use std::convert::Infallible;

/// Outline following the combined extents of the members.
///
/// Produces the four corners counter clockwise starting at the minimum corner. Non-members are
/// ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct BoundingBoxOutline;

impl<T> SetOutline<T> for BoundingBoxOutline
where
    T: Real,
{
    type Error = Infallible;

    fn create_outline(
        &self,
        members: &[Rect<T>],
        _non_members: &[Rect<T>],
    ) -> Result<Vec<Vector2<T>>, Self::Error> {
        let Some(extents) = rects_extents(members) else {
            return Ok(Vec::new());
        };

        Ok(Rect::from_aabb(&extents).corners().to_vec())
    }
}
