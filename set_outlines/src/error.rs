use crate::{Rect, core::traits::Real};
use std::fmt;
use thiserror::Error;

/// Where a rejected rectangle was found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RectRole {
    /// The members passed to [ShapeCreator::create_shape_for](crate::ShapeCreator::create_shape_for).
    Member,
    /// The non-members passed to
    /// [ShapeCreator::create_shape_for](crate::ShapeCreator::create_shape_for).
    NonMember,
    /// The group at the given index passed to
    /// [ShapeCreator::create_shapes_for](crate::ShapeCreator::create_shapes_for).
    Group(usize),
}

impl fmt::Display for RectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectRole::Member => write!(f, "member"),
            RectRole::NonMember => write!(f, "non-member"),
            RectRole::Group(i) => write!(f, "group {i}"),
        }
    }
}

/// Errors from [ShapeCreator](crate::ShapeCreator), `E` is the error type of its outline
/// generator.
#[derive(Debug, Error)]
pub enum ShapeCreatorError<E, T = f64>
where
    T: Real,
{
    /// A rectangle has a NaN or infinite coordinate or size.
    #[error("invalid rectangle {index} of {role}: {rect:?} is not finite")]
    InvalidArgument {
        role: RectRole,
        index: usize,
        rect: Rect<T>,
    },
    /// The outline generator failed, the error is passed through unchanged.
    #[error(transparent)]
    Outline(E),
}

impl<E, T> ShapeCreatorError<E, T>
where
    T: Real,
{
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ShapeCreatorError::InvalidArgument { .. })
    }

    /// The outline generator error, if that is what this is.
    pub fn into_outline_error(self) -> Option<E> {
        match self {
            ShapeCreatorError::Outline(e) => Some(e),
            ShapeCreatorError::InvalidArgument { .. } => None,
        }
    }
}

/// Fails on the first rectangle in `rects` that is not finite.
pub(crate) fn validate_rects<E, T>(
    rects: &[Rect<T>],
    role: RectRole,
) -> Result<(), ShapeCreatorError<E, T>>
where
    T: Real,
{
    match rects.iter().position(|r| !r.is_finite()) {
        Some(index) => {
            tracing::warn!(%role, index, "rejecting non-finite rectangle");
            Err(ShapeCreatorError::InvalidArgument {
                role,
                index,
                rect: rects[index],
            })
        }
        None => Ok(()),
    }
}
