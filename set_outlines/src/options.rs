use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radius a [ShapeCreator](crate::ShapeCreator) starts with.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Construction options for [ShapeCreator](crate::ShapeCreator).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeCreatorOptions<T = f64> {
    /// Radius handed to the rectangle mapper, see [RectMapper](crate::RectMapper). Not
    /// validated, zero and negative values are passed through.
    pub radius: T,
}

impl<T> ShapeCreatorOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        ShapeCreatorOptions {
            radius: T::lit(DEFAULT_RADIUS),
        }
    }
}

impl<T> Default for ShapeCreatorOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
