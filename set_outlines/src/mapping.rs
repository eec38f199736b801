//! Per rectangle transforms applied before outline generation.
use crate::{Rect, core::traits::Real};

/// Maps one rectangle to the rectangle the outline generator sees.
///
/// `radius` is the current radius of the [ShapeCreator](crate::ShapeCreator) invoking the
/// mapper, implementations are free to ignore it. Mapping must not have side effects and always
/// returns a new rectangle value (the input is only borrowed).
pub trait RectMapper<T = f64>
where
    T: Real,
{
    fn map_rect(&self, rect: &Rect<T>, radius: T) -> Rect<T>;

    /// Apply [RectMapper::map_rect] to each rectangle, preserving order and length.
    fn map_rects(&self, rects: &[Rect<T>], radius: T) -> Vec<Rect<T>> {
        rects.iter().map(|r| self.map_rect(r, radius)).collect()
    }
}

impl<T, F> RectMapper<T> for F
where
    T: Real,
    F: Fn(&Rect<T>, T) -> Rect<T>,
{
    #[inline]
    fn map_rect(&self, rect: &Rect<T>, radius: T) -> Rect<T> {
        self(rect, radius)
    }
}

/// Copies rectangles unchanged, the radius is ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdentityMapper;

impl<T> RectMapper<T> for IdentityMapper
where
    T: Real,
{
    #[inline]
    fn map_rect(&self, rect: &Rect<T>, _radius: T) -> Rect<T> {
        Rect::new(rect.min_x, rect.min_y, rect.width, rect.height)
    }
}

/// Grows every side of each rectangle by the radius, so outlines keep a margin of `radius`
/// around the members. Zero and negative radii are applied as is.
#[derive(Debug, Copy, Clone, Default)]
pub struct InflateMapper;

impl<T> RectMapper<T> for InflateMapper
where
    T: Real,
{
    #[inline]
    fn map_rect(&self, rect: &Rect<T>, radius: T) -> Rect<T> {
        rect.inflate(radius)
    }
}

/// Projects rectangles into another coordinate space: `p' = p * scale + translate` per axis.
///
/// A negative scale mirrors the rectangle, the result is normalized so its size stays
/// non-negative for non-negative input sizes. The radius is ignored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineMapper<T = f64> {
    pub scale_x: T,
    pub scale_y: T,
    pub translate_x: T,
    pub translate_y: T,
}

impl<T> AffineMapper<T>
where
    T: Real,
{
    pub fn new(scale_x: T, scale_y: T, translate_x: T, translate_y: T) -> Self {
        AffineMapper {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    pub fn translation(translate_x: T, translate_y: T) -> Self {
        Self::new(T::one(), T::one(), translate_x, translate_y)
    }

    pub fn scaling(scale: T) -> Self {
        Self::new(scale, scale, T::zero(), T::zero())
    }
}

impl<T> RectMapper<T> for AffineMapper<T>
where
    T: Real,
{
    fn map_rect(&self, rect: &Rect<T>, _radius: T) -> Rect<T> {
        let [min, _, max, _] = rect.corners();
        let project = |x: T, y: T| {
            crate::core::math::vec2(
                x * self.scale_x + self.translate_x,
                y * self.scale_y + self.translate_y,
            )
        };
        Rect::from_corners(project(min.x, min.y), project(max.x, max.y))
    }
}
