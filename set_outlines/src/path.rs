use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawing command of a [Path].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSeg<T = f64> {
    /// Start a new sub path at the point.
    MoveTo(Vector2<T>),
    /// Straight line from the current point.
    LineTo(Vector2<T>),
    /// Quadratic Bézier curve from the current point.
    QuadTo { ctrl: Vector2<T>, end: Vector2<T> },
    /// Connect back to the start of the current sub path.
    Close,
}

/// Sequence of drawing commands, the shape produced by
/// [BezierConverter](crate::BezierConverter). An empty path is the degenerate shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path<T = f64> {
    pub segments: Vec<PathSeg<T>>,
}

impl<T> Path<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            segments: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn move_to(&mut self, p: Vector2<T>) {
        self.segments.push(PathSeg::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Vector2<T>) {
        self.segments.push(PathSeg::LineTo(p));
    }

    #[inline]
    pub fn quad_to(&mut self, ctrl: Vector2<T>, end: Vector2<T>) {
        self.segments.push(PathSeg::QuadTo { ctrl, end });
    }

    #[inline]
    pub fn close(&mut self) {
        self.segments.push(PathSeg::Close);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `true` if the last command closes the path.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSeg::Close))
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathSeg<T>> {
        self.segments.iter()
    }
}
