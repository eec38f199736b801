//! Shape converters: turn an ordered outline point sequence into an output shape.
use crate::{
    Path, Polyline,
    core::{
        math::{Vector2, midpoint},
        traits::Real,
    },
    polyline::PlineVertex,
};

/// Converts the ordered points of an outline into a shape.
///
/// Points arrive in traversal order, the converter treats the sequence as closed (the last point
/// connects to the first). Fewer than 2 points must produce a degenerate (empty) shape rather
/// than fail.
pub trait ShapeConverter<T = f64>
where
    T: Real,
{
    type Shape;

    fn convert_to_shape(&self, points: &[Vector2<T>]) -> Self::Shape;
}

impl<T, S, F> ShapeConverter<T> for F
where
    T: Real,
    F: Fn(&[Vector2<T>]) -> S,
{
    type Shape = S;

    #[inline]
    fn convert_to_shape(&self, points: &[Vector2<T>]) -> Self::Shape {
        self(points)
    }
}

/// Straight edged closed [Polyline] through every point.
#[derive(Debug, Copy, Clone, Default)]
pub struct PolygonConverter;

impl<T> ShapeConverter<T> for PolygonConverter
where
    T: Real,
{
    type Shape = Polyline<T>;

    fn convert_to_shape(&self, points: &[Vector2<T>]) -> Self::Shape {
        if points.len() < 2 {
            return Polyline::new_closed();
        }

        let mut pline = Polyline::with_capacity(points.len(), true);
        for &p in points {
            pline.add_vertex(PlineVertex::line_to(p));
        }

        pline
    }
}

/// Smooth closed [Path] of quadratic curves.
///
/// The path starts at the midpoint of the closing edge, every point becomes the control point of
/// a curve ending at the midpoint of the edge leaving it. Curves touch each edge midpoint and
/// stay inside the polygon formed by the points. Two points produce a straight closed path.
#[derive(Debug, Copy, Clone, Default)]
pub struct BezierConverter;

impl<T> ShapeConverter<T> for BezierConverter
where
    T: Real,
{
    type Shape = Path<T>;

    fn convert_to_shape(&self, points: &[Vector2<T>]) -> Self::Shape {
        let n = points.len();
        match n {
            0 | 1 => Path::new(),
            2 => {
                let mut path = Path::with_capacity(3);
                path.move_to(points[0]);
                path.line_to(points[1]);
                path.close();
                path
            }
            _ => {
                let mut path = Path::with_capacity(n + 2);
                path.move_to(midpoint(points[n - 1], points[0]));
                for (i, &ctrl) in points.iter().enumerate() {
                    path.quad_to(ctrl, midpoint(ctrl, points[(i + 1) % n]));
                }
                path.close();
                path
            }
        }
    }
}

/// Drops points within `tolerance` of their predecessor (including the last point against the
/// first) and hands the remaining points to `inner`.
///
/// A negative tolerance is treated as zero, only exact duplicates are dropped.
#[derive(Debug, Copy, Clone)]
pub struct SimplifyingConverter<C, T = f64> {
    pub inner: C,
    pub tolerance: T,
}

impl<C, T> SimplifyingConverter<C, T>
where
    T: Real,
    C: ShapeConverter<T>,
{
    pub fn new(inner: C, tolerance: T) -> Self {
        SimplifyingConverter { inner, tolerance }
    }

    /// Points left after removing near duplicates.
    pub fn simplify(&self, points: &[Vector2<T>]) -> Vec<Vector2<T>> {
        let tol = num_traits::real::Real::max(self.tolerance, T::zero());
        let tol_sq = tol * tol;
        let mut result: Vec<Vector2<T>> = Vec::with_capacity(points.len());
        for &p in points {
            if result.last().is_none_or(|last| last.dist_squared(p) > tol_sq) {
                result.push(p);
            }
        }

        while result.len() > 1 && result[result.len() - 1].dist_squared(result[0]) <= tol_sq {
            result.pop();
        }

        result
    }
}

impl<C, T> ShapeConverter<T> for SimplifyingConverter<C, T>
where
    T: Real,
    C: ShapeConverter<T>,
{
    type Shape = C::Shape;

    fn convert_to_shape(&self, points: &[Vector2<T>]) -> Self::Shape {
        self.inner.convert_to_shape(&self.simplify(points))
    }
}
