use super::PlineVertex;
use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_aabb2d_index::AABB;
use std::ops::{Index, IndexMut};

/// Sequence of [PlineVertex] forming an open or closed path.
///
/// This is the shape produced by [PolygonConverter](crate::PolygonConverter): a closed polyline
/// with one vertex per outline point. An empty polyline is the degenerate shape.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    pub vertex_data: Vec<PlineVertex<T>>,
    pub is_closed: bool,
}

impl<T> Default for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty open [Polyline].
    #[inline]
    pub fn new() -> Self {
        Polyline {
            vertex_data: Vec::new(),
            is_closed: false,
        }
    }

    /// Create a new empty closed [Polyline].
    #[inline]
    pub fn new_closed() -> Self {
        Polyline {
            vertex_data: Vec::new(),
            is_closed: true,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize, is_closed: bool) -> Self {
        Polyline {
            vertex_data: Vec::with_capacity(capacity),
            is_closed,
        }
    }

    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.vertex_data.push(PlineVertex::new(x, y));
    }

    #[inline]
    pub fn add_vertex(&mut self, vertex: PlineVertex<T>) {
        self.vertex_data.push(vertex);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn iter_vertexes(&self) -> impl DoubleEndedIterator<Item = PlineVertex<T>> + '_ {
        self.vertex_data.iter().copied()
    }

    /// Number of segments, a closed polyline has a segment from its last vertex to its first.
    pub fn segment_count(&self) -> usize {
        match self.len() {
            0 | 1 => 0,
            n if self.is_closed => n,
            n => n - 1,
        }
    }

    /// Iterate the `(start, end)` vertex pairs of each segment.
    pub fn iter_segments(&self) -> impl Iterator<Item = (PlineVertex<T>, PlineVertex<T>)> + '_ {
        let n = self.len();
        (0..self.segment_count()).map(move |i| (self[i], self[(i + 1) % n]))
    }

    /// Signed area of the closed polyline, positive if counter clockwise and negative if
    /// clockwise. Open polylines have zero area.
    pub fn area(&self) -> T {
        if !self.is_closed {
            return T::zero();
        }

        // shoelace formula
        let mut double_total_area = T::zero();
        for (v1, v2) in self.iter_segments() {
            double_total_area = double_total_area + v1.x * v2.y - v1.y * v2.x;
        }

        double_total_area / T::two()
    }

    /// Bounding box of the vertex positions, `None` if empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let mut iter = self.iter_vertexes();
        let first = iter.next()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for v in iter {
            result.min_x = num_traits::real::Real::min(result.min_x, v.x);
            result.min_y = num_traits::real::Real::min(result.min_y, v.y);
            result.max_x = num_traits::real::Real::max(result.max_x, v.x);
            result.max_y = num_traits::real::Real::max(result.max_y, v.y);
        }

        Some(result)
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = PlineVertex<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}
