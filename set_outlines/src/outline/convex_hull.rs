use super::SetOutline;
use crate::{
    Rect,
    core::{math::Vector2, traits::Real},
};
use std::{cmp::Ordering, convert::Infallible};

/// Outline following the convex hull of all member rectangle corners.
///
/// Points are counter clockwise starting at the left most (then bottom most) corner, collinear
/// and duplicate points are dropped. Members collapsing to a single point or line produce one or
/// two points. Non-members are ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConvexHullOutline;

impl<T> SetOutline<T> for ConvexHullOutline
where
    T: Real,
{
    type Error = Infallible;

    fn create_outline(
        &self,
        members: &[Rect<T>],
        _non_members: &[Rect<T>],
    ) -> Result<Vec<Vector2<T>>, Self::Error> {
        let points = members.iter().flat_map(|r| r.corners());
        Ok(convex_hull(points))
    }
}

/// Strict left turn at `p1` going from `p0` to `p2`.
///
/// The cross product is compared relative to the edge lengths, so the test depends on the turn
/// angle and not on the coordinate scale.
fn is_left_turn<T: Real>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> bool {
    let a = p1 - p0;
    let b = p2 - p0;
    a.perp_dot(b) > T::fuzzy_epsilon() * a.length() * b.length()
}

fn cmp_xy<T: Real>(a: &Vector2<T>, b: &Vector2<T>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Andrew's monotone chain.
pub fn convex_hull<T, I>(points: I) -> Vec<Vector2<T>>
where
    T: Real,
    I: IntoIterator<Item = Vector2<T>>,
{
    let mut pts: Vec<_> = points.into_iter().collect();
    pts.sort_by(cmp_xy);
    pts.dedup_by(|a, b| a.fuzzy_eq(*b));

    if pts.len() < 3 {
        return pts;
    }

    // pop while the last two points and the candidate do not make a strict left turn
    fn push_turning<T: Real>(chain: &mut Vec<Vector2<T>>, p: Vector2<T>) {
        while chain.len() >= 2
            && !is_left_turn(chain[chain.len() - 2], chain[chain.len() - 1], p)
        {
            chain.pop();
        }
        chain.push(p);
    }

    let mut lower = Vec::with_capacity(pts.len());
    for &p in pts.iter() {
        push_turning(&mut lower, p);
    }

    let mut upper = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        push_turning(&mut upper, p);
    }

    // end points of each chain are the start point of the other
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
}
