//! Boundary outlines for sets of axis-aligned rectangles.
//!
//! Each set (group) of rectangles gets one outline shape. While outlining a set, the rectangles
//! of every other set are handed to the outline generator as obstacles so the boundary can steer
//! away from them. The pipeline is assembled from three swappable parts:
//!
//! * a [RectMapper] applied to every rectangle first (for example inflating by the radius),
//! * a [SetOutline] generator producing the ordered boundary points,
//! * a [ShapeConverter] turning those points into the output shape.
//!
//! [ShapeCreator] drives the pipeline for a whole list of groups.

#[macro_use]
mod macros;

pub mod core;
pub mod outline;
pub mod polyline;

mod convert;
mod error;
mod mapping;
mod options;
mod path;
mod rect;
mod shape_creator;

pub use static_aabb2d_index::AABB;

pub use crate::convert::*;
pub use crate::core::math::{Vector2, vec2};
pub use crate::error::{RectRole, ShapeCreatorError};
pub use crate::mapping::*;
pub use crate::options::*;
pub use crate::outline::{BoundingBoxOutline, ConvexHullOutline, SetOutline};
pub use crate::path::*;
pub use crate::polyline::{PlineVertex, Polyline};
pub use crate::rect::*;
pub use crate::shape_creator::*;
