//! Closed polygon shape output: polylines made of straight segments between vertexes.
mod pline;
mod pline_vertex;

pub use pline::*;
pub use pline_vertex::*;
