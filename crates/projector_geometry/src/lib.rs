//! Projection matrices and supporting geometry.

mod axis_aligned_box;
mod plane;
mod projection;
mod rect;

pub use axis_aligned_box::AxisAlignedBox;
pub use plane::Plane;
pub use projection::{DepthCorrection, ProjectionMatrix, StereoEye};
pub use rect::Rect;
