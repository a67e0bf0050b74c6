//! Geometry operations on frames: cropping and fitted drawing.
//!
//! # Typical Flow
//!
//! 1. Fit a captured image into a fixed-size canvas (`draw_image_fitted`)
//! 2. Detect the ink bounds on a transformed copy of that canvas
//! 3. Crop the original canvas to those bounds (`crop_frame`)
//!
//! # Coordinate System
//!
//! - All rectangles are in whole pixels
//! - Origin is top-left corner

mod crop;
mod fit;

pub use crop::crop_frame;
pub use fit::{draw_image_fitted, fit_placement, FilterType, Placement};
