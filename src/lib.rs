//! Flattens simple-feature geometry trees into indexed OBJ meshes.
//!
//! ```
//! use sfobj::export::save_to_string;
//! use sfobj::geometry::{Geometry, Point};
//!
//! let text = save_to_string(&Geometry::from(Point::new(1.0, 2.0)))?;
//! assert_eq!(text, "v 1 2 0\np 1\n");
//! # Ok::<(), sfobj::SfobjError>(())
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod math;

pub use error::{Result, SfobjError};
