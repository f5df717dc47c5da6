//! Three-dimensional vector value type.
//!
//! [`Vector3`] holds three `f64` components and exposes paired
//! non-mutating / mutating arithmetic, geometric queries, magnitude based
//! comparison and a plain `"x,y,z"` text form.
//!
//! ```
//! use vector3d_math::Vector3;
//!
//! let mut position = Vector3::new(1.0, 2.0, 3.0);
//! position.madd(Vector3::splat(1.0));
//!
//! assert_eq!(position.to_string(), "2,3,4");
//! assert_eq!(position.to_fixed(1), "2.0,3.0,4.0");
//! assert!(Vector3::new(0.0, 3.0, 4.0).gte(Vector3::new(5.0, 0.0, 0.0)));
//! ```

mod format;
mod interop;
mod ops;
mod parse;
mod vector3;

pub use parse::*;
pub use vector3::*;
