//! vector3d is a small three-dimensional vector value type for graphics,
//! physics and other spatial code.
//!
//! ## Example
//! ```
//! use vector3d::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(a.cross(b).to_string(), "0,0,1");
//! assert_eq!(a.lerp(b, 0.5).inspect(), "<Vector3D x: 0.5 y: 0.5 z: 0>");
//! ```
//!
//! ### This Crate
//! The `vector3d` crate is a container crate that re-exports
//! [`vector3d_math`](https://docs.rs/vector3d_math) and adds logger setup
//! for binaries built on top of it.

mod logger;

pub use logger::init_logger;
pub use vector3d_math::*;

pub mod math {
    //! Vector type, parsing and operators.
    pub use vector3d_math::*;
}

pub use log;
