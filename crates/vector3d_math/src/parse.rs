use std::num::ParseFloatError;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::vector3::Vector3;

/// Errors produced when reading a vector from its `"x,y,z"` text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVectorError {
    #[error("vector literal is empty")]
    Empty,

    #[error("vector literal has {0} components, at most 3 are allowed")]
    TooManyComponents(usize),

    #[error("component {index} is not a number: {source}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: ParseFloatError,
    },
}

/// Reads the comma separated form written by `Display` and `to_fixed`.
///
/// One or two components follow the construction rules, so `"5"` is
/// `(5, 5, 5)` and `"1,2"` is `(1, 2, 2)`.
///
/// ```
/// use vector3d_math::Vector3;
///
/// let v: Vector3 = "1, 2.5, -Infinity".parse().unwrap();
/// assert_eq!(v.to_string(), "1,2.5,-Infinity");
/// ```
impl FromStr for Vector3 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s).map_err(|error| {
            debug!("rejected vector literal {:?}: {}", s, error);
            error
        })
    }
}

fn parse_components(s: &str) -> Result<Vector3, ParseVectorError> {
    if s.trim().is_empty() {
        return Err(ParseVectorError::Empty);
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() > 3 {
        return Err(ParseVectorError::TooManyComponents(parts.len()));
    }

    let mut components = [0.0; 3];
    for (index, part) in parts.iter().enumerate() {
        components[index] = part
            .trim()
            .parse::<f64>()
            .map_err(|source| ParseVectorError::InvalidComponent { index, source })?;
    }

    Ok(match parts.len() {
        1 => Vector3::splat(components[0]),
        2 => Vector3::from_pair(components[0], components[1]),
        _ => Vector3::from(components),
    })
}
