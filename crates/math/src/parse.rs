//! Text input for vectors, as used by command line flags.

use crate::Vector3;
use std::str::FromStr;
use svarog_core::{CoreError, CoreResult};

pub fn parse_scalar(input: &str) -> CoreResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::InvalidNumber {
            input: input.to_owned(),
        })
}

/// Accepts `"x,y,z"` or a single scalar that is splatted to all components.
impl FromStr for Vector3 {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [single] => Ok(Vector3::splat(parse_scalar(single)?)),
            [x, y, z] => Ok(Vector3::new(
                parse_scalar(x)?,
                parse_scalar(y)?,
                parse_scalar(z)?,
            )),
            _ => Err(CoreError::InvalidVector {
                input: s.to_owned(),
                expected: 3,
            }),
        }
    }
}
