use std::fmt;

use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    InvalidCenter(Vector3),
    InvalidRadius(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCenter(center) => {
                write!(f, "sphere center must be finite, got {center}")
            }
            Error::InvalidRadius(radius) => {
                write!(f, "sphere radius must be a finite number, got {radius}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
