use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("grid shape {width}x{height} does not match {points} grid points")]
    ShapeMismatch {
        width: usize,
        height: usize,
        points: usize,
    },

    #[error("grid step must be positive, got {step}")]
    NonPositiveStep { step: f64 },

    #[error("grid coordinate is not finite: {value}")]
    NonFiniteCoordinate { value: f64 },

    #[error("player roster is empty")]
    EmptyRoster,

    #[error("player {index} has invalid {field}: {value}")]
    InvalidPlayerField {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("no ball entity in frame to resolve the reference point")]
    MissingReference,

    #[error("covariance determinant {det} is not positive")]
    DegenerateCovariance { det: f64 },
}

pub type Result<T> = std::result::Result<T, ControlError>;
