use thiserror::Error;

/// Errors that may occur when evaluating a power curve.
///
/// Only inputs that would make the density correction undefined are rejected.
/// Physically odd but computable inputs, such as negative wind speeds or sites
/// below sea level, are evaluated as given.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum PowerCurveError {
    /// An input was NaN or infinite.
    #[error("{quantity} must be finite (got {value})")]
    NonFiniteInput { quantity: &'static str, value: f64 },

    /// The absolute temperature was zero or negative.
    #[error("absolute temperature must be positive (got {kelvin} K)")]
    NonPositiveTemperature { kelvin: f64 },

    /// The lapse-rate term of the barometric relation is not positive.
    ///
    /// This happens for elevations far below sea level, where the relation
    /// would raise a negative number to a fractional power.
    #[error("air density is undefined at elevation {elevation_m} m and {kelvin} K")]
    UndefinedDensity { elevation_m: f64, kelvin: f64 },
}
