//! Wind turbine power curve models.
//!
//! The main entry point is [`WindTurbine`], a [`windpower_core::Model`] that
//! maps a wind class, mean wind speed, hub elevation and ambient temperature to
//! the expected electrical power of the turbine.
//!
//! Evaluation happens in two stages:
//!
//! 1. The measured wind speed is corrected for air density using the
//!    [`atmosphere`] module, producing the speed that would deliver the same
//!    aerodynamic power in standard-temperature-and-pressure air.
//! 2. The corrected speed is mapped through the class-specific piecewise
//!    [`PowerCurveTable`] curve: a dead zone below cut-in, a polynomial ramp,
//!    a rated plateau, and a shutdown at cut-out.
//!
//! For hosts that pass plain numbers, [`wind_power`] exposes the same model
//! with positional scalar arguments and temperature in kelvin.

pub mod atmosphere;
mod error;
pub mod polynomial;
pub mod turbine;

pub use error::PowerCurveError;
pub use turbine::{
    ClassSelection, CurveError, OperatingRegion, PowerCurveInput, PowerCurveOutput,
    PowerCurveTable, TurbineClassCurve, UnknownWindClass, WindClass, WindTurbine, wind_power,
};
