//! Wind turbine power curve models.
//!
//! Turbines are grouped by IEC wind class. Each class has its own
//! [`TurbineClassCurve`], and the four curves together form a
//! [`PowerCurveTable`].
//!
//! [`WindTurbine`] is a thin [`windpower_core::Model`] adapter over the pure
//! evaluation in `power_curve::core`. Power is reported in kilowatts and is
//! always within `[0, max_power]` of the selected curve.

mod class;
mod curve;
mod power_curve;

pub use class::{ClassSelection, UnknownWindClass, WindClass};
pub use curve::{CurveError, PowerCurveTable, TurbineClassCurve};
pub use power_curve::{
    OperatingRegion, PowerCurveInput, PowerCurveOutput, WindTurbine, wind_power,
};
