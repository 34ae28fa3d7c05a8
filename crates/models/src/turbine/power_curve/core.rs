//! Pure power curve evaluation.

use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    velocity::meter_per_second,
};

use crate::{
    PowerCurveError,
    atmosphere::DensityRatio,
    turbine::{OperatingRegion, TurbineClassCurve},
};

/// Result of evaluating one curve, in the curve's native units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Evaluation {
    /// Power in kW, clamped to `[0, max_power]`.
    pub(crate) power_kw: f64,
    pub(crate) region: OperatingRegion,
    pub(crate) density_ratio: DensityRatio,
    pub(crate) adjusted_speed: Velocity,
}

/// Evaluates a class curve at a site.
///
/// The raw `speed` decides the dead zone and the shutdown, while the
/// density-corrected speed decides saturation and is fed to the ramp.
pub(crate) fn evaluate(
    curve: &TurbineClassCurve,
    speed: Velocity,
    elevation: Length,
    temperature: ThermodynamicTemperature,
) -> Result<Evaluation, PowerCurveError> {
    let v = speed.get::<meter_per_second>();
    if !v.is_finite() {
        return Err(PowerCurveError::NonFiniteInput {
            quantity: "mean wind speed",
            value: v,
        });
    }

    let density_ratio = DensityRatio::at(elevation, temperature)?;
    let adjusted_speed = density_ratio.adjust(speed);
    let v_adj = adjusted_speed.get::<meter_per_second>();

    let (region, raw_power) = if v < curve.cut_in_speed {
        (OperatingRegion::BelowCutIn, 0.0)
    } else if v >= curve.cut_out_speed {
        (OperatingRegion::CutOut, 0.0)
    } else if v_adj >= curve.max_power_speed {
        (OperatingRegion::Rated, curve.max_power)
    } else {
        (OperatingRegion::Ramp, curve.ramp().evaluate(v_adj))
    };

    // The ramp fit overshoots slightly near both ends.
    let power_kw = raw_power.max(0.0).min(curve.max_power);

    Ok(Evaluation {
        power_kw,
        region,
        density_ratio,
        adjusted_speed,
    })
}
