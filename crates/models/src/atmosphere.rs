//! Air density correction for altitude and temperature.
//!
//! Turbine power scales with `ρ·v³`. A power curve measured in standard air can
//! therefore be reused at any site by scaling the measured wind speed with the
//! cube root of the local-to-standard density ratio:
//!
//! ```text
//! ρ/ρ₀   = T₀/T · (1 + L·h/T)^(−g/(R·L))
//! v_adj  = v · (ρ/ρ₀)^(1/3)
//! ```
//!
//! where `T₀ = 288.15 K`, `L` is the temperature lapse rate, `R` the specific
//! gas constant of dry air, and `g` the gravitational acceleration.

use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::meter,
    thermodynamic_temperature::kelvin,
};
use windpower_core::constraint::{Constrained, StrictlyPositive};

use crate::PowerCurveError;

/// Decrease in temperature with increase in elevation, K/m.
pub const LAPSE_RATE: f64 = 0.0065;

/// Specific gas constant for dry air, J/(kg·K).
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.053;

/// Gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.807;

/// Sea-level temperature of the standard atmosphere, K.
pub const STANDARD_TEMPERATURE: f64 = 288.15;

/// Ratio of local air density to density at standard temperature and pressure.
///
/// The ratio is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DensityRatio(Constrained<f64, StrictlyPositive>);

impl DensityRatio {
    /// Computes the density ratio for a site.
    ///
    /// `elevation` is the height of the hub above sea level, i.e. site
    /// elevation plus tower height.
    ///
    /// # Errors
    ///
    /// Returns a [`PowerCurveError`] if either input is not finite, the
    /// absolute temperature is not positive, or the elevation lies so far
    /// below sea level that the barometric relation is undefined.
    pub fn at(
        elevation: Length,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PowerCurveError> {
        let h = elevation.get::<meter>();
        let t = temperature.get::<kelvin>();

        if !h.is_finite() {
            return Err(PowerCurveError::NonFiniteInput {
                quantity: "hub elevation",
                value: h,
            });
        }
        if !t.is_finite() {
            return Err(PowerCurveError::NonFiniteInput {
                quantity: "temperature",
                value: t,
            });
        }
        if t <= 0.0 {
            return Err(PowerCurveError::NonPositiveTemperature { kelvin: t });
        }

        let undefined = PowerCurveError::UndefinedDensity {
            elevation_m: h,
            kelvin: t,
        };

        let base = 1.0 + LAPSE_RATE * h / t;
        if base <= 0.0 {
            return Err(undefined);
        }

        let exponent = -GRAVITY / (DRY_AIR_GAS_CONSTANT * LAPSE_RATE);
        let ratio = STANDARD_TEMPERATURE / t * base.powf(exponent);

        // Extreme elevations can underflow the ratio to zero, and tiny
        // temperatures can overflow it.
        if !ratio.is_finite() {
            return Err(undefined);
        }
        StrictlyPositive::new(ratio)
            .map(Self)
            .map_err(|_| undefined)
    }

    /// Returns the density ratio as a plain number.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }

    /// Returns the wind speed scaling factor, the cube root of the density ratio.
    #[must_use]
    pub fn speed_ratio(self) -> f64 {
        self.value().cbrt()
    }

    /// Scales a measured wind speed to its standard-air equivalent.
    #[must_use]
    pub fn adjust(self, speed: Velocity) -> Velocity {
        speed * self.speed_ratio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{thermodynamic_temperature::degree_celsius, velocity::meter_per_second};

    fn meters(h: f64) -> Length {
        Length::new::<meter>(h)
    }

    fn kelvins(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn standard_conditions_give_unit_ratio() {
        let ratio = DensityRatio::at(meters(0.0), kelvins(STANDARD_TEMPERATURE)).unwrap();
        assert_eq!(ratio.value(), 1.0);
        assert_eq!(ratio.speed_ratio(), 1.0);

        let v = Velocity::new::<meter_per_second>(10.0);
        assert_eq!(ratio.adjust(v), v);
    }

    #[test]
    fn celsius_and_kelvin_agree() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(15.0);
        let ratio = DensityRatio::at(meters(0.0), t_c).unwrap();
        assert_relative_eq!(ratio.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn warm_air_is_thinner() {
        let cold = DensityRatio::at(meters(0.0), kelvins(273.15)).unwrap();
        let warm = DensityRatio::at(meters(0.0), kelvins(308.15)).unwrap();
        assert!(cold.value() > 1.0);
        assert!(warm.value() < 1.0);
        assert_relative_eq!(cold.value(), 288.15 / 273.15, epsilon = 1e-12);
    }

    #[test]
    fn high_sites_are_thinner() {
        let t = kelvins(STANDARD_TEMPERATURE);
        let sea_level = DensityRatio::at(meters(0.0), t).unwrap();
        let hill = DensityRatio::at(meters(500.0), t).unwrap();
        let mountain = DensityRatio::at(meters(1500.0), t).unwrap();
        assert!(sea_level > hill);
        assert!(hill > mountain);

        // Exponent g/(R·L) ≈ 5.25607.
        assert_relative_eq!(mountain.value(), 0.839_537_273_994_453, max_relative = 1e-9);
    }

    #[test]
    fn speed_ratio_is_cube_root() {
        let ratio = DensityRatio::at(meters(1000.0), kelvins(280.0)).unwrap();
        assert_relative_eq!(ratio.speed_ratio().powi(3), ratio.value(), epsilon = 1e-12);
    }

    #[test]
    fn below_sea_level_is_allowed() {
        let dead_sea = DensityRatio::at(meters(-430.0), kelvins(303.15)).unwrap();
        let sea_level = DensityRatio::at(meters(0.0), kelvins(303.15)).unwrap();
        assert!(dead_sea > sea_level);
    }

    #[test]
    fn absolute_zero_is_rejected() {
        let err = DensityRatio::at(meters(0.0), kelvins(0.0)).unwrap_err();
        assert_eq!(err, PowerCurveError::NonPositiveTemperature { kelvin: 0.0 });

        let err = DensityRatio::at(meters(0.0), kelvins(-5.0)).unwrap_err();
        assert!(matches!(err, PowerCurveError::NonPositiveTemperature { .. }));
    }

    #[test]
    fn overflowing_ratio_is_rejected() {
        let err = DensityRatio::at(meters(0.0), kelvins(1e-310)).unwrap_err();
        assert!(matches!(err, PowerCurveError::UndefinedDensity { .. }));
    }

    #[test]
    fn extreme_depth_is_rejected() {
        // 1 + L·h/T <= 0 once h <= -T/L ≈ -44 km.
        let err = DensityRatio::at(meters(-50_000.0), kelvins(288.15)).unwrap_err();
        assert!(matches!(err, PowerCurveError::UndefinedDensity { .. }));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = DensityRatio::at(meters(f64::NAN), kelvins(288.15)).unwrap_err();
        assert!(matches!(
            err,
            PowerCurveError::NonFiniteInput {
                quantity: "hub elevation",
                ..
            }
        ));

        let err = DensityRatio::at(meters(0.0), kelvins(f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err,
            PowerCurveError::NonFiniteInput {
                quantity: "temperature",
                ..
            }
        ));
    }
}
