//! Density-corrected wind turbine power curve model.

mod core;

use uom::si::{
    f64::{Length, Power, ThermodynamicTemperature, Velocity},
    length::meter,
    power::kilowatt,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};
use windpower_core::Model;

use crate::{
    PowerCurveError,
    atmosphere::DensityRatio,
    turbine::{PowerCurveTable, WindClass},
};

/// Which part of the power curve produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingRegion {
    /// Raw wind speed below cut-in; no power.
    BelowCutIn,
    /// Between cut-in and rated speed; power follows the ramp polynomial.
    Ramp,
    /// Corrected speed at or above rated speed; power is at its maximum.
    Rated,
    /// Raw wind speed at or above cut-out; the turbine is shut down.
    CutOut,
}

/// Site conditions for one power curve evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurveInput {
    pub wind_class: WindClass,
    pub mean_wind_speed: Velocity,
    /// Height of the hub above sea level (site elevation plus tower height).
    pub hub_elevation: Length,
    pub temperature: ThermodynamicTemperature,
}

/// Expected turbine output and the intermediate correction terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurveOutput {
    /// Electrical power, within `[0, max_power]` of the selected curve.
    pub power: Power,
    pub region: OperatingRegion,
    pub density_ratio: DensityRatio,
    /// Wind speed that would deliver the same power in standard air.
    pub adjusted_speed: Velocity,
}

/// A wind turbine whose output follows one of four class power curves.
///
/// The turbine holds only its immutable [`PowerCurveTable`]; every call is a
/// pure function of the input.
///
/// # Example
///
/// ```
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature, Velocity},
///     length::meter,
///     power::kilowatt,
///     thermodynamic_temperature::degree_celsius,
///     velocity::meter_per_second,
/// };
/// use windpower_core::Model;
/// use windpower_models::{PowerCurveInput, WindClass, WindTurbine};
///
/// let turbine = WindTurbine::default();
/// let output = turbine
///     .call(&PowerCurveInput {
///         wind_class: WindClass::II,
///         mean_wind_speed: Velocity::new::<meter_per_second>(20.0),
///         hub_elevation: Length::new::<meter>(80.0),
///         temperature: ThermodynamicTemperature::new::<degree_celsius>(10.0),
///     })
///     .unwrap();
///
/// assert_eq!(output.power.get::<kilowatt>(), 2500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindTurbine {
    table: PowerCurveTable,
}

impl WindTurbine {
    /// Creates a turbine model using the given curve table.
    #[must_use]
    pub const fn new(table: PowerCurveTable) -> Self {
        Self { table }
    }

    /// Returns the curve table used by this turbine.
    #[must_use]
    pub fn table(&self) -> &PowerCurveTable {
        &self.table
    }

    /// Evaluates the power curve from plain numbers.
    ///
    /// Arguments follow the positional convention used by query hosts: raw
    /// class number, mean wind speed in m/s, hub height above sea level in m,
    /// and temperature in **kelvin**. The result is in kW.
    ///
    /// A class number outside `1..=4` is evaluated as class I (see
    /// [`WindClass::from_raw`]).
    ///
    /// # Errors
    ///
    /// Returns a [`PowerCurveError`] if an input is not finite or the air
    /// density is undefined for the given temperature and height.
    pub fn power_kw(
        &self,
        wind_class: i64,
        mean_wind_speed: f64,
        height: f64,
        temperature_kelvin: f64,
    ) -> Result<f64, PowerCurveError> {
        self.power_kw_for(
            WindClass::from_raw(wind_class),
            mean_wind_speed,
            height,
            temperature_kelvin,
        )
    }

    /// Like [`WindTurbine::power_kw`], with an already resolved class.
    ///
    /// # Errors
    ///
    /// See [`WindTurbine::power_kw`].
    pub fn power_kw_for(
        &self,
        wind_class: WindClass,
        mean_wind_speed: f64,
        height: f64,
        temperature_kelvin: f64,
    ) -> Result<f64, PowerCurveError> {
        core::evaluate(
            self.table.curve(wind_class),
            Velocity::new::<meter_per_second>(mean_wind_speed),
            Length::new::<meter>(height),
            ThermodynamicTemperature::new::<kelvin>(temperature_kelvin),
        )
        .map(|eval| eval.power_kw)
    }
}

impl Model for WindTurbine {
    type Input = PowerCurveInput;
    type Output = PowerCurveOutput;
    type Error = PowerCurveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let eval = core::evaluate(
            self.table.curve(input.wind_class),
            input.mean_wind_speed,
            input.hub_elevation,
            input.temperature,
        )?;

        Ok(PowerCurveOutput {
            power: Power::new::<kilowatt>(eval.power_kw),
            region: eval.region,
            density_ratio: eval.density_ratio,
            adjusted_speed: eval.adjusted_speed,
        })
    }
}

/// Expected power in kW of a turbine from the canonical curve table.
///
/// Arguments are positional: wind class (`1..=4`, anything else is treated
/// as class I), mean wind speed in m/s, hub height above sea level in m, and
/// temperature in kelvin.
///
/// # Errors
///
/// Returns a [`PowerCurveError`] if an input is not finite or the air density
/// is undefined for the given temperature and height.
///
/// # Example
///
/// ```
/// let kw = windpower_models::wind_power(1, 10.0, 0.0, 288.15).unwrap();
/// assert!(kw > 1598.0 && kw < 1598.1);
/// ```
pub fn wind_power(
    wind_class: i64,
    mean_wind_speed: f64,
    height: f64,
    temperature_kelvin: f64,
) -> Result<f64, PowerCurveError> {
    const TURBINE: WindTurbine = WindTurbine::new(PowerCurveTable::CURRENT);
    TURBINE.power_kw(wind_class, mean_wind_speed, height, temperature_kelvin)
}
