use serde::{Deserialize, Serialize};
use windpower_models::PowerCurveTable;

use crate::UdfError;

/// Function name used when the configuration does not set one.
pub(crate) const DEFAULT_NAME: &str = "WindPower";

/// Configuration for a [`crate::WindPowerUdf`].
///
/// ```toml
/// name = "WindPower"
/// curves = "current"
/// ```
///
/// A custom set lists all four class curves, in class order:
///
/// ```toml
/// [[curves.custom]]
/// cut_in_speed = 3.0
/// max_power_speed = 14.5
/// cut_out_speed = 25.0
/// max_power = 2500.0
/// coefficients = [-12.9, 8.1, -4.5, 1.6, -0.04, -0.002, 0.00007]
/// # ...three more rows
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UdfConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub curves: CurveSet,
}

fn default_name() -> String {
    DEFAULT_NAME.to_owned()
}

impl UdfConfig {
    /// Parses a configuration from TOML.
    ///
    /// Custom curve tables are validated while parsing.
    ///
    /// # Errors
    ///
    /// Returns [`UdfError::Config`] if the document is malformed or a custom
    /// table is invalid.
    pub fn from_toml_str(s: &str) -> Result<Self, UdfError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for UdfConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            curves: CurveSet::default(),
        }
    }
}

/// Which curve constants the function evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveSet {
    #[default]
    Current,
    /// The superseded constants, for reproducing old results.
    ///
    /// The old revision took temperatures in degrees Celsius. [`crate::WindPowerUdf`]
    /// always takes kelvin, so Celsius inputs must be converted first.
    Legacy,
    Custom(PowerCurveTable),
}

impl CurveSet {
    #[must_use]
    pub fn table(&self) -> PowerCurveTable {
        match self {
            Self::Current => PowerCurveTable::CURRENT,
            #[allow(deprecated)]
            Self::Legacy => PowerCurveTable::LEGACY,
            Self::Custom(table) => *table,
        }
    }
}
