use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Power, Velocity},
    power::kilowatt,
    velocity::meter_per_second,
};

use crate::{polynomial::Polynomial, turbine::WindClass};

/// Piecewise power curve for one wind class.
///
/// Speeds are in m/s, power in kW. The ramp polynomial maps a
/// density-corrected wind speed to power, and was fitted on the curved part
/// of the manufacturer curve, ideally including the last zero at the bottom
/// and the first full-power point at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbineClassCurve {
    /// Raw speeds below this produce no power.
    pub(crate) cut_in_speed: f64,
    /// Corrected speeds at or above this produce rated power.
    pub(crate) max_power_speed: f64,
    /// Raw speeds at or above this shut the turbine down.
    pub(crate) cut_out_speed: f64,
    pub(crate) max_power: f64,
    /// Ramp coefficients, constant term first.
    pub(crate) coefficients: [f64; 7],
}

impl TurbineClassCurve {
    /// Creates a curve from speeds in m/s, rated power in kW, and ramp
    /// coefficients ordered constant-first.
    ///
    /// The curve is not validated; see [`TurbineClassCurve::validate`].
    #[must_use]
    pub const fn new(
        cut_in_speed: f64,
        max_power_speed: f64,
        cut_out_speed: f64,
        max_power: f64,
        coefficients: [f64; 7],
    ) -> Self {
        Self {
            cut_in_speed,
            max_power_speed,
            cut_out_speed,
            max_power,
            coefficients,
        }
    }

    #[must_use]
    pub fn cut_in_speed(&self) -> Velocity {
        Velocity::new::<meter_per_second>(self.cut_in_speed)
    }

    #[must_use]
    pub fn max_power_speed(&self) -> Velocity {
        Velocity::new::<meter_per_second>(self.max_power_speed)
    }

    #[must_use]
    pub fn cut_out_speed(&self) -> Velocity {
        Velocity::new::<meter_per_second>(self.cut_out_speed)
    }

    #[must_use]
    pub fn max_power(&self) -> Power {
        Power::new::<kilowatt>(self.max_power)
    }

    /// Returns the ramp-region polynomial, in kW as a function of m/s.
    #[must_use]
    pub fn ramp(&self) -> Polynomial<7> {
        Polynomial::new(self.coefficients)
    }

    /// Checks that the curve can be evaluated.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] if any field is not finite, the rated power
    /// is not positive, or the cut-in speed is not below the cut-out speed.
    pub fn validate(&self) -> Result<(), CurveError> {
        let fields = [
            ("cut_in_speed", self.cut_in_speed),
            ("max_power_speed", self.max_power_speed),
            ("cut_out_speed", self.cut_out_speed),
            ("max_power", self.max_power),
        ];
        let coefficients = self.coefficients.iter().map(|&c| ("coefficients", c));

        if let Some((field, _)) = fields
            .into_iter()
            .chain(coefficients)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(CurveError::NonFinite { field });
        }

        if self.max_power <= 0.0 {
            return Err(CurveError::NonPositiveMaxPower {
                max_power: self.max_power,
            });
        }

        if self.cut_in_speed >= self.cut_out_speed {
            return Err(CurveError::InvalidSpeedRange {
                cut_in: self.cut_in_speed,
                cut_out: self.cut_out_speed,
            });
        }

        Ok(())
    }
}

/// The four class curves, indexed by [`WindClass`].
///
/// Tables are immutable once built. [`PowerCurveTable::CURRENT`] is the
/// canonical set; custom tables go through [`TryFrom`], which validates every
/// curve, and deserialize the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "[TurbineClassCurve; 4]",
    into = "[TurbineClassCurve; 4]"
)]
pub struct PowerCurveTable {
    curves: [TurbineClassCurve; 4],
}

impl PowerCurveTable {
    /// Curves for 2.5 MW turbines of classes I–IV (C89, C93, C96 and C99 rotors).
    ///
    /// Ramp fits (R ≥ 0.9999):
    ///
    /// ```text
    /// I   (C89): 0.02224750x⁶ − 1.09345169x⁵ + 20.83971017x⁴ − 197.90345533x³ + 1019.48583138x² − 2639.91725016x + 2652.67545748
    /// II  (C93): 0.04039445x⁶ − 1.95187354x⁵ + 36.95840140x⁴ − 351.40010898x³ + 1800.73609002x² − 4640.01367349x + 4658.81283912
    /// III (C96): 0.03969050x⁶ − 1.87439331x⁵ + 34.56233200x⁴ − 318.97489466x³ + 1586.05857456x² − 3951.86900568x + 3824.01454830
    /// IV  (C99): 0.04902650x⁶ − 2.26174643x⁵ + 40.84684710x⁴ − 370.17366979x³ + 1808.94586408x² − 4435.86553454x + 4230.86822414
    /// ```
    pub const CURRENT: Self = Self {
        curves: [
            TurbineClassCurve::new(
                3.0,
                14.5,
                25.0,
                2500.0,
                [
                    2652.675_457_48,
                    -2639.917_250_16,
                    1019.485_831_38,
                    -197.903_455_33,
                    20.839_710_171,
                    -1.093_451_69,
                    0.022_247_50,
                ],
            ),
            TurbineClassCurve::new(
                3.0,
                13.5,
                25.0,
                2500.0,
                [
                    4658.812_839_12,
                    -4640.013_673_49,
                    1800.736_090_02,
                    -351.400_108_98,
                    36.958_401_40,
                    -1.951_873_54,
                    0.040_394_45,
                ],
            ),
            TurbineClassCurve::new(
                3.0,
                13.5,
                25.0,
                2500.0,
                [
                    3824.014_548_30,
                    -3951.869_005_68,
                    1586.058_574_56,
                    -318.974_894_66,
                    34.562_332_00,
                    -1.874_393_31,
                    0.039_690_50,
                ],
            ),
            TurbineClassCurve::new(
                3.0,
                13.0,
                25.0,
                2500.0,
                [
                    4230.868_224_14,
                    -4435.865_534_54,
                    1808.945_864_08,
                    -370.173_669_79,
                    40.846_847_10,
                    -2.261_746_43,
                    0.049_026_50,
                ],
            ),
        ],
    };

    /// The first fitted revision of the class curves.
    ///
    /// These curves were fitted with interpolated cut-in and rated speeds and
    /// were used with temperatures in degrees Celsius. Results computed with
    /// them differ from [`PowerCurveTable::CURRENT`], and the two sets must
    /// not be mixed.
    #[deprecated(note = "superseded by `PowerCurveTable::CURRENT`")]
    pub const LEGACY: Self = Self {
        curves: [
            TurbineClassCurve::new(
                3.200_459_493_893_85,
                15.034_442_420_455_3,
                25.0,
                2500.0,
                [
                    1037.382,
                    -1267.6386,
                    561.983_692_5,
                    -120.076_256_5,
                    13.691_715_79,
                    -0.756_091_594,
                    0.015_828_643,
                ],
            ),
            TurbineClassCurve::new(
                2.905_615,
                14.624_552_430_575_5,
                25.0,
                2500.0,
                [
                    2282.3012,
                    -2385.4537,
                    959.222_757_2,
                    -192.015_572,
                    20.788_677_29,
                    -1.116_560_565,
                    0.023_156_628,
                ],
            ),
            TurbineClassCurve::new(
                3.055_32,
                13.962_828_1,
                25.0,
                2500.0,
                [
                    3128.5525,
                    -3224.4679,
                    1291.270_606,
                    -259.230_167_9,
                    28.173_826_86,
                    -1.530_123_345,
                    0.032_321_862,
                ],
            ),
            TurbineClassCurve::new(
                2.980_762_5,
                13.468_219_85,
                25.0,
                2500.0,
                [
                    3587.5318,
                    -3778.1170,
                    1546.878_826,
                    -317.188_221_2,
                    35.086_470_35,
                    -1.941_256_844,
                    0.041_872_187,
                ],
            ),
        ],
    };

    /// Returns the curve for a class.
    #[must_use]
    pub fn curve(&self, class: WindClass) -> &TurbineClassCurve {
        &self.curves[class.index()]
    }

    /// Iterates over the curves in class order.
    pub fn iter(&self) -> impl Iterator<Item = (WindClass, &TurbineClassCurve)> {
        WindClass::ALL.into_iter().zip(self.curves.iter())
    }
}

impl Default for PowerCurveTable {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl TryFrom<[TurbineClassCurve; 4]> for PowerCurveTable {
    type Error = CurveError;

    fn try_from(curves: [TurbineClassCurve; 4]) -> Result<Self, Self::Error> {
        for (class, curve) in WindClass::ALL.into_iter().zip(curves.iter()) {
            curve
                .validate()
                .map_err(|source| CurveError::InvalidClass {
                    class,
                    source: Box::new(source),
                })?;
        }
        Ok(Self { curves })
    }
}

impl From<PowerCurveTable> for [TurbineClassCurve; 4] {
    fn from(table: PowerCurveTable) -> Self {
        table.curves
    }
}

/// Errors raised when building a curve table from configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CurveError {
    #[error("curve field `{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error("maximum power must be positive (max_power={max_power} kW)")]
    NonPositiveMaxPower { max_power: f64 },

    #[error("cut-in speed must be below cut-out speed (cut_in={cut_in} m/s, cut_out={cut_out} m/s)")]
    InvalidSpeedRange { cut_in: f64, cut_out: f64 },

    #[error("invalid curve for wind class {class}")]
    InvalidClass {
        class: WindClass,
        #[source]
        source: Box<CurveError>,
    },
}
