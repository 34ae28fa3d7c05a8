use windpower_models::{PowerCurveTable, WindClass, WindTurbine};

use crate::{DataType, Datum, Signature, UdfConfig, UdfError, config::DEFAULT_NAME};

const ARGUMENTS: [DataType; 4] = [
    DataType::Int,
    DataType::Float,
    DataType::Float,
    DataType::Float,
];

/// The `WindPower` scalar function.
#[derive(Debug, Clone, PartialEq)]
pub struct WindPowerUdf {
    name: String,
    turbine: WindTurbine,
}

/// Argument columns for [`WindPowerUdf::invoke_batch`]; `None` is null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Columns<'a> {
    pub wind_class: &'a [Option<i64>],
    pub mean_wind_speed: &'a [Option<f64>],
    pub height: &'a [Option<f64>],
    pub temperature: &'a [Option<f64>],
}

/// Result of a batch call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchOutput {
    /// Power in kW per row, `None` where any argument was null.
    pub values: Vec<Option<f64>>,
    /// Rows whose wind class was outside `1..=4` and used the class I curve.
    pub class_fallbacks: usize,
}

impl WindPowerUdf {
    #[must_use]
    pub fn new(name: impl Into<String>, table: PowerCurveTable) -> Self {
        Self {
            name: name.into(),
            turbine: WindTurbine::new(table),
        }
    }

    #[must_use]
    pub fn from_config(config: &UdfConfig) -> Self {
        Self::new(config.name.clone(), config.curves.table())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature {
            name: self.name.clone(),
            arguments: ARGUMENTS.to_vec(),
            returns: DataType::Float,
            strict: true,
        }
    }

    /// Calls the function with positional arguments.
    ///
    /// Returns [`Datum::Null`] if any argument is null, otherwise the expected
    /// power in kW as a [`Datum::Float`].
    ///
    /// # Errors
    ///
    /// Fails if the argument count or an argument type is wrong, or if the
    /// model rejects the inputs.
    pub fn invoke(&self, args: &[Datum]) -> Result<Datum, UdfError> {
        let [class, speed, height, temperature] = args else {
            return Err(UdfError::Arity {
                expected: ARGUMENTS.len(),
                found: args.len(),
            });
        };

        // Type errors are reported even when another argument is null.
        let class = int_arg(0, *class)?;

        let (Some(class), Some(speed), Some(height), Some(temperature)) =
            (class, speed.as_f64(), height.as_f64(), temperature.as_f64())
        else {
            return Ok(Datum::Null);
        };

        let kw = self.turbine.power_kw(class, speed, height, temperature)?;
        Ok(Datum::Float(kw))
    }

    /// Calls the function once per row of `columns`.
    ///
    /// Unknown wind classes are counted and reported by a single warning for
    /// the whole batch instead of one per row.
    ///
    /// # Errors
    ///
    /// Fails if the columns differ in length, or with [`UdfError::Row`] for
    /// the first row the model rejects.
    pub fn invoke_batch(&self, columns: &Columns<'_>) -> Result<BatchOutput, UdfError> {
        let rows = columns.wind_class.len();
        for (column, found) in [
            ("mean_wind_speed", columns.mean_wind_speed.len()),
            ("height", columns.height.len()),
            ("temperature", columns.temperature.len()),
        ] {
            if found != rows {
                return Err(UdfError::ColumnLength {
                    column,
                    expected: rows,
                    found,
                });
            }
        }

        let mut output = BatchOutput {
            values: Vec::with_capacity(rows),
            class_fallbacks: 0,
        };

        for row in 0..rows {
            let args = (
                columns.wind_class[row],
                columns.mean_wind_speed[row],
                columns.height[row],
                columns.temperature[row],
            );
            let (Some(raw), Some(speed), Some(height), Some(temperature)) = args else {
                output.values.push(None);
                continue;
            };

            let class = WindClass::try_from(raw).unwrap_or_else(|_| {
                output.class_fallbacks += 1;
                WindClass::I
            });

            let kw = self
                .turbine
                .power_kw_for(class, speed, height, temperature)
                .map_err(|source| UdfError::Row { row, source })?;
            output.values.push(Some(kw));
        }

        if output.class_fallbacks > 0 {
            tracing::warn!(
                function = %self.name,
                rows,
                fallbacks = output.class_fallbacks,
                "wind class outside 1..=4 in batch, used class I curve"
            );
        }

        Ok(output)
    }
}

impl Default for WindPowerUdf {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, PowerCurveTable::CURRENT)
    }
}

fn int_arg(position: usize, datum: Datum) -> Result<Option<i64>, UdfError> {
    match datum {
        Datum::Null => Ok(None),
        Datum::Int(value) => Ok(Some(value)),
        Datum::Float(_) => Err(UdfError::TypeMismatch {
            position,
            expected: DataType::Int,
            found: DataType::Float,
        }),
    }
}
