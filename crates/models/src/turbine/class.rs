use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// IEC wind turbine class.
///
/// The class encodes the design wind-speed rating of a turbine and selects
/// which power curve applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindClass {
    #[default]
    I,
    II,
    III,
    IV,
}

impl WindClass {
    /// All classes, in table order.
    pub const ALL: [WindClass; 4] = [WindClass::I, WindClass::II, WindClass::III, WindClass::IV];

    /// Converts a raw class number, falling back to class I when it is outside `1..=4`.
    ///
    /// Rows with an unknown class are evaluated with the class I curve rather
    /// than rejected. Each fallback emits a `WARN` event so that the
    /// misclassification stays visible.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        Self::select(raw).class()
    }

    /// Like [`WindClass::from_raw`], but reports whether the fallback was applied.
    #[must_use]
    pub fn select(raw: i64) -> ClassSelection {
        match Self::try_from(raw) {
            Ok(class) => ClassSelection::Exact(class),
            Err(UnknownWindClass(raw)) => {
                tracing::warn!(raw, "wind class outside 1..=4, using class I curve");
                ClassSelection::Fallback { raw }
            }
        }
    }

    /// Returns the class number, `1` through `4`.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
        }
    }

    /// Position of this class in a four-row table.
    pub(crate) fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl TryFrom<i64> for WindClass {
    type Error = UnknownWindClass;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::I),
            2 => Ok(Self::II),
            3 => Ok(Self::III),
            4 => Ok(Self::IV),
            _ => Err(UnknownWindClass(raw)),
        }
    }
}

impl fmt::Display for WindClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        };
        f.write_str(numeral)
    }
}

/// The outcome of resolving a raw wind class number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSelection {
    /// The raw number named a valid class.
    Exact(WindClass),
    /// The raw number was outside `1..=4` and class I was substituted.
    Fallback { raw: i64 },
}

impl ClassSelection {
    /// Returns the class to evaluate with.
    #[must_use]
    pub fn class(self) -> WindClass {
        match self {
            Self::Exact(class) => class,
            Self::Fallback { .. } => WindClass::I,
        }
    }

    /// Returns `true` if class I was substituted for an unknown class.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Returned by the strict `TryFrom<i64>` conversion for numbers outside `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wind class {0} is outside the IEC range 1..=4")]
pub struct UnknownWindClass(pub i64);
