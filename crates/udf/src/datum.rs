use std::fmt;

/// Argument and return types understood by the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Float,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("double precision"),
        }
    }
}

/// A single positional value passed to or returned from the function.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Datum {
    #[default]
    Null,
    Int(i64),
    Float(f64),
}

impl Datum {
    #[must_use]
    pub fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of a non-null value.
    #[must_use]
    pub fn data_type(self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Int(_) => Some(DataType::Int),
            Self::Float(_) => Some(DataType::Float),
        }
    }

    /// Returns the value as a float, widening integers.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Null => None,
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => Some(value as f64),
            Self::Float(value) => Some(value),
        }
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Declared shape of a scalar function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub arguments: Vec<DataType>,
    pub returns: DataType,
    /// Whether a null argument short-circuits to a null result.
    pub strict: bool,
}

/// Renders the declaration, e.g.
/// `WindPower(int, double precision, double precision, double precision) RETURNS double precision STRICT`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ") RETURNS {}", self.returns)?;
        if self.strict {
            f.write_str(" STRICT")?;
        }
        Ok(())
    }
}
