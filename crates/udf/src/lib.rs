//! A host-agnostic scalar function wrapper around the windpower model.
//!
//! Query engines call user-defined functions positionally, with dynamically
//! typed and possibly null arguments. [`WindPowerUdf`] reproduces the calling
//! convention of the `WindPower(int, double precision, double precision,
//! double precision)` function:
//!
//! - exactly four arguments: wind class, mean wind speed (m/s), hub height
//!   above sea level (m), and temperature (K);
//! - `STRICT` null handling, so any null argument yields a null result;
//! - integers are accepted where floats are expected, but not the other way
//!   around.
//!
//! The function can be built from a TOML [`UdfConfig`] that names it and
//! selects which curve set it evaluates.

mod config;
mod datum;
mod error;
mod function;

pub use config::{CurveSet, UdfConfig};
pub use datum::{DataType, Datum, Signature};
pub use error::UdfError;
pub use function::{BatchOutput, Columns, WindPowerUdf};
