//! Error type shared by the formatting, parsing and unit helpers.
//!
//! The editing operations on [`NumericEditor`](crate::NumericEditor) never surface these;
//! they recover locally. The errors exist for the fallible building blocks underneath.

use thiserror::Error;

use crate::measurement_units::Unit;

/// Errors produced by number formatting, parsing and unit conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    /// The text does not start with a number.
    #[error("cannot parse {input:?} as a number")]
    Unparseable { input: String },

    /// NaN and infinities have no formatted representation.
    #[error("cannot format non-finite value {value}")]
    NonFinite { value: f64 },

    /// No unit matches the given name or symbol.
    #[error("unknown measurement unit {name:?}{}", did_you_mean(.suggestion))]
    UnknownUnit {
        name: String,
        suggestion: Option<&'static str>,
    },

    /// The units measure different dimensions.
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    IncompatibleUnits { from: Unit, to: Unit },

    /// A unit change was requested on an editor that has no unit.
    #[error("editor has no measurement unit to convert from")]
    NoUnit,
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean {name:?}?)"),
        None => String::new(),
    }
}
