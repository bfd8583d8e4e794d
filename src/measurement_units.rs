//! Measurement units, conversions between them, and the per-unit display precision.

use bevy::platform::collections::HashMap;
use core::f64::consts::PI;
use core::fmt;

use crate::error::NumericError;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

const CELSIUS_OFFSET: f64 = 273.15;

/// Physical dimension measured by a [`Unit`]. Only units of the same dimension convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Temperature,
    Length,
    Angle,
    Pressure,
    Speed,
}

/// A measurement unit an editor value can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Mile,
    Degree,
    Radian,
    Pascal,
    Hectopascal,
    Bar,
    Psi,
    MetersPerSecond,
    KilometersPerHour,
    Knot,
}

impl Unit {
    pub const ALL: [Unit; 19] = [
        Unit::Kelvin,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Kilometer,
        Unit::Inch,
        Unit::Foot,
        Unit::Mile,
        Unit::Degree,
        Unit::Radian,
        Unit::Pascal,
        Unit::Hectopascal,
        Unit::Bar,
        Unit::Psi,
        Unit::MetersPerSecond,
        Unit::KilometersPerHour,
        Unit::Knot,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Kelvin | Unit::Celsius | Unit::Fahrenheit => Dimension::Temperature,
            Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter
            | Unit::Kilometer
            | Unit::Inch
            | Unit::Foot
            | Unit::Mile => Dimension::Length,
            Unit::Degree | Unit::Radian => Dimension::Angle,
            Unit::Pascal | Unit::Hectopascal | Unit::Bar | Unit::Psi => Dimension::Pressure,
            Unit::MetersPerSecond | Unit::KilometersPerHour | Unit::Knot => Dimension::Speed,
        }
    }

    /// Lower-case English name, also accepted by [`Unit::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Unit::Kelvin => "kelvin",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Millimeter => "millimeter",
            Unit::Centimeter => "centimeter",
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Inch => "inch",
            Unit::Foot => "foot",
            Unit::Mile => "mile",
            Unit::Degree => "degree",
            Unit::Radian => "radian",
            Unit::Pascal => "pascal",
            Unit::Hectopascal => "hectopascal",
            Unit::Bar => "bar",
            Unit::Psi => "psi",
            Unit::MetersPerSecond => "meters per second",
            Unit::KilometersPerHour => "kilometers per hour",
            Unit::Knot => "knot",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Kelvin => "K",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Mile => "mi",
            Unit::Degree => "°",
            Unit::Radian => "rad",
            Unit::Pascal => "Pa",
            Unit::Hectopascal => "hPa",
            Unit::Bar => "bar",
            Unit::Psi => "psi",
            Unit::MetersPerSecond => "m/s",
            Unit::KilometersPerHour => "km/h",
            Unit::Knot => "kn",
        }
    }

    /// Suffix appended to formatted values. Degrees sit flush against the number.
    pub fn presentation(self) -> String {
        match self {
            Unit::Degree => self.symbol().to_string(),
            _ => format!(" {}", self.symbol()),
        }
    }

    /// Converts `value` from `self` into `to`.
    pub fn convert(self, value: f64, to: Unit) -> Result<f64, NumericError> {
        if self.dimension() != to.dimension() {
            return Err(NumericError::IncompatibleUnits { from: self, to });
        }
        if self == to {
            return Ok(value);
        }
        Ok(to.value_from_base(self.value_in_base(value)))
    }

    /// Looks a unit up by name or symbol, ignoring case.
    pub fn from_name(name: &str) -> Result<Unit, NumericError> {
        let wanted = name.trim().to_lowercase();
        if let Some(unit) = Unit::ALL.iter().copied().find(|unit| {
            unit.name() == wanted || unit.symbol().to_lowercase() == wanted
        }) {
            return Ok(unit);
        }

        let suggestion = Unit::ALL
            .iter()
            .map(|unit| (unit.name(), strsim::jaro_winkler(&wanted, unit.name())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name);

        Err(NumericError::UnknownUnit {
            name: name.to_string(),
            suggestion,
        })
    }

    // Base units: kelvin, meter, degree, pascal, meters per second.
    fn value_in_base(self, value: f64) -> f64 {
        match self {
            Unit::Celsius => value + CELSIUS_OFFSET,
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + CELSIUS_OFFSET,
            Unit::Radian => value * 180.0 / PI,
            _ => value * self.linear_factor(),
        }
    }

    fn value_from_base(self, value: f64) -> f64 {
        match self {
            Unit::Celsius => value - CELSIUS_OFFSET,
            Unit::Fahrenheit => (value - CELSIUS_OFFSET) * 9.0 / 5.0 + 32.0,
            Unit::Radian => value * PI / 180.0,
            _ => value / self.linear_factor(),
        }
    }

    fn linear_factor(self) -> f64 {
        match self {
            Unit::Millimeter => 0.001,
            Unit::Centimeter => 0.01,
            Unit::Kilometer => 1000.0,
            Unit::Inch => 0.0254,
            Unit::Foot => 0.3048,
            Unit::Mile => 1609.344,
            Unit::Hectopascal => 100.0,
            Unit::Bar => 100_000.0,
            Unit::Psi => 6894.757_293_168,
            Unit::KilometersPerHour => 1.0 / 3.6,
            Unit::Knot => 1852.0 / 3600.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum display fraction digits per unit.
#[derive(Clone, Debug)]
pub struct PrecisionTable {
    digits: HashMap<Unit, u8>,
}

impl Default for PrecisionTable {
    fn default() -> Self {
        Self::empty()
            .with(Unit::Kelvin, 1)
            .with(Unit::Celsius, 1)
            .with(Unit::Fahrenheit, 1)
            .with(Unit::Millimeter, 1)
            .with(Unit::Centimeter, 2)
            .with(Unit::Meter, 3)
            .with(Unit::Kilometer, 3)
            .with(Unit::Inch, 2)
            .with(Unit::Foot, 2)
            .with(Unit::Mile, 3)
            .with(Unit::Degree, 1)
            .with(Unit::Radian, 4)
            .with(Unit::Pascal, 0)
            .with(Unit::Hectopascal, 1)
            .with(Unit::Bar, 3)
            .with(Unit::Psi, 2)
            .with(Unit::MetersPerSecond, 2)
            .with(Unit::KilometersPerHour, 1)
            .with(Unit::Knot, 1)
    }
}

impl PrecisionTable {
    pub fn empty() -> Self {
        Self {
            digits: HashMap::default(),
        }
    }

    /// Sets the digits for `unit`, replacing any previous entry.
    pub fn with(mut self, unit: Unit, max_fraction_digits: u8) -> Self {
        self.digits.insert(unit, max_fraction_digits);
        self
    }

    pub fn max_fraction_digits(&self, unit: Unit) -> Option<u8> {
        self.digits.get(&unit).copied()
    }
}
