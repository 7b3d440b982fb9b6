#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const STANDARD_PRESSURE_ATM: f64 = 1.0;
pub const STANDARD_TEMPERATURE_C: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// `saa` is measured clockwise from north (180° = due south) and is not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnglePair {
    pub sza: f64,
    pub saa: f64,
}

impl AnglePair {
    pub fn elevation(&self) -> f64 {
        90.0 - self.sza
    }

    pub fn is_daylight(&self) -> bool {
        self.sza < 90.0
    }

    pub fn normalized_azimuth(&self) -> f64 {
        self.saa.rem_euclid(360.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtmosphericConditions {
    pub pressure: f64,
    pub temperature: f64,
}

impl AtmosphericConditions {
    pub fn new(pressure: f64, temperature: f64) -> Self {
        Self {
            pressure,
            temperature,
        }
    }
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self {
            pressure: STANDARD_PRESSURE_ATM,
            temperature: STANDARD_TEMPERATURE_C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarPosition {
    pub time: f64,
    pub corrected_time: f64,
    pub ecliptic_longitude: f64,
    pub obliquity: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub azimuth: f64,
}

impl SolarPosition {
    pub fn angles(&self) -> AnglePair {
        AnglePair {
            sza: self.zenith,
            saa: self.azimuth,
        }
    }
}
