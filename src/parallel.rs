use chrono::{Datelike, Timelike};
use rayon::prelude::*;

use crate::angles::solar_position;
use crate::types::{AnglePair, AtmosphericConditions, Location};

/// Same result as `compute_solar_angles`, spread over the rayon pool.
pub fn par_compute_solar_angles<T>(longitude: f64, latitude: f64, timestamps: &[T]) -> Vec<AnglePair>
where
    T: Datelike + Timelike + Sync,
{
    par_compute_solar_angles_with(
        Location::new(longitude, latitude),
        timestamps,
        &AtmosphericConditions::default(),
    )
}

pub fn par_compute_solar_angles_with<T>(
    location: Location,
    timestamps: &[T],
    atm: &AtmosphericConditions,
) -> Vec<AnglePair>
where
    T: Datelike + Timelike + Sync,
{
    timestamps
        .par_iter()
        .map(|ts| solar_position(location, ts, atm).angles())
        .collect()
}
