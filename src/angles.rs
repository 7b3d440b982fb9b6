//! Sun position after Grena, "Five new algorithms for the computation of sun position from
//! 2010 to 2110", Solar Energy 86 (2012).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chrono::{Datelike, Timelike};

use crate::time::{continuous_time, from_unix_seconds};
use crate::types::{AnglePair, AtmosphericConditions, Location, SolarPosition};

pub const ORBITAL_RATE: f64 = 0.0172019715;
pub const ROTATION_RATE: f64 = 6.300388099;
pub const SECONDS_TO_DAYS: f64 = 1.1574e-5;
pub const ZERO_CELSIUS_K: f64 = 273.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_positive(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

pub fn delta_t(year: f64) -> f64 {
    96.4 + 0.567 * (year - 2061.0)
}

/// Refraction lift in radians for an uncorrected elevation in radians.
pub fn refraction_correction(elevation: f64, atm: &AtmosphericConditions) -> f64 {
    (0.08422 * atm.pressure)
        / ((ZERO_CELSIUS_K + atm.temperature) * (elevation + 0.003138 / (elevation + 0.08919)).tan())
}

pub fn solar_position<T: Datelike + Timelike>(
    location: Location,
    ts: &T,
    atm: &AtmosphericConditions,
) -> SolarPosition {
    let t = continuous_time(ts);
    let lat_rad = deg_to_rad(location.latitude);
    let lon_rad = deg_to_rad(location.longitude);

    let te = t + SECONDS_TO_DAYS * delta_t(ts.year() as f64);
    let wte = ORBITAL_RATE * te;

    let lambda = -1.388803
        + 1.720279216e-2 * te
        + 3.3366e-2 * (wte - 0.06172).sin()
        + 3.53e-4 * (2.0 * wte - 0.1163).sin();
    let epsilon = 4.089567e-1 - 6.19e-9 * te;

    let sl = lambda.sin();
    let cl = lambda.cos();
    let se = epsilon.sin();
    let ce = (1.0 - se * se).sqrt();

    let right_ascension = normalize_positive((sl * ce).atan2(cl));

    // fmod, shift back by π, then lift negatives.
    let hour_angle = normalize_positive(
        ((1.7528311 + ROTATION_RATE * t + lon_rad - right_ascension + PI) % TAU) - PI,
    );

    let sp = lat_rad.sin();
    let cp = (1.0 - sp * sp).sqrt();
    let sd = sl * se;
    let cd = (1.0 - sd * sd).sqrt();
    let sh = hour_angle.sin();
    let ch = hour_angle.cos();

    let cos_zenith = sp * sd + cp * cd * ch;
    let elevation = cos_zenith.asin() - 4.26e-5 * (1.0 - cos_zenith * cos_zenith).sqrt();
    let refraction = refraction_correction(elevation, atm);

    SolarPosition {
        time: t,
        corrected_time: te,
        ecliptic_longitude: lambda,
        obliquity: epsilon,
        right_ascension,
        declination: sd.asin(),
        hour_angle,
        zenith: rad_to_deg(FRAC_PI_2 - elevation - refraction),
        azimuth: rad_to_deg(PI + sh.atan2(ch * sp - sd * cp / cd)),
    }
}

pub fn solar_angles<T: Datelike + Timelike>(longitude: f64, latitude: f64, ts: &T) -> AnglePair {
    solar_position(
        Location::new(longitude, latitude),
        ts,
        &AtmosphericConditions::default(),
    )
    .angles()
}

pub fn compute_solar_angles<T: Datelike + Timelike>(
    longitude: f64,
    latitude: f64,
    timestamps: &[T],
) -> Vec<AnglePair> {
    compute_solar_angles_with(
        Location::new(longitude, latitude),
        timestamps,
        &AtmosphericConditions::default(),
    )
}

pub fn compute_solar_angles_with<T: Datelike + Timelike>(
    location: Location,
    timestamps: &[T],
    atm: &AtmosphericConditions,
) -> Vec<AnglePair> {
    timestamps
        .iter()
        .map(|ts| solar_position(location, ts, atm).angles())
        .collect()
}

pub fn solar_angles_at_unix(longitude: f64, latitude: f64, secs: i64) -> Option<AnglePair> {
    let ts = from_unix_seconds(secs)?;
    Some(solar_angles(longitude, latitude, &ts))
}
