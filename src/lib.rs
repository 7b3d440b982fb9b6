pub mod angles;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod time;
pub mod types;

pub use angles::{
    compute_solar_angles, compute_solar_angles_with, deg_to_rad, delta_t, normalize_positive,
    rad_to_deg, refraction_correction, solar_angles, solar_angles_at_unix, solar_position,
    ORBITAL_RATE, ROTATION_RATE, SECONDS_TO_DAYS, ZERO_CELSIUS_K,
};

#[cfg(feature = "parallel")]
pub use parallel::{par_compute_solar_angles, par_compute_solar_angles_with};

pub use time::{continuous_time, from_unix_seconds, hour_fraction, time_range};

pub use types::{
    AnglePair, AtmosphericConditions, Location, SolarPosition, STANDARD_PRESSURE_ATM,
    STANDARD_TEMPERATURE_C,
};
