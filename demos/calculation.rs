use chrono::{TimeDelta, TimeZone, Utc};
use chrono_tz::America::Chicago;

use grena_sun::angles::{compute_solar_angles, solar_position};
use grena_sun::time::time_range;
use grena_sun::types::{AtmosphericConditions, Location};

fn main() {
    let latitude = 39.8;
    let longitude = -89.6;

    let local = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let dt = local.with_timezone(&Utc);

    let pos = solar_position(
        Location::new(longitude, latitude),
        &dt,
        &AtmosphericConditions::default(),
    );

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        latitude, -longitude
    );
    println!("Date/Time: {} ({})", local, dt);
    println!();
    println!("--- Solar Position ---");
    println!("Continuous time: {:.4} days", pos.time);
    println!("Declination: {:.2}°", pos.declination.to_degrees());
    println!("Right ascension: {:.2}°", pos.right_ascension.to_degrees());
    println!("Hour Angle: {:.2}°", pos.hour_angle.to_degrees());
    println!("Zenith Angle: {:.2}°", pos.zenith);
    println!("Elevation: {:.2}°", pos.angles().elevation());
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!();

    println!("--- Hourly, UTC ---");
    let start = dt.date_naive().and_hms_opt(0, 0, 0).unwrap();
    let series = time_range(start, TimeDelta::hours(1), 24).unwrap();
    let angles = compute_solar_angles(longitude, latitude, &series);
    for (ts, a) in series.iter().zip(&angles) {
        let marker = if a.is_daylight() { "day" } else { "night" };
        println!(
            "{}  SZA {:7.2}°  SAA {:7.2}°  {}",
            ts.format("%H:%M"),
            a.sza,
            a.normalized_azimuth(),
            marker
        );
    }
}
