#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `utc_clock`.
//!
//! Reads the current UTC date and time once and prints the fields along with
//! the nested `[[year, month, day], [hour, minute, second]]` representation.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let now = utc_clock::now();
    let (date, time) = now;
    log::debug!("Sampled {now:?}");

    println!("UTC Clock - Basic Usage Example\n");
    println!("Date:   year={} month={} day={}", date.year(), date.month(), date.day());
    println!(
        "Time:   hour={} minute={} second={}",
        time.hour(),
        time.minute(),
        time.second()
    );
    println!("Days in this month: {}", date.days_in_month());
    println!("Nested: {}", serde_json::to_string(&now)?);

    Ok(())
}
