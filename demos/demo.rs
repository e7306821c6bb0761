#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use tinytime::{new_time_provider, TimeProvider};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tp = new_time_provider();

    // Current time
    let now = tp.now();
    println!("Now (ns): {}", now);
    println!("Date: {}", tp.format_date(now));
    println!("Time: {}", tp.format_time(now));
    println!("Datetime: {}", tp.format_date_time(now));
    println!("Datetime (short): {}", tp.format_date_time_short(now));

    // Any input kind that coerces to an instant
    println!("From f64: {}", tp.format_date_time(now as f64));
    println!("From string: {}", tp.format_date_time(now.to_string()));
    println!("Unsupported: {:?}", tp.format_date_time("not a time"));

    // Minutes of day format without seconds
    println!("510 minutes: {}", tp.format_time(510i16));

    // Strict parsing
    for date in ["2024-02-29", "2024-02-30", "2023-02-29"] {
        match tp.parse_date(date) {
            Ok(nanos) => println!("{} -> {}", date, nanos),
            Err(err) => println!("{} -> error: {}", date, err),
        }
    }
    println!("08:30:45 -> {:?} minutes", tp.parse_time("08:30:45"));
    println!("25:00 -> {:?}", tp.parse_time("25:00"));

    // Relative time
    let week_ago = now - 7 * 86_400 * 1_000_000_000;
    println!("Week ago is past: {}", tp.is_past(week_ago));
    println!("Week ago is today: {}", tp.is_today(week_ago));
    println!("Days since a week ago: {}", tp.days_between(week_ago, now));

    // Legacy helpers
    println!("Unix seconds: {}", tp.unix_seconds_to_date(1_735_689_600));

    // Deferred callback
    #[cfg(not(target_arch = "wasm32"))]
    {
        let timer = tp.after_func(50, || println!("Timer fired"));
        std::thread::sleep(Duration::from_millis(100));
        println!("Stopped after firing: {}", timer.stop());
    }
}
