//! Example: feeding the dashboard via a channel
//!
//! Demonstrates how to integrate vitalwatch into your own application by
//! sending snapshots through a channel.
//!
//! This is useful when you want to:
//! - Bridge snapshots from a device sync agent or network feed
//! - Generate synthetic data for testing
//!
//! # Usage
//!
//! ```bash
//! cargo run --example channel_source
//! ```

use std::thread;
use std::time::Duration;

use vitalwatch::{present, ChannelSource, Dashboard, HealthSnapshot, MetricSource, Status};

fn main() {
    println!("Channel source example");
    println!("Generating synthetic vitals data...\n");

    // Create a channel source - this returns both a sender and the source
    let (tx, mut source) = ChannelSource::create("synthetic-data");

    // Spawn a thread that publishes a snapshot every second with a slowly
    // climbing strain score
    thread::spawn(move || {
        let mut tick = 0u64;

        loop {
            let strain = (30 + tick * 2).min(95) as f64;
            let snapshot = HealthSnapshot::builder()
                .sleep_score(75.0)
                .recovery_score(60.0)
                .strain_score(strain)
                .strain_target_range(50.0, 60.0)
                .time_asleep_minutes(472.0, Status::LowerThanNormal)
                .time_in_bed_minutes(482.0, Status::HigherThanNormal)
                .resting_heart_rate(59.0, Status::LowerThanNormal)
                .heart_rate_variability(85.0, Status::HigherThanNormal)
                .exercise_minutes(75.0 + tick as f64, Status::HigherThanNormal)
                .calories_burned(654.0, Status::LowerThanNormal)
                .build()
                .expect("synthetic snapshot values are valid");

            if tx.send(snapshot).is_err() {
                break; // Receiver dropped
            }

            tick += 1;
            thread::sleep(Duration::from_secs(1));
        }
    });

    // Poll the source in the main thread
    println!("Receiving snapshots (press Ctrl+C to stop):\n");

    loop {
        if let Some(snapshot) = source.poll() {
            println!("Received snapshot:");
            for dashboard in Dashboard::all() {
                let model = present(&snapshot, dashboard);
                print!("  {}: {}% {}", dashboard.label(), model.score as u64, model.heading);
                for row in &model.rows {
                    print!("  |  {} {} ({:?})", row.title, row.value, row.direction);
                }
                println!();
            }
            println!();
        }

        thread::sleep(Duration::from_millis(100));
    }
}
