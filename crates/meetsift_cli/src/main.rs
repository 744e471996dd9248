//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `meetsift_core` linkage and that the demo dataset loads.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Logging is enabled only when `MEETSIFT_LOG_DIR` is set; the level comes
//! from `MEETSIFT_LOG_LEVEL` or the build default.

use meetsift_core::{MeetingService, RelevanceScore, DEFAULT_UPCOMING_LIMIT};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("MEETSIFT_LOG_DIR") {
        let level = std::env::var("MEETSIFT_LOG_LEVEL")
            .unwrap_or_else(|_| meetsift_core::default_log_level().to_string());
        if let Err(err) = meetsift_core::init_logging(&level, &log_dir) {
            eprintln!("meetsift logging disabled: {err}");
        }
    }

    println!("meetsift_core ping={}", meetsift_core::ping());
    println!("meetsift_core version={}", meetsift_core::core_version());

    let service = match MeetingService::with_demo_data() {
        Ok(service) => service,
        Err(err) => {
            log::error!("event=cli_seed module=cli status=error");
            eprintln!("meetsift seed failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = service.stats();
    println!(
        "stats total={} accepted={} declined={} pending={} time_saved_hours={}",
        stats.total, stats.accepted, stats.declined, stats.pending, stats.time_saved_hours
    );

    let groups = service.grouped_by_relevance();
    for score in RelevanceScore::ALL {
        println!("tier {}={}", score.as_str(), groups.get(score).len());
    }

    for meeting in service.upcoming(DEFAULT_UPCOMING_LIMIT) {
        println!(
            "upcoming id={} at={} status={}",
            meeting.id,
            meeting.date_time.to_rfc3339(),
            meeting.status().as_str()
        );
    }

    ExitCode::SUCCESS
}
