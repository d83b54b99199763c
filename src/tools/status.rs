//! Macro Tracker Status Tool
//!
//! Provides runtime status information about the tracker service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage instructions for AI assistants
pub const TRACKER_INSTRUCTIONS: &str = r#"
# Macro Tracker Instructions

The tracker keeps one in-memory session: a profile, a food log, a macro split
and a calorie threshold. Nothing is saved when the server stops.

## 1. Calorie Threshold

1. Call `set_profile` with weight (kg), height (cm), age (years) and activity.
2. Call `calculate_threshold`.

Activity accepts a multiplier or a label:

| Multiplier | Label |
|------------|-------|
| 1.2 | Sedentary |
| 1.375 | Lightly Active |
| 1.55 | Moderately Active |
| 1.725 | Very Active |

Estimate: `(10*weight + 6.25*height - 5*age + 5) * activity`, rounded.

If weight, height or age is missing, `calculate_threshold` reports that no
estimate is available and keeps the previous threshold.

## 2. Food Log

- `list_foods` shows the catalog with per-serving nutrition.
- `add_food` logs one serving. The name must match a catalog entry exactly.
- `remove_food` removes by index (indices shift after a removal, so call
  `get_food_log` again before removing another entry).
- `clear_food_log` empties the log.
- `get_totals` returns protein/carbs/fat/calories and Over/Under once a
  threshold exists.

## 3. Macro Targets

- `set_macro_split` takes protein, carbs and fat percentages. They must total
  exactly 100; the default is 30/40/30.
- `get_targets` returns daily grams (protein and carbs at 4 kcal/g, fat at
  9 kcal/g), or the reason targets are unavailable.

`get_summary` returns everything at once.
"#;

/// Runtime status of the tracker service
#[derive(Debug, Clone, Serialize)]
pub struct TrackerStatus {
    pub name: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub catalog_source: String,
    pub catalog_size: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    catalog_source: String,
    catalog_size: usize,
}

impl StatusTracker {
    pub fn new(catalog_source: String, catalog_size: usize) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            catalog_source,
            catalog_size,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> TrackerStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        TrackerStatus {
            name: NAME,
            version: VERSION,
            catalog_source: self.catalog_source.clone(),
            catalog_size: self.catalog_size,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
