#![allow(dead_code)]

use chrono::NaiveDate;
use filelog::Clock;
use std::path::Path;

pub const BANNER: &str = "Application log file\nLog start at: 2024-01-01\n";
pub const TIMESTAMP: &str = "2024-01-01.12:00:00";

/// Всегда 2024-01-01 12:00:00.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self, format: &str) -> String {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date")
            .format(format)
            .to_string()
    }
}

pub fn line(label: &str, message: &str) -> String {
    format!("{}:\t{}\t{}\n", TIMESTAMP, label, message)
}

pub fn path_in(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().expect("utf-8 temp path").to_owned()
}

pub fn read(path: &str) -> String {
    std::fs::read_to_string(path).expect("log file readable")
}
