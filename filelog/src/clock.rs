use chrono::Local;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d.%H:%M:%S";

/// Источник текущего времени, уже отформатированного по шаблону strftime.
pub trait Clock: Send + Sync {
    fn now(&self, format: &str) -> String;
}

/// Локальное время системы.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self, format: &str) -> String {
        Local::now().format(format).to_string()
    }
}
