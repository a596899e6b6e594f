//! Канал диагностики: ошибки самого логгера.
//! В файл лога их писать нельзя — он может быть недоступен, поэтому stderr
//! и, по желанию, системный журнал.

use crate::error::LogError;
use crate::level::Severity;

#[cfg(target_os = "linux")]
use std::sync::{Mutex, PoisonError};

// ===== Системные логгеры (платформозависимо) =====

#[cfg(target_os = "linux")]
type SystemLogger = Mutex<syslog::Logger<syslog::LoggerBackend, syslog::Formatter3164>>;

#[cfg(target_os = "windows")]
type SystemLogger = winlog_rs::EventSink;

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
type SystemLogger = std::convert::Infallible;

#[derive(Default)]
pub(crate) struct Diagnostics {
    system_logger: Option<SystemLogger>,
}

impl Diagnostics {
    pub(crate) fn with_system_log(app_name: &str) -> Self {
        Diagnostics {
            system_logger: connect_system_logger(app_name),
        }
    }

    pub(crate) fn report_error(&self, err: &LogError) {
        self.report(Severity::Error, &format!("{}! {}", err, err.os_message()));
    }

    pub(crate) fn report(&self, level: Severity, msg: &str) {
        eprintln!("{}", msg);
        if let Some(ref logger) = self.system_logger {
            log_to_system(logger, level, msg);
        }
    }
}

#[cfg(target_os = "linux")]
fn connect_system_logger(app_name: &str) -> Option<SystemLogger> {
    let formatter = syslog::Formatter3164 {
        facility: syslog::Facility::LOG_USER,
        hostname: None,
        process: app_name.to_owned(),
        pid: std::process::id(),
    };
    // Нет syslog — остаёмся только на stderr
    syslog::unix(formatter).ok().map(Mutex::new)
}

#[cfg(target_os = "windows")]
fn connect_system_logger(app_name: &str) -> Option<SystemLogger> {
    Some(winlog_rs::EventSink::new(app_name))
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn connect_system_logger(_app_name: &str) -> Option<SystemLogger> {
    None
}

#[cfg(target_os = "linux")]
fn log_to_system(logger: &SystemLogger, level: Severity, msg: &str) {
    let mut logger = logger.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = match level {
        Severity::Info => logger.info(msg),
        Severity::Warning => logger.warning(msg),
        Severity::Error => logger.err(msg),
    };
}

#[cfg(target_os = "windows")]
fn log_to_system(logger: &SystemLogger, level: Severity, msg: &str) {
    let kind = match level {
        Severity::Error => winlog_rs::EventKind::Error,
        Severity::Info | Severity::Warning => winlog_rs::EventKind::Warning,
    };
    let _ = logger.report(kind, msg);
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn log_to_system(logger: &SystemLogger, _level: Severity, _msg: &str) {
    match *logger {}
}
