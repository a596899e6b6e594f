//! # filelog
//!
//! Файловый логгер с ротацией по размеру. Строки вида
//! `<дата.время>:\t<УРОВЕНЬ>:\t<сообщение>` дописываются в файл; когда файл
//! дорастает до порога, логгер открывает следующий (`app.log` → `app.log1`
//! → `app.log2` ...). Ошибки самого логгера уходят в stderr и, по желанию,
//! в системный журнал, а запись после сбоя молча отбрасывается.

mod clock;
mod diag;
mod error;
mod level;
mod logger;
mod naming;
pub mod os_error;

pub use clock::{Clock, LocalClock, DATE_FORMAT, TIMESTAMP_FORMAT};
pub use error::LogError;
pub use level::Severity;
pub use logger::{RotatingFileLogger, DEFAULT_MAX_SIZE};
pub use naming::{current_executable_name, generate_log_file_name, next_file_name};

use once_cell::sync::Lazy;

// ===== Макросы =====

#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        $logger.log($level, std::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Severity::Info, std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Severity::Warning, std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Severity::Error, std::format_args!($($arg)*));
    }};
}

// ===== Глобальные макросы =====

#[macro_export]
macro_rules! glog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::GLOBAL_LOGGER.log($level, std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! ginfo {
    ($($arg:tt)*) => {{
        $crate::GLOBAL_LOGGER.log($crate::Severity::Info, std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! gwarning {
    ($($arg:tt)*) => {{
        $crate::GLOBAL_LOGGER.log($crate::Severity::Warning, std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! gerror {
    ($($arg:tt)*) => {{
        $crate::GLOBAL_LOGGER.log($crate::Severity::Error, std::format_args!($($arg)*));
    }};
}

// ===== Глобальный логгер =====

/// Логгер процесса: `<YYYY-MM-DD>_<exe>.log` в текущем каталоге.
/// Закрыт, пока не вызван [`init_global_logger`]. Статики не дропаются,
/// поэтому `LOG END.` пишет только [`shutdown_global_logger`].
pub static GLOBAL_LOGGER: Lazy<RotatingFileLogger> =
    Lazy::new(|| RotatingFileLogger::new(generate_log_file_name(&LocalClock)));

pub fn init_global_logger() -> bool {
    GLOBAL_LOGGER.init()
}

pub fn shutdown_global_logger() {
    GLOBAL_LOGGER.shutdown();
}
