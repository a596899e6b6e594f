//! example_rotation — демонстрация ротации логов по размеру

use filelog::{error, info, warning, RotatingFileLogger, DEFAULT_MAX_SIZE};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const APP_NAME: &str = "example_rotation";
const APP_VERSION: &str = "1.0.0";

fn main() {
    // Порог по умолчанию — 1 КБ, ротация сработает быстро
    let file_logger = RotatingFileLogger::new("rotation.log").with_system_log(APP_NAME);
    if !file_logger.init() {
        eprintln!("[FATAL] Cannot open log file. Exiting.");
        std::process::exit(1);
    }

    let file_logger = Arc::new(file_logger);

    info!(file_logger, "Starting {} v{}", APP_NAME, APP_VERSION);
    info!(file_logger, "Logger initialized with max_size={} bytes", DEFAULT_MAX_SIZE);

    // Генерируем много логов
    for i in 0..60 {
        info!(file_logger, "This is an info message number {}", i);
        if i % 30 == 0 {
            warning!(file_logger, "Warning message at iteration {}", i);
        }
        if i % 35 == 0 {
            error!(file_logger, "Error message at iteration {}", i);
        }

        // Делаем паузу, чтобы видеть процесс
        thread::sleep(Duration::from_millis(10));
    }

    info!(file_logger, "Log generation completed");
    println!("Current log file: {}", file_logger.file_name());
}
