// example_simple — простой пример: инициализация, логи в файл, завершение

use filelog::{error, info, warning, RotatingFileLogger};

const APP_NAME: &str = "example_simple";
const APP_VERSION: &str = "1.0.0";

fn main() {
    // 1. Инициализация: открываем файловый лог, ошибки дублируем в системный журнал
    let logger = RotatingFileLogger::new("logs_simple.log").with_system_log(APP_NAME);
    if !logger.init() {
        eprintln!("[FATAL] Cannot open log file. Exiting.");
        std::process::exit(1);
    }

    info!(logger, "Starting {} v{}", APP_NAME, APP_VERSION);

    // 2. Основной код
    info!(logger, "Processing data block #1");
    warning!(logger, "Non-critical issue detected");
    error!(logger, "An error occurred, but we continue");
    info!(logger, "Processing data block #2");

    // 3. Финальная часть: LOG END. пишется при drop
    info!(logger, "Application finished successfully");
}
