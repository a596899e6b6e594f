// example_error_init — пример с ошибкой инициализации:
// логгер остаётся закрытым, записи молча отбрасываются

use filelog::{error, info, os_error, RotatingFileLogger};

const APP_NAME: &str = "example_error_init";

fn main() {
    // Несуществующий каталог
    let log_path = "/nonexistent/forbidden/error.log";
    let file_logger = RotatingFileLogger::new(log_path).with_system_log(APP_NAME);

    // try_init возвращает ошибку вместо отчёта в stderr
    if let Err(e) = file_logger.try_init() {
        eprintln!("[{}] init failed: {} ({})", APP_NAME, e, e.os_message());
    }

    // Логгер закрыт — это не падение, а потеря сообщений
    info!(file_logger, "This will not be logged");
    error!(file_logger, "Neither will this");

    println!(
        "is_open = {}, last OS error = {:?}",
        file_logger.is_open(),
        os_error::last_os_error()
    );
}
