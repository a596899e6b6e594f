// example_advanced — многопоточный пример с "классом" Worker
// Каждый поток — экземпляр структуры Worker, которой передаётся клон логгера

use filelog::{error, info, warning, RotatingFileLogger};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const APP_NAME: &str = "example_advanced";
const APP_VERSION: &str = "1.1.0";

// Структура, моделирующая "класс" потока
pub struct Worker {
    id: u32,
    log: Arc<RotatingFileLogger>, // Потокобезопасная обёртка над логгером
}

impl Worker {
    pub fn new(id: u32, log: Arc<RotatingFileLogger>) -> Self {
        Self { id, log }
    }

    pub fn run(&self) {
        info!(self.log, "Worker {} started execution", self.id);

        // Имитация работы
        thread::sleep(Duration::from_millis(50 + (self.id as u64) * 100));

        if self.id % 2 == 1 {
            warning!(self.log, "Worker {} detected odd workload", self.id);
        }

        // Имитация ошибки у одного из воркеров
        if self.id == 2 {
            error!(self.log, "Worker {} encountered a transient error", self.id);
        }

        info!(self.log, "Worker {} finished", self.id);
    }
}

fn main() {
    // 1. Инициализация
    let file_logger = RotatingFileLogger::new(filelog::generate_log_file_name(&filelog::LocalClock))
        .with_system_log(APP_NAME);
    if !file_logger.init() {
        eprintln!("[FATAL] Cannot open log file. Exiting.");
        std::process::exit(1);
    }

    // Оборачиваем логгер в Arc, чтобы безопасно клонировать между потоками
    let shared_logger = Arc::new(file_logger);

    info!(shared_logger, "Starting {} v{}", APP_NAME, APP_VERSION);
    info!(shared_logger, "Main thread initialized, spawning workers...");

    // 2. Основной код: создание потоков с объектами Worker
    let mut handles = vec![];

    for i in 0..4 {
        let logger_clone = Arc::clone(&shared_logger); // Клонируем Arc

        let handle = thread::spawn(move || {
            let worker = Worker::new(i, logger_clone);
            worker.run();
        });

        handles.push(handle);
    }

    // Ожидание завершения всех потоков
    for h in handles {
        let _ = h.join();
    }

    // 3. Финальная часть: явное завершение, не дожидаясь drop
    info!(shared_logger, "All workers have finished");
    shared_logger.shutdown();
}
