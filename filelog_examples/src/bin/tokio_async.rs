// example_tokio — асинхронный пример с tokio и shared RotatingFileLogger
// Запись синхронная и короткая, поэтому её можно вызывать прямо из задач

use filelog::{error, info, warning, RotatingFileLogger};
use std::sync::Arc;
use tokio::task;
use tokio::time::{sleep, Duration};

const APP_NAME: &str = "example_tokio";
const APP_VERSION: &str = "1.0.0";

// Асинхронный "воркер"
pub struct Worker {
    id: u32,
    log: Arc<RotatingFileLogger>,
}

impl Worker {
    pub fn new(id: u32, log: Arc<RotatingFileLogger>) -> Self {
        Self { id, log }
    }

    pub async fn run(&self) {
        info!(self.log, "Worker {} started (async)", self.id);

        // Имитация асинхронной работы
        sleep(Duration::from_millis(50 + (self.id as u64) * 100)).await;

        if self.id % 3 == 0 {
            warning!(self.log, "Worker {} has high priority task", self.id);
        }

        if self.id == 2 {
            error!(self.log, "Worker {} failed to process data", self.id);
        }

        info!(self.log, "Worker {} completed", self.id);
    }
}

#[tokio::main]
async fn main() {
    // 1. Инициализация: файловый лог
    let file_logger = RotatingFileLogger::new("tokio.log").with_system_log(APP_NAME);
    if !file_logger.init() {
        eprintln!("[FATAL] Cannot open log file. Exiting.");
        std::process::exit(1);
    }

    // Оборачиваем в Arc для шаринга между задачами
    let shared_logger = Arc::new(file_logger);

    info!(shared_logger, "Starting {} v{}", APP_NAME, APP_VERSION);
    info!(shared_logger, "Tokio runtime initialized, spawning async tasks...");

    // 2. Основной код: запуск нескольких асинхронных задач
    let mut handles = vec![];

    for i in 0..5 {
        let logger_clone = Arc::clone(&shared_logger);
        let handle = task::spawn(async move {
            let worker = Worker::new(i, logger_clone);
            worker.run().await;
        });
        handles.push(handle);
    }

    // Ждём завершения всех задач
    for h in handles {
        let _ = h.await;
    }

    // 3. Финальная часть
    info!(shared_logger, "All async tasks completed");
}
