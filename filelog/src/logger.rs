use crate::clock::{Clock, LocalClock, DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::diag::Diagnostics;
use crate::error::LogError;
use crate::level::Severity;
use crate::naming::next_file_name;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Порог ротации по умолчанию, в байтах.
pub const DEFAULT_MAX_SIZE: u64 = 1024;

const BANNER_HEADER: &str = "Application log file";
const FAREWELL: &str = "LOG END.";

// ===== Состояние под мьютексом =====

struct LoggerState {
    file: Option<File>,
    file_name: String,
    severity: Severity,
}

// ===== Ротирующий файловый логгер =====

/// Файловый логгер с ротацией по размеру.
///
/// Создаётся закрытым; до успешного [`init`](Self::init) все записи молча
/// отбрасываются. Размер файла проверяется перед каждой записью, и если он
/// достиг порога, файл закрывается и открывается новый с именем из
/// [`next_file_name`]. Старые файлы не удаляются.
pub struct RotatingFileLogger {
    state: Mutex<LoggerState>,
    max_size: u64,
    clock: Box<dyn Clock>,
    diagnostics: Diagnostics,
}

impl RotatingFileLogger {
    pub fn new(file_name: impl Into<String>) -> Self {
        RotatingFileLogger {
            state: Mutex::new(LoggerState {
                file: None,
                file_name: file_name.into(),
                severity: Severity::default(),
            }),
            max_size: DEFAULT_MAX_SIZE,
            clock: Box::new(LocalClock),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Дублировать ошибки логгера в системный журнал (syslog / Event Log).
    pub fn with_system_log(mut self, app_name: &str) -> Self {
        self.diagnostics = Diagnostics::with_system_log(app_name);
        self
    }

    /// Открывает файл и пишет заголовок. Ошибка уходит в канал диагностики.
    pub fn init(&self) -> bool {
        match self.try_init() {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.report_error(&e);
                false
            }
        }
    }

    pub fn try_init(&self) -> Result<(), LogError> {
        let mut state = self.lock_state();
        // Повторный init заменяет открытый файл
        state.file = None;
        let file = self.open_with_banner(&state.file_name)?;
        state.file = Some(file);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.lock_state().file.is_some()
    }

    pub fn set_severity(&self, level: Severity) {
        self.lock_state().severity = level;
    }

    pub fn severity(&self) -> Severity {
        self.lock_state().severity
    }

    pub fn file_name(&self) -> String {
        self.lock_state().file_name.clone()
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    pub fn log(&self, level: Severity, args: fmt::Arguments) {
        let mut state = self.lock_state();
        if state.file.is_none() {
            return;
        }

        state.severity = level;

        if self.needs_rotation(&state.file_name) {
            if let Err(e) = self.rotate(&mut state) {
                self.diagnostics.report_error(&e);
                return;
            }
        }

        let line = format!(
            "{}:\t{}\t{}\n",
            self.clock.now(TIMESTAMP_FORMAT),
            state.severity.as_label(),
            args
        );

        let LoggerState { file, file_name, .. } = &mut *state;
        if let Some(file) = file.as_mut() {
            if let Err(source) = file.write_all(line.as_bytes()) {
                self.diagnostics.report_error(&LogError::Write {
                    path: file_name.clone(),
                    source,
                });
            }
        }
    }

    /// Пишет `LOG END.` и закрывает файл. Повторный вызов ничего не делает.
    pub fn shutdown(&self) {
        let mut state = self.lock_state();
        let Some(mut file) = state.file.take() else {
            return;
        };

        if let Err(source) = file.write_all(FAREWELL.as_bytes()) {
            self.diagnostics.report_error(&LogError::Write {
                path: state.file_name.clone(),
                source,
            });
        }
        if let Err(e) = close_file(file, &state.file_name) {
            self.diagnostics.report_error(&e);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Если размер узнать не удалось — не ротируем
    fn needs_rotation(&self, file_name: &str) -> bool {
        fs::metadata(file_name)
            .map(|meta| meta.len() >= self.max_size)
            .unwrap_or(false)
    }

    fn rotate(&self, state: &mut LoggerState) -> Result<(), LogError> {
        // Ошибка закрытия не прерывает ротацию
        if let Some(old) = state.file.take() {
            if let Err(e) = close_file(old, &state.file_name) {
                self.diagnostics.report_error(&e);
            }
        }

        state.file_name = next_file_name(&state.file_name);
        let file = self.open_with_banner(&state.file_name)?;
        state.file = Some(file);
        Ok(())
    }

    fn open_with_banner(&self, file_name: &str) -> Result<File, LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_name)
            .map_err(|source| LogError::Open {
                path: file_name.to_owned(),
                source,
            })?;

        let banner = format!(
            "{}\nLog start at: {}\n",
            BANNER_HEADER,
            self.clock.now(DATE_FORMAT)
        );
        file.write_all(banner.as_bytes())
            .map_err(|source| LogError::Write {
                path: file_name.to_owned(),
                source,
            })?;

        Ok(file)
    }
}

impl Drop for RotatingFileLogger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn close_file(file: File, file_name: &str) -> Result<(), LogError> {
    sync_to_disk(&file).map_err(|source| LogError::Close {
        path: file_name.to_owned(),
        source,
    })
}

#[cfg(unix)]
fn sync_to_disk(file: &File) -> io::Result<()> {
    file.sync_all()
}

// На Windows append-дескриптор без GENERIC_WRITE, FlushFileBuffers не пройдёт
#[cfg(not(unix))]
fn sync_to_disk(file: &File) -> io::Result<()> {
    let mut file = file;
    file.flush()
}
