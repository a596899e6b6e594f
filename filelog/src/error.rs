use crate::os_error;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Can't open file {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Can't close file {path}")]
    Close {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Can't write to file {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            LogError::Open { source, .. }
            | LogError::Close { source, .. }
            | LogError::Write { source, .. } => source,
        }
    }

    /// Текст ошибки ОС, как его показывает платформа.
    pub fn os_message(&self) -> String {
        os_error::describe(self.io_error())
    }
}
