//! Текст системных ошибок, по реализации на платформу.

use std::io;

/// Текст последней ошибки ОС (`errno` / `GetLastError`). Пустая строка, если ошибки нет.
#[cfg(not(target_os = "windows"))]
pub fn last_os_error() -> String {
    let err = io::Error::last_os_error();
    match err.raw_os_error() {
        Some(0) | None => String::new(),
        Some(_) => describe(&err),
    }
}

#[cfg(target_os = "windows")]
pub fn last_os_error() -> String {
    winlog_rs::last_error_message()
}

/// Человекочитаемый текст уже пойманной ошибки, без хвоста `(os error N)`.
#[cfg(not(target_os = "windows"))]
pub fn describe(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => match text.strip_suffix(&format!(" (os error {})", code)) {
            Some(stripped) => stripped.to_owned(),
            None => text,
        },
        None => text,
    }
}

#[cfg(target_os = "windows")]
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => winlog_rs::format_message(code as u32),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_error_keeps_its_text() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(describe(&err), "disk on fire");
    }

    #[cfg(unix)]
    #[test]
    fn os_error_has_no_code_suffix() {
        // ENOENT
        let text = describe(&io::Error::from_raw_os_error(2));
        assert_eq!(text, "No such file or directory");
    }

    #[cfg(unix)]
    #[test]
    fn last_error_after_failed_open() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").join("file.log");
        assert!(std::fs::File::open(&missing).is_err());
        assert!(!last_os_error().is_empty());
    }
}
