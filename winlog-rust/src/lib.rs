//! # winlog-rs
//!
//! Windows-часть filelog: текст системных ошибок через `FormatMessageA`
//! и запись диагностики в Windows Event Log.
//! Если кастомный источник не зарегистрирован — использует "Application" с префиксом.

#![cfg(windows)]

use std::ffi::CString;
use windows_sys::core::PCSTR;
use windows_sys::Win32::Foundation::{GetLastError, PSID};
use windows_sys::Win32::System::Diagnostics::Debug::{
    FormatMessageA, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
};
use windows_sys::Win32::System::EventLog::{
    DeregisterEventSource, RegisterEventSourceA, ReportEventA, EVENTLOG_ERROR_TYPE,
    EVENTLOG_WARNING_TYPE,
};

// MAKELANGID(LANG_NEUTRAL, SUBLANG_DEFAULT)
const LANG_DEFAULT: u32 = 0x0400;
const MESSAGE_BUF_LEN: usize = 512;

// ===== Текст системных ошибок =====

/// Текст последней ошибки потока (`GetLastError`). Пустая строка, если ошибки нет.
pub fn last_error_message() -> String {
    let code = unsafe { GetLastError() };
    if code == 0 {
        return String::new();
    }
    format_message(code)
}

/// Системное описание кода ошибки Win32.
pub fn format_message(code: u32) -> String {
    let mut buf = [0u8; MESSAGE_BUF_LEN];
    let len = unsafe {
        FormatMessageA(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            std::ptr::null(),
            code,
            LANG_DEFAULT,
            buf.as_mut_ptr(),
            buf.len() as u32,
            std::ptr::null(),
        )
    } as usize;

    if len == 0 {
        return format!("Unknown error {}", code);
    }

    // FormatMessage дописывает "\r\n" в конец
    String::from_utf8_lossy(&buf[..len]).trim_end().to_owned()
}

// ===== Диагностика в Event Log =====

#[derive(Debug, Clone, Copy)]
pub enum EventKind {
    Warning,
    Error,
}

impl EventKind {
    fn to_event_type(self) -> u16 {
        match self {
            EventKind::Warning => EVENTLOG_WARNING_TYPE,
            EventKind::Error => EVENTLOG_ERROR_TYPE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventSink {
    preferred_source: String,
    fallback_source: &'static str,
}

impl EventSink {
    pub fn new(preferred_source: &str) -> Self {
        Self {
            preferred_source: preferred_source.to_owned(),
            fallback_source: "Application",
        }
    }

    pub fn report(&self, kind: EventKind, message: &str) -> bool {
        if self.try_report(&self.preferred_source, kind, message) {
            return true;
        }

        let prefixed = format!("[{}] {}", self.preferred_source, message);
        self.try_report(self.fallback_source, kind, &prefixed)
    }

    fn try_report(&self, source: &str, kind: EventKind, message: &str) -> bool {
        let (Some(c_source), Some(c_message)) = (to_cstring(source), to_cstring(message)) else {
            return false;
        };

        let source_ptr: PCSTR = c_source.as_ptr() as _;
        let msg_ptr: PCSTR = c_message.as_ptr() as _;

        let h_source = unsafe { RegisterEventSourceA(std::ptr::null(), source_ptr) };
        if h_source == 0 {
            return false;
        }

        let success: i32 = unsafe {
            ReportEventA(
                h_source,
                kind.to_event_type(),
                0,
                1000,
                std::ptr::null_mut::<std::ffi::c_void>() as PSID,
                1,
                0,
                &msg_ptr,
                std::ptr::null(),
            )
        };

        let _ = unsafe { DeregisterEventSource(h_source) };

        success != 0
    }
}

fn to_cstring(s: &str) -> Option<CString> {
    CString::new(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_has_text() {
        // ERROR_FILE_NOT_FOUND
        let text = format_message(2);
        assert!(!text.is_empty());
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(format_message(0xDEAD_BEEF), "Unknown error 3735928559");
    }
}
