use crate::clock::{Clock, DATE_FORMAT};
use std::env;

const UNKNOWN_EXECUTABLE: &str = "unknown";

// ===== Имена файлов =====

/// Имя следующего файла при ротации.
///
/// Если последний символ — цифра, он заменяется следующим символом кодировки
/// (без переноса разряда: после `'9'` идёт `':'`). Иначе дописывается `'1'`.
pub fn next_file_name(current: &str) -> String {
    let mut next = current.to_owned();
    match next.pop() {
        Some(last) if last.is_ascii_digit() => next.push((last as u8 + 1) as char),
        Some(last) => {
            next.push(last);
            next.push('1');
        }
        None => next.push('1'),
    }
    next
}

/// Имя исполняемого файла без каталога и расширения.
pub fn current_executable_name() -> String {
    env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_EXECUTABLE.to_owned())
}

/// `<YYYY-MM-DD>_<exe>.log` в текущем каталоге.
pub fn generate_log_file_name(clock: &dyn Clock) -> String {
    format!("{}_{}.log", clock.now(DATE_FORMAT), current_executable_name())
}
