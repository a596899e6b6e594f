mod common;

use common::{line, path_in, read, FixedClock, BANNER};
use filelog::{info, warning, RotatingFileLogger, DEFAULT_MAX_SIZE};
use std::fs;
use std::path::Path;

fn logger(path: &str) -> RotatingFileLogger {
    RotatingFileLogger::new(path).with_clock(FixedClock)
}

#[test]
fn default_threshold_is_1024() {
    assert_eq!(DEFAULT_MAX_SIZE, 1024);
    assert_eq!(RotatingFileLogger::new("x.log").max_size(), 1024);
}

#[test]
fn stays_in_one_file_below_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "2024-01-01_app.log");
    let log = logger(&path);
    assert!(log.init());

    for i in 0..10 {
        info!(log, "short {}", i);
    }

    assert_eq!(log.file_name(), path);
    assert!(!Path::new(&format!("{}1", path)).exists());
}

#[test]
fn message_crossing_threshold_goes_to_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "2024-01-01_app.log");
    let rotated = format!("{}1", path);
    let log = logger(&path);
    assert!(log.init());

    let long = "x".repeat(1000);
    info!(log, "{}", long);
    // 46 + 1028 байт — уже за порогом, но ротация только перед следующей записью
    assert!(!Path::new(&rotated).exists());

    warning!(log, "after");

    assert_eq!(log.file_name(), rotated);
    assert_eq!(read(&path), format!("{}{}", BANNER, line("INFO:", &long)));
    assert_eq!(read(&rotated), format!("{}{}", BANNER, line("WARNING:", "after")));
    assert!(!Path::new(&format!("{}2", path)).exists());
}

#[test]
fn size_equal_to_threshold_rotates() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "app.log");
    let first = line("INFO:", "first");
    let log = logger(&path).with_max_size((BANNER.len() + first.len()) as u64);
    assert!(log.init());

    info!(log, "first");
    info!(log, "second");

    assert_eq!(read(&path), format!("{}{}", BANNER, first));
    assert_eq!(
        read(&format!("{}1", path)),
        format!("{}{}", BANNER, line("INFO:", "second"))
    );
}

#[test]
fn rotated_names_increment_last_digit() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "2024-01-01_app.log");
    // баннер уже больше порога — каждая запись ротирует
    let log = logger(&path).with_max_size(1);
    assert!(log.init());

    info!(log, "a");
    assert_eq!(log.file_name(), format!("{}1", path));
    info!(log, "b");
    assert_eq!(log.file_name(), format!("{}2", path));
    info!(log, "c");
    assert_eq!(log.file_name(), format!("{}3", path));
    drop(log);

    assert_eq!(read(&path), BANNER);
    assert_eq!(read(&format!("{}1", path)), format!("{}{}", BANNER, line("INFO:", "a")));
    assert_eq!(read(&format!("{}2", path)), format!("{}{}", BANNER, line("INFO:", "b")));
    assert_eq!(
        read(&format!("{}3", path)),
        format!("{}{}LOG END.", BANNER, line("INFO:", "c"))
    );
}

// ':' недопустим в именах файлов Windows
#[cfg(unix)]
#[test]
fn nine_rotates_to_colon_not_ten() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "2024-01-01_app.log8");
    let log = logger(&path).with_max_size(1);
    assert!(log.init());

    info!(log, "to nine");
    assert_eq!(log.file_name(), path_in(dir.path(), "2024-01-01_app.log9"));
    info!(log, "to colon");
    assert_eq!(log.file_name(), path_in(dir.path(), "2024-01-01_app.log:"));
    info!(log, "colon is not a digit");
    assert_eq!(log.file_name(), path_in(dir.path(), "2024-01-01_app.log:1"));

    assert!(!dir.path().join("2024-01-01_app.log10").exists());
    assert!(log.is_open());
}

#[test]
fn rotation_into_existing_file_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "app.log");
    let rotated = format!("{}1", path);
    fs::write(&rotated, "older\n").unwrap();

    let log = logger(&path).with_max_size(1);
    assert!(log.init());
    info!(log, "next");

    assert_eq!(
        read(&rotated),
        format!("older\n{}{}", BANNER, line("INFO:", "next"))
    );
}

#[test]
fn failed_rotation_degrades_until_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(dir.path(), "app.log");
    let rotated = format!("{}1", path);
    // следующее имя занято каталогом — открыть нельзя
    fs::create_dir(&rotated).unwrap();

    let log = logger(&path).with_max_size(1);
    assert!(log.init());

    info!(log, "lost");
    assert!(!log.is_open());
    assert_eq!(log.file_name(), rotated);

    info!(log, "also lost");
    assert_eq!(read(&path), BANNER);

    // нового init недостаточно, пока имя занято
    assert!(!log.init());

    fs::remove_dir(&rotated).unwrap();
    assert!(log.init());
    assert!(log.is_open());
    drop(log);

    assert_eq!(read(&path), BANNER);
    assert_eq!(read(&rotated), format!("{}LOG END.", BANNER));
}
