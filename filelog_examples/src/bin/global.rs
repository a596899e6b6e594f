// example_global — глобальный логгер процесса: <дата>_<exe>.log в текущем каталоге

use filelog::{gerror, ginfo, glog, gwarning, Severity, GLOBAL_LOGGER};

fn main() {
    // До init записи молча отбрасываются
    ginfo!("This goes nowhere");

    if !filelog::init_global_logger() {
        eprintln!("[FATAL] Cannot open {}. Exiting.", GLOBAL_LOGGER.file_name());
        std::process::exit(1);
    }

    ginfo!("Global logger writes to {}", GLOBAL_LOGGER.file_name());
    gwarning!("Low disk space: {} MB left", 512);
    gerror!("Request #{} failed", 17);
    glog!(Severity::Info, "Explicit level");

    // Статик не дропается — LOG END. пишем сами
    filelog::shutdown_global_logger();
}
