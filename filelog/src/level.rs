// ===== Уровни логгирования =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Метка уровня в строке лога, вместе с двоеточием.
    pub fn as_label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO:",
            Severity::Warning => "WARNING:",
            Severity::Error => "ERROR:",
        }
    }
}

// Неизвестные числовые значения считаются Info
impl From<i32> for Severity {
    fn from(raw: i32) -> Self {
        match raw {
            1 => Severity::Warning,
            2 => Severity::Error,
            _ => Severity::Info,
        }
    }
}
