/// Blocking user-facing messages (the page's `alert()`).
pub trait Alerts: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr so they stay apart from the rendered view on stdout.
pub struct ConsoleAlerts;

impl Alerts for ConsoleAlerts {
    fn alert(&self, message: &str) {
        eprintln!("[alert] {}", message);
    }
}
