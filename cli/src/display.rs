use kitchen_timer_core::TimerDisplay;
use std::io::Write;

/// Writes one `id  MM:SS` row per timer
pub struct ConsoleDisplay<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleDisplay<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TimerDisplay for ConsoleDisplay<W> {
    fn update_timer(&mut self, id: &str, value: &str) {
        if let Err(e) = writeln!(self.out, "{id:<48} {value}") {
            tracing::warn!(error = %e, "failed to write timer row");
        }
    }
}
