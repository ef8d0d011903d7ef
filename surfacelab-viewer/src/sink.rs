//! Logging collaborator for user-visible viewer messages

/// Receives one line per viewer message
pub trait LogSink {
    fn log(&mut self, message: &str, is_error: bool);
}

/// Forwards messages to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&mut self, message: &str, is_error: bool) {
        if is_error {
            log::error!("{}", message);
        } else {
            log::info!("{}", message);
        }
    }
}

/// Keeps every message in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub lines: Vec<(String, bool)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().filter(|(_, e)| *e).map(|(m, _)| m.as_str())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

impl LogSink for MemorySink {
    fn log(&mut self, message: &str, is_error: bool) {
        self.lines.push((message.to_string(), is_error));
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, message: &str, is_error: bool) {
        (**self).log(message, is_error);
    }
}
