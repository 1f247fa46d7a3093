/// Cross-cutting sink for the pipeline's user-facing messages.
///
/// Decouples the use case from a specific output mechanism so callers
/// (CLI, tests) observe the exact message text without changing the
/// orchestration code.
pub trait RunLogger: Send {
    fn info(&mut self, message: &str);
}

/// Silent logger for tests where run output is irrelevant.
pub struct NullRunLogger;

impl RunLogger for NullRunLogger {
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger: prints to stdout and mirrors to the `log` facade.
pub struct StdoutRunLogger {
    messages: Vec<String>,
}

impl StdoutRunLogger {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Default for StdoutRunLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLogger for StdoutRunLogger {
    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        println!("{message}");
        log::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_is_noop() {
        let mut logger = NullRunLogger;
        logger.info("hello");
        // No panics = success
    }

    #[test]
    fn test_stdout_logger_stores_messages() {
        let mut logger = StdoutRunLogger::new();
        logger.info("Found 2 faces");
        logger.info("Writing to file out.jpg");
        assert_eq!(
            logger.messages(),
            &["Found 2 faces".to_string(), "Writing to file out.jpg".to_string()]
        );
    }
}
