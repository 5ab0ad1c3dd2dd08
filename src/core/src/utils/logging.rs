use log::debug;
use std::time::Instant;

pub struct Logging;

impl Logging {
    /// Runs `action` and logs how long it took.
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let started = Instant::now();

        let result = action();

        debug!("{}, {} ms", message, started.elapsed().as_millis());

        result
    }
}
