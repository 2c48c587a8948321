use std::time::Duration;

/// Run-wide settings resolved from the command line.
///
/// Built once in `main` and handed down by reference; nothing in the
/// pipeline reads ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of concurrent probe workers; doubles as the work queue capacity.
    pub workers: usize,
    /// Budget for one full handshake attempt (connect, key exchange, auth).
    pub timeout: Duration,
    /// Also report hosts that returned no banner.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: 100,
            timeout: Duration::from_secs(10),
            verbose: false,
        }
    }
}
