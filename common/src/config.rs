use std::time::Duration;

/// Default per-address connect timeout used by the dialer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    /// Disables name resolution in the dialer.
    ///
    /// Targets must then be literal IP addresses. The gate itself never
    /// resolves names regardless of this flag.
    pub no_dns: bool,
    /// Lowers log verbosity, one tier per level.
    pub quiet: u8,
    /// Upper bound on each individual connect attempt.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_dns: false,
            quiet: 0,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
