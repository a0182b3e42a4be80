/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Linear retry delay unit in milliseconds: retry `n` waits `n * retry_delay_ms`.
    pub retry_delay_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientOptions;

    #[test]
    fn defaults_match_service_policy() {
        let opts = ClientOptions::default();
        assert_eq!(opts.timeout_ms, 15_000);
        assert_eq!(opts.max_retries, 3);
        assert_eq!(opts.retry_delay_ms, 1_000);
    }
}
