//! Client configuration.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Which operations run under the request timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// Only list and delete are bounded; create and update wait indefinitely.
    #[default]
    ListAndDelete,
    /// Every operation is bounded.
    Uniform,
}

/// The four todo operations, used to decide which calls are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    UpdateStatus,
    Delete,
}

impl TimeoutPolicy {
    pub fn applies_to(self, operation: Operation) -> bool {
        match self {
            TimeoutPolicy::Uniform => true,
            TimeoutPolicy::ListAndDelete => {
                matches!(operation, Operation::List | Operation::Delete)
            }
        }
    }
}

/// Settings injected into `TodoApi` at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub timeout_policy: TimeoutPolicy,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.timeout_policy = policy;
        self
    }

    /// The bound for `operation`, or `None` if it may wait indefinitely.
    pub fn timeout_for(&self, operation: Operation) -> Option<Duration> {
        self.timeout_policy
            .applies_to(operation)
            .then_some(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            timeout_policy: TimeoutPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.timeout_policy, TimeoutPolicy::ListAndDelete);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://127.0.0.1:9000/api/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn default_policy_bounds_only_list_and_delete() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_for(Operation::List), Some(DEFAULT_TIMEOUT));
        assert_eq!(config.timeout_for(Operation::Delete), Some(DEFAULT_TIMEOUT));
        assert_eq!(config.timeout_for(Operation::Add), None);
        assert_eq!(config.timeout_for(Operation::UpdateStatus), None);
    }

    #[test]
    fn uniform_policy_bounds_everything() {
        let config = ClientConfig::default().with_timeout_policy(TimeoutPolicy::Uniform);
        for operation in [
            Operation::List,
            Operation::Add,
            Operation::UpdateStatus,
            Operation::Delete,
        ] {
            assert_eq!(config.timeout_for(operation), Some(DEFAULT_TIMEOUT));
        }
    }

    #[test]
    fn builders_override_fields() {
        let config = ClientConfig::new("http://h")
            .with_timeout(Duration::from_millis(50))
            .with_timeout_policy(TimeoutPolicy::Uniform);
        assert_eq!(config.timeout, Duration::from_millis(50));
        assert_eq!(config.timeout_policy, TimeoutPolicy::Uniform);
    }
}
