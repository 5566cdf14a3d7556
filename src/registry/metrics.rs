use metrics::{counter, Counter};

pub struct RegistryMetrics {
    pub lookups: Counter,
    pub missing_validation: Counter,
    pub valid_checks: Counter,
    pub invalid_checks: Counter,
}

const RESULT: &str = "result";

impl RegistryMetrics {
    pub fn new() -> Self {
        RegistryMetrics {
            lookups: counter!("registry.lookups"),
            missing_validation: counter!("registry.missing_validation"),
            valid_checks: counter!("validation.checks", RESULT => "valid"),
            invalid_checks: counter!("validation.checks", RESULT => "invalid"),
        }
    }

    pub fn record_check<T, E>(&self, result: &Result<T, E>) {
        match result {
            Ok(_) => self.valid_checks.increment(1),
            Err(_) => self.invalid_checks.increment(1),
        }
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        RegistryMetrics::new()
    }
}
