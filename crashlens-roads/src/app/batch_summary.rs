use std::fmt::Display;

/// outcome of one batch run, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<JurisdictionFailure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionFailure {
    pub id: String,
    pub reason: String,
}

impl BatchSummary {
    pub fn record_success(&mut self, id: &str) {
        self.succeeded.push(String::from(id));
    }

    pub fn record_failure(&mut self, id: &str, reason: String) {
        self.failed.push(JurisdictionFailure {
            id: String::from(id),
            reason,
        });
    }

    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn total(&self) -> usize {
        self.success_count() + self.failure_count()
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "COMPLETE: {} success, {} failed",
            self.success_count(),
            self.failure_count()
        )?;
        for failure in self.failed.iter() {
            write!(f, "\n  {}: {}", failure.id, failure.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BatchSummary;

    #[test]
    fn test_tally() {
        let mut summary = BatchSummary::default();
        summary.record_success("henrico");
        summary.record_failure("atlantis", String::from("unknown jurisdiction 'atlantis'"));
        summary.record_success("richmond_city");
        assert_eq!(summary.success_count(), 2);
        assert_eq!(summary.failure_count(), 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(
            summary.to_string(),
            "COMPLETE: 2 success, 1 failed\n  atlantis: unknown jurisdiction 'atlantis'"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            BatchSummary::default().to_string(),
            "COMPLETE: 0 success, 0 failed"
        );
    }
}
