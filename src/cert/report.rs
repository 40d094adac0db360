use crate::cert::expiry::{ExpiryStatus, WARNING_DAYS};
use crate::utils::errors::Result;
use crate::utils::output::{OutputFormat, Tone};
use std::io::Write;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Console line for one certificate
pub fn status_line(name: &str, status: &ExpiryStatus) -> (Tone, String) {
    match status {
        ExpiryStatus::NoExpiry => (
            Tone::Plain,
            format!("Certificate {name}: No expiry date found"),
        ),
        ExpiryStatus::Disabled => (Tone::Warning, format!("⚠ Certificate {name} is disabled")),
        ExpiryStatus::Expired { days_ago } => (
            Tone::Failure,
            format!("✗ EXPIRED: Certificate {name} expired {days_ago} days ago"),
        ),
        ExpiryStatus::Critical { days, expires } => (
            Tone::Failure,
            format!(
                "✗ CRITICAL: Certificate {name} expires in {days} days ({})",
                expires.format(DATE_FORMAT)
            ),
        ),
        ExpiryStatus::Warning { days, expires } => (
            Tone::Warning,
            format!(
                "⚠ WARNING: Certificate {name} expires in {days} days ({})",
                expires.format(DATE_FORMAT)
            ),
        ),
        ExpiryStatus::Healthy { days, expires } => (
            Tone::Plain,
            format!(
                "✓ Certificate {name} expires in {days} days ({})",
                expires.format(DATE_FORMAT)
            ),
        ),
    }
}

/// Writes status lines for checked certificates
pub struct StatusReporter<W: Write> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> StatusReporter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn report(&mut self, name: &str, status: &ExpiryStatus) -> Result<()> {
        let (tone, line) = status_line(name, status);
        self.format.print_line(&mut self.out, tone, &line)
    }

    /// Aggregate line printed when a full listing found no issues
    pub fn all_valid(&mut self) -> Result<()> {
        let line = format!("✓ All certificates are valid for more than {WARNING_DAYS} days");
        self.format.print_line(&mut self.out, Tone::Success, &line)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_status_lines() {
        let expires = Utc.with_ymd_and_hms(2026, 4, 2, 8, 30, 0).unwrap();

        assert_eq!(
            status_line("web", &ExpiryStatus::NoExpiry),
            (Tone::Plain, "Certificate web: No expiry date found".to_string())
        );
        assert_eq!(
            status_line("web", &ExpiryStatus::Disabled),
            (Tone::Warning, "⚠ Certificate web is disabled".to_string())
        );
        assert_eq!(
            status_line("web", &ExpiryStatus::Expired { days_ago: 3 }),
            (
                Tone::Failure,
                "✗ EXPIRED: Certificate web expired 3 days ago".to_string()
            )
        );
        assert_eq!(
            status_line("web", &ExpiryStatus::Critical { days: 2, expires }),
            (
                Tone::Failure,
                "✗ CRITICAL: Certificate web expires in 2 days (2026-04-02)".to_string()
            )
        );
        assert_eq!(
            status_line("web", &ExpiryStatus::Warning { days: 12, expires }),
            (
                Tone::Warning,
                "⚠ WARNING: Certificate web expires in 12 days (2026-04-02)".to_string()
            )
        );
        assert_eq!(
            status_line("web", &ExpiryStatus::Healthy { days: 45, expires }),
            (
                Tone::Plain,
                "✓ Certificate web expires in 45 days (2026-04-02)".to_string()
            )
        );
    }

    #[test]
    fn test_reporter_writes_lines() {
        let mut reporter = StatusReporter::new(OutputFormat::new(false), Vec::new());
        reporter
            .report("api", &ExpiryStatus::Expired { days_ago: 1 })
            .unwrap();
        reporter.all_valid().unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "✗ EXPIRED: Certificate api expired 1 days ago\n\
             ✓ All certificates are valid for more than 30 days\n"
        );
    }
}
