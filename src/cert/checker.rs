use crate::cert::expiry::classify;
use crate::cert::report::StatusReporter;
use crate::utils::errors::Result;
use crate::vault::certificates::name_from_id;
use crate::vault::client::KeyVaultClient;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Outcome of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub issues: usize,
}

impl CheckSummary {
    pub fn has_issues(&self) -> bool {
        self.issues > 0
    }
}

/// Fetches certificates from the vault and reports their expiry status
pub struct ExpiryChecker<'a, W: Write> {
    client: &'a KeyVaultClient,
    reporter: StatusReporter<W>,
}

impl<'a, W: Write> ExpiryChecker<'a, W> {
    pub fn new(client: &'a KeyVaultClient, reporter: StatusReporter<W>) -> Self {
        Self { client, reporter }
    }

    /// Check one certificate by name
    pub async fn check_single(&mut self, name: &str, now: DateTime<Utc>) -> Result<CheckSummary> {
        tracing::debug!("Checking certificate: {}", name);

        let bundle = self.client.get_certificate(name).await?;
        let status = classify(bundle.attributes.as_ref(), now);
        self.reporter.report(name, &status)?;

        Ok(CheckSummary {
            checked: 1,
            issues: usize::from(status.is_issue()),
        })
    }

    /// Check every certificate in the vault, page by page
    pub async fn check_all(&mut self, now: DateTime<Utc>) -> Result<CheckSummary> {
        let mut summary = CheckSummary::default();
        let mut pager = self.client.list_certificates()?;

        while let Some(page) = pager.next_page().await? {
            for item in page {
                let (Some(id), Some(attributes)) = (item.id.as_deref(), item.attributes.as_ref())
                else {
                    tracing::debug!("Skipping listing entry without id or attributes");
                    continue;
                };

                let status = classify(Some(attributes), now);
                self.reporter.report(name_from_id(id), &status)?;

                summary.checked += 1;
                if status.is_issue() {
                    summary.issues += 1;
                }
            }
        }

        tracing::info!(
            "Checked {} certificates, {} need attention",
            summary.checked,
            summary.issues
        );

        if !summary.has_issues() {
            self.reporter.all_valid()?;
        }

        Ok(summary)
    }

    pub fn into_reporter(self) -> StatusReporter<W> {
        self.reporter
    }
}
