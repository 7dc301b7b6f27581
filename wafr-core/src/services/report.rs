//! Report service - transaction report export

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::adapters::mock::MockApi;
use crate::domain::result::Result;
use crate::ports::{ReportArtifact, SupportApi};

/// Report service for exporting a user's transaction report
pub struct ReportService {
    api: Arc<MockApi>,
}

impl ReportService {
    pub fn new(api: Arc<MockApi>) -> Self {
        Self { api }
    }

    /// Render the report artifact for a user
    ///
    /// An unknown user still yields a report with placeholder fields.
    pub async fn export(&self, user_id: &str) -> Result<ReportArtifact> {
        self.api.export_report(user_id).await
    }

    /// Render the report and write it to a file
    pub async fn export_to_file(&self, user_id: &str, path: &Path) -> Result<ExportResult> {
        let artifact = self.export(user_id).await?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &artifact.bytes)?;
        info!(user_id = %user_id, path = %path.display(), "report exported");
        Ok(ExportResult {
            path: path.to_path_buf(),
            bytes_written: artifact.bytes.len(),
            content_type: artifact.content_type,
        })
    }
}

/// Result of writing an export to disk
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::adapters::mock::Latency;

    fn service() -> ReportService {
        ReportService::new(Arc::new(MockApi::new(Latency::none())))
    }

    #[tokio::test]
    async fn test_export_contains_one_line_per_transaction() {
        let svc = service();

        let artifact = svc.export("2").await.unwrap();
        let text = artifact.as_text().unwrap();
        let tx_lines: Vec<&str> = text
            .lines()
            .filter(|l| l.contains(": $"))
            .filter(|l| !l.starts_with("Balance"))
            .collect();
        assert_eq!(tx_lines.len(), 2);
        assert_eq!(tx_lines[0], "2024-03-20 - credit: $750.5 - Deposit");
        assert_eq!(tx_lines[1], "2024-03-25 - debit: $120 - Online Shopping");
    }

    #[tokio::test]
    async fn test_export_to_file_writes_artifact() {
        let svc = service();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");

        let result = svc.export_to_file("1", &path).await.unwrap();
        assert_eq!(result.content_type, "text/plain");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("WafR Transaction Report"));
        assert_eq!(content.len(), result.bytes_written);
    }
}
