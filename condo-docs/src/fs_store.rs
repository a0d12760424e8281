//! Filesystem document store.
//!
//! Layout under the data root:
//!
//! ```text
//! data/billing_manifest.json      {"unit_101": ["condo_fee", "extra_1"], ...}
//! data/notices_manifest.json      {"unit_101": ["1", "2"], ...}
//! billing/billing_<slot>_unit_<unit>.pdf
//! notices/notice_<slot>_unit_<unit>.pdf
//! reports/<year>/<m>.<mon>/monthly_report.pdf
//! forecast/expense_forecast.pdf
//! reserve_fund/reserve_fund_1.pdf, reserve_fund_2.pdf
//! minutes/assembly_minutes.pdf
//! ```

use crate::{DocumentStore, ResolvedArtifact};
use async_trait::async_trait;
use chrono::Datelike;
use condo_core::{ArtifactHandle, DocumentCategory, DocumentError, DocumentRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// [`DocumentStore`] over a directory tree. Manifests are read per request so
/// an operator can drop in new documents without restarting the bot.
pub struct FsDocumentStore {
    root: PathBuf,
    year: i32,
}

impl FsDocumentStore {
    /// Store rooted at `root`, resolving periodic reports for the current year.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            year: chrono::Utc::now().year(),
        }
    }

    /// Store with a fixed report year (tests).
    pub fn with_year(root: impl Into<PathBuf>, year: i32) -> Self {
        Self {
            root: root.into(),
            year,
        }
    }

    /// The data root this store was created with.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_manifest(
        &self,
        manifest: &str,
        unit: &str,
    ) -> Result<Vec<String>, DocumentError> {
        let path = self.root.join("data").join(manifest);
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| DocumentError::Catalog(format!("{}: {}", path.display(), e)))?;
        let parsed: HashMap<String, Value> = serde_json::from_str(&raw)
            .map_err(|e| DocumentError::Catalog(format!("{}: {}", path.display(), e)))?;

        let key = format!("unit_{}", unit);
        let slots = parsed.get(&key).ok_or_else(|| DocumentError::UnknownUnit {
            unit: unit.to_string(),
        })?;
        let slots = slots
            .as_array()
            .ok_or_else(|| DocumentError::Catalog(format!("{}: {} is not a list", path.display(), key)))?;
        slots
            .iter()
            .map(|slot| {
                slot.as_str().map(str::to_string).ok_or_else(|| {
                    DocumentError::Catalog(format!(
                        "{}: {} contains a non-string slot",
                        path.display(),
                        key
                    ))
                })
            })
            .collect()
    }

    fn check(&self, path: PathBuf, filename: String) -> ResolvedArtifact {
        if path.is_file() {
            ResolvedArtifact::Ready(ArtifactHandle::new(path, filename))
        } else {
            debug!(path = %path.display(), "Artifact listed but missing on disk");
            ResolvedArtifact::Missing { filename }
        }
    }

    fn resolve_unit_batch(
        &self,
        manifest: &str,
        dir: &str,
        prefix: &str,
        unit: &str,
    ) -> Result<Vec<ResolvedArtifact>, DocumentError> {
        let slots = self.read_manifest(manifest, unit)?;
        Ok(slots
            .into_iter()
            .map(|slot| {
                let filename = format!("{}_{}_unit_{}.pdf", prefix, slot, unit);
                self.check(self.root.join(dir).join(&filename), filename)
            })
            .collect())
    }

    fn resolve_monthly(&self, period: u32) -> Result<Vec<ResolvedArtifact>, DocumentError> {
        let month_name = period
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .ok_or_else(|| DocumentError::Catalog(format!("month out of range: {}", period)))?;
        let month_dir = format!("{}.{}", period, &month_name[..3]);
        let path = self
            .root
            .join("reports")
            .join(self.year.to_string())
            .join(month_dir)
            .join("monthly_report.pdf");
        let filename = format!("monthly_report_{}_{}.pdf", month_name, self.year);
        Ok(vec![self.check(path, filename)])
    }

    fn resolve_static(&self, parts: &[(&str, &str)]) -> Vec<ResolvedArtifact> {
        parts
            .iter()
            .map(|(dir, filename)| {
                self.check(self.root.join(dir).join(filename), filename.to_string())
            })
            .collect()
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn resolve(
        &self,
        request: &DocumentRequest,
    ) -> Result<Vec<ResolvedArtifact>, DocumentError> {
        match request.category {
            DocumentCategory::Billing => self.resolve_unit_batch(
                "billing_manifest.json",
                "billing",
                "billing",
                &request.unit,
            ),
            DocumentCategory::Notices => self.resolve_unit_batch(
                "notices_manifest.json",
                "notices",
                "notice",
                &request.unit,
            ),
            DocumentCategory::MonthlyReport => {
                let period = request.period.ok_or_else(|| {
                    DocumentError::Catalog("monthly report request without a period".to_string())
                })?;
                self.resolve_monthly(period)
            }
            DocumentCategory::ExpenseForecast => {
                Ok(self.resolve_static(&[("forecast", "expense_forecast.pdf")]))
            }
            DocumentCategory::ReserveFund => Ok(self.resolve_static(&[
                ("reserve_fund", "reserve_fund_1.pdf"),
                ("reserve_fund", "reserve_fund_2.pdf"),
            ])),
            DocumentCategory::AssemblyMinutes => {
                Ok(self.resolve_static(&[("minutes", "assembly_minutes.pdf")]))
            }
        }
    }
}
