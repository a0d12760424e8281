//! Unit tests for FsDocumentStore against a temp directory tree.

use crate::{DocumentStore, FsDocumentStore, ResolvedArtifact};
use condo_core::{DocumentCategory, DocumentError, DocumentRequest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn request(category: DocumentCategory, unit: &str, period: Option<u32>) -> DocumentRequest {
    DocumentRequest {
        category,
        unit: unit.to_string(),
        period,
    }
}

fn ready_filenames(resolved: &[ResolvedArtifact]) -> Vec<&str> {
    resolved
        .iter()
        .filter_map(|r| match r {
            ResolvedArtifact::Ready(a) => Some(a.filename.as_str()),
            ResolvedArtifact::Missing { .. } => None,
        })
        .collect()
}

#[tokio::test]
async fn test_billing_batch_mixes_ready_and_missing() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "data/billing_manifest.json",
        r#"{"unit_101": ["condo_fee", "extra_1"]}"#,
    );
    write(dir.path(), "billing/billing_condo_fee_unit_101.pdf", "pdf");
    // extra_1 is listed in the manifest but the file is absent.

    let store = FsDocumentStore::new(dir.path());
    let resolved = store
        .resolve(&request(DocumentCategory::Billing, "101", None))
        .await
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(ready_filenames(&resolved), vec!["billing_condo_fee_unit_101.pdf"]);
    assert!(matches!(
        &resolved[1],
        ResolvedArtifact::Missing { filename } if filename == "billing_extra_1_unit_101.pdf"
    ));
}

#[tokio::test]
async fn test_billing_unknown_unit() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data/billing_manifest.json", r#"{"unit_101": []}"#);

    let store = FsDocumentStore::new(dir.path());
    let err = store
        .resolve(&request(DocumentCategory::Billing, "999", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::UnknownUnit { unit } if unit == "999"));
}

#[tokio::test]
async fn test_billing_empty_slot_list_is_ok_and_empty() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data/billing_manifest.json", r#"{"unit_101": []}"#);

    let store = FsDocumentStore::new(dir.path());
    let resolved = store
        .resolve(&request(DocumentCategory::Billing, "101", None))
        .await
        .unwrap();
    assert!(resolved.is_empty());
}

#[tokio::test]
async fn test_missing_manifest_is_catalog_error() {
    let dir = TempDir::new().unwrap();
    let store = FsDocumentStore::new(dir.path());
    let err = store
        .resolve(&request(DocumentCategory::Notices, "101", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Catalog(_)));
}

#[tokio::test]
async fn test_malformed_manifest_is_catalog_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data/notices_manifest.json", "{not json");

    let store = FsDocumentStore::new(dir.path());
    let err = store
        .resolve(&request(DocumentCategory::Notices, "101", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Catalog(_)));
}

#[tokio::test]
async fn test_manifest_with_non_list_entry_is_catalog_error() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "data/notices_manifest.json",
        r#"{"unit_101": "not-a-list"}"#,
    );

    let store = FsDocumentStore::new(dir.path());
    let err = store
        .resolve(&request(DocumentCategory::Notices, "101", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Catalog(_)));
}

#[tokio::test]
async fn test_monthly_report_found() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "reports/2025/3.mar/monthly_report.pdf", "pdf");

    let store = FsDocumentStore::with_year(dir.path(), 2025);
    let resolved = store
        .resolve(&request(DocumentCategory::MonthlyReport, "101", Some(3)))
        .await
        .unwrap();
    assert_eq!(ready_filenames(&resolved), vec!["monthly_report_march_2025.pdf"]);
}

#[tokio::test]
async fn test_monthly_report_missing_file() {
    let dir = TempDir::new().unwrap();
    let store = FsDocumentStore::with_year(dir.path(), 2025);
    let resolved = store
        .resolve(&request(DocumentCategory::MonthlyReport, "101", Some(11)))
        .await
        .unwrap();
    assert_eq!(resolved.len(), 1);
    assert!(matches!(
        &resolved[0],
        ResolvedArtifact::Missing { filename } if filename == "monthly_report_november_2025.pdf"
    ));
}

#[tokio::test]
async fn test_monthly_report_without_period_is_catalog_error() {
    let dir = TempDir::new().unwrap();
    let store = FsDocumentStore::with_year(dir.path(), 2025);
    let err = store
        .resolve(&request(DocumentCategory::MonthlyReport, "101", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Catalog(_)));
}

#[tokio::test]
async fn test_static_categories() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "forecast/expense_forecast.pdf", "pdf");
    write(dir.path(), "reserve_fund/reserve_fund_2.pdf", "pdf");

    let store = FsDocumentStore::new(dir.path());

    let forecast = store
        .resolve(&request(DocumentCategory::ExpenseForecast, "101", None))
        .await
        .unwrap();
    assert_eq!(ready_filenames(&forecast), vec!["expense_forecast.pdf"]);

    let reserve = store
        .resolve(&request(DocumentCategory::ReserveFund, "101", None))
        .await
        .unwrap();
    assert_eq!(reserve.len(), 2);
    assert!(matches!(
        &reserve[0],
        ResolvedArtifact::Missing { filename } if filename == "reserve_fund_1.pdf"
    ));
    assert_eq!(ready_filenames(&reserve), vec!["reserve_fund_2.pdf"]);

    let minutes = store
        .resolve(&request(DocumentCategory::AssemblyMinutes, "101", None))
        .await
        .unwrap();
    assert!(matches!(
        &minutes[0],
        ResolvedArtifact::Missing { filename } if filename == "assembly_minutes.pdf"
    ));
}
