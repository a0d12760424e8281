//! # condo-docs
//!
//! Document resolution: translates a (category, unit, period) request into
//! the artifacts to deliver. [`DocumentStore`] is the seam the router
//! consumes; [`FsDocumentStore`] implements it over a directory tree of
//! manifests and PDFs.

mod fs_store;

#[cfg(test)]
mod test;

pub use fs_store::FsDocumentStore;

use async_trait::async_trait;
use condo_core::{ArtifactHandle, DocumentError, DocumentRequest};

/// One artifact of a resolution. Batch categories may yield a mix: some
/// documents ready to send, some listed in the manifest but missing on disk.
/// Each missing artifact is reported to the user individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedArtifact {
    Ready(ArtifactHandle),
    Missing { filename: String },
}

/// Read-only document lookup.
///
/// An `Ok` with an empty vector means the category is known for the unit but
/// currently has nothing to deliver; [`DocumentError::UnknownUnit`] means the
/// catalog has no entry for the unit at all.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn resolve(
        &self,
        request: &DocumentRequest,
    ) -> Result<Vec<ResolvedArtifact>, DocumentError>;
}
