//! Error types for the dossier engine.
//!
//! Every budget query is total; only the edges that touch files or
//! serialization can fail.

use dossier_catalog::CatalogError;

/// Errors that can occur while loading content or exporting a dossier.
#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    /// The content catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The dossier could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An export format name was not recognized.
    #[error("unsupported format: \"{0}\". Use: json, markdown")]
    UnsupportedFormat(String),
}

/// Convenience result type for dossier operations.
pub type DossierResult<T> = Result<T, DossierError>;
