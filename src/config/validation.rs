//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap handles syntactic)
//! - Check the document root exists and is a directory
//! - Reject an empty bind host
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Runs before anything is bound

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a [`ServerConfig`].
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bind host must not be empty")]
    EmptyHost,

    #[error("document root {} is not accessible: {source}", .path.display())]
    DocumentRootInaccessible {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("document root {} is not a directory", .0.display())]
    DocumentRootNotDirectory(PathBuf),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.bind_host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    match fs::metadata(&config.document_root) {
        Ok(meta) if !meta.is_dir() => {
            errors.push(ValidationError::DocumentRootNotDirectory(
                config.document_root.clone(),
            ));
        }
        Ok(_) => {}
        Err(source) => errors.push(ValidationError::DocumentRootInaccessible {
            path: config.document_root.clone(),
            source,
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            document_root: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn reports_every_problem() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            bind_host: "  ".into(),
            document_root: dir.path().join("missing"),
            ..ServerConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::EmptyHost));
        assert!(matches!(
            errors[1],
            ValidationError::DocumentRootInaccessible { .. }
        ));
    }

    #[test]
    fn rejects_file_as_document_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<p>hi</p>").unwrap();
        let config = ServerConfig {
            document_root: file,
            ..ServerConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::DocumentRootNotDirectory(_)]
        ));
    }
}
