//! Per-company output file writing
//!
//! Every company file is rendered up front, then all files are written
//! concurrently. Each write goes to a temporary file in the output directory
//! and is renamed over the destination only once fully flushed, so a failed
//! or cancelled write never leaves a truncated document behind.

use super::serializer::serialize_enrollments;
use crate::app::services::record_processor::CompanyGroup;
use crate::constants::{OUTPUT_EXTENSION, TEMP_FILE_PREFIX};
use crate::{Error, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// An output file written (or planned, in a dry run) for one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub company: String,
    pub path: PathBuf,
    pub enrollments: usize,
    pub bytes: u64,
}

/// Writes company groups as JSON documents into one directory
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        let output_dir = if output_dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            output_dir
        };
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination path for a company's document
    pub fn output_path(&self, company: &str) -> Result<PathBuf> {
        validate_company_name(company)?;
        Ok(self
            .output_dir
            .join(format!("{}.{}", company, OUTPUT_EXTENSION)))
    }

    /// Files that writing `groups` would produce, without touching the disk
    pub fn plan(&self, groups: &[CompanyGroup]) -> Result<Vec<WrittenFile>> {
        Ok(self
            .render(groups)?
            .into_iter()
            .map(|(file, _)| file)
            .collect())
    }

    /// Write one document per group, concurrently
    ///
    /// All writes run to completion or failure independently; if any fails,
    /// the first error is returned after the others have settled.
    pub async fn write_groups(
        &self,
        groups: &[CompanyGroup],
        cancellation_token: &CancellationToken,
    ) -> Result<Vec<WrittenFile>> {
        let rendered = self.render(groups)?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                Error::io(
                    format!(
                        "Failed to create output directory {}",
                        self.output_dir.display()
                    ),
                    e,
                )
            })?;

        let writes = rendered.into_iter().map(|(file, contents)| async move {
            write_atomic(&file.path, &contents, cancellation_token).await?;
            debug!(
                "Wrote {} enrollments for '{}' to {}",
                file.enrollments,
                file.company,
                file.path.display()
            );
            Ok::<WrittenFile, Error>(file)
        });

        let mut written = Vec::new();
        let mut first_error = None;
        for result in join_all(writes).await {
            match result {
                Ok(file) => written.push(file),
                Err(e) => {
                    error!("Output write failed: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!(
                    "Wrote {} company files to {}",
                    written.len(),
                    self.output_dir.display()
                );
                Ok(written)
            }
        }
    }

    fn render(&self, groups: &[CompanyGroup]) -> Result<Vec<(WrittenFile, String)>> {
        groups
            .iter()
            .map(|group| {
                if group.company.is_empty() {
                    warn!(
                        "Enrollments without an insurance company are written to .{}",
                        OUTPUT_EXTENSION
                    );
                }
                let path = self.output_path(&group.company)?;
                let contents = serialize_enrollments(&group.enrollments);
                let file = WrittenFile {
                    company: group.company.clone(),
                    path,
                    enrollments: group.enrollments.len(),
                    bytes: contents.len() as u64,
                };
                Ok((file, contents))
            })
            .collect()
    }
}

/// Reject company names that would escape the output directory
pub fn validate_company_name(company: &str) -> Result<()> {
    if company.contains(['/', '\\', '\0']) {
        return Err(Error::invalid_output_name(
            company,
            "name contains a path separator",
        ));
    }
    if company == "." || company == ".." {
        return Err(Error::invalid_output_name(
            company,
            "name refers to a directory",
        ));
    }
    Ok(())
}

/// Write `contents` to `path` through a temporary file and a rename
///
/// An existing destination keeps its permissions; a new one gets
/// `OUTPUT_FILE_MODE`. Cancelling `cancellation_token` before the data is
/// flushed removes the temporary file and leaves `path` untouched.
pub async fn write_atomic(
    path: &Path,
    contents: &str,
    cancellation_token: &CancellationToken,
) -> Result<u64> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let temp_path = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| {
            Error::io(
                format!("Failed to create temporary file in {}", dir.display()),
                e,
            )
        })?
        .into_temp_path();

    let permissions = output_permissions(path).await;

    let write = async {
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&temp_path)
            .await?;
        file.write_all(contents.as_bytes()).await?;
        if let Some(permissions) = permissions {
            file.set_permissions(permissions).await?;
        }
        file.sync_all().await?;
        Ok::<(), std::io::Error>(())
    };

    tokio::select! {
        biased;
        _ = cancellation_token.cancelled() => {
            warn!("Write of {} cancelled", path.display());
            return Err(Error::processing_interrupted(format!(
                "write of {} cancelled",
                path.display()
            )));
        }
        result = write => {
            result.map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
        }
    }

    temp_path.persist(path).map_err(|e| {
        Error::io(
            format!("Failed to move output into place at {}", path.display()),
            e.error,
        )
    })?;

    Ok(contents.len() as u64)
}

/// Permissions to give the finished file at `path`
///
/// Temporary files are created owner-only and must not pass that mode on.
async fn output_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(metadata) = tokio::fs::metadata(path).await {
        return Some(metadata.permissions());
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use crate::constants::OUTPUT_FILE_MODE;
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(OUTPUT_FILE_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
