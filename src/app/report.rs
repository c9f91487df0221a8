use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::error::AppError;
use crate::generator::Fixture;

/// One CSV row per generated fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub shape: &'static str,
    pub family: &'static str,
    pub json_bytes: usize,
}

impl ReportRow {
    pub fn for_fixture(fixture: &Fixture) -> Result<Self, AppError> {
        let shape = fixture.shape();
        Ok(Self {
            shape: shape.name(),
            family: shape.family().name(),
            json_bytes: serde_json::to_vec(fixture)?.len(),
        })
    }
}

/// Render the `shape,family,json_bytes` report
pub fn render_report(fixtures: &[Fixture]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for fixture in fixtures {
        writer.serialize(ReportRow::for_fixture(fixture)?)?;
    }

    writer.into_inner().map_err(|e| AppError::Io(e.into_error()))
}

/// Write the report and flush
pub async fn write_report<W>(fixtures: &[Fixture], mut writer: W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin + Send,
{
    let report = render_report(fixtures)?;
    writer.write_all(&report).await?;
    writer.flush().await?;
    Ok(())
}

/// Write each fixture as pretty JSON to `<dir>/<shape>.json`
///
/// Creates `dir` when missing. Returns the written paths in input order.
pub async fn write_fixture_files(
    fixtures: &[Fixture],
    dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let path = dir.join(format!("{}.json", fixture.shape().name()));
        let payload = serde_json::to_vec_pretty(fixture)?;
        tokio::fs::write(&path, &payload).await?;

        info!(path = %path.display(), bytes = payload.len(), "Wrote fixture file");
        written.push(path);
    }

    Ok(written)
}
