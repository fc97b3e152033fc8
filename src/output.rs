use crate::render::MapArtifact;
use crate::server::MapServer;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a rendered map goes
#[derive(Debug, Clone)]
pub enum OutputMode {
    StaticFile(PathBuf),
    Embedded { port: u16 },
}

pub async fn publish(artifact: MapArtifact, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::StaticFile(path) => {
            let path = write_static(&artifact, &path)?;
            let reference = artifact.popup.reference;
            println!(
                "🗺️ Map saved to '{}'. Open it in a browser and click near {:.4}, {:.4} for region data.",
                path.display(),
                reference.lat,
                reference.lng
            );
            Ok(())
        }
        OutputMode::Embedded { port } => MapServer::new(artifact, port)?.start().await,
    }
}

pub fn write_static(artifact: &MapArtifact, path: &Path) -> anyhow::Result<PathBuf> {
    let html = artifact.to_html()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write map to {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::render::render;
    use tempfile::TempDir;

    #[test]
    fn test_write_static_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maps").join("bloomwatch.html");
        let artifact = render(&MapConfig::default());

        let written = write_static(&artifact, &path).unwrap();
        assert_eq!(written, path);

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("\"layer\":\"MOD_NDVI_M\""));
    }

    #[test]
    fn test_write_static_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        // a file where a directory is expected
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("map.html");

        let err = write_static(&render(&MapConfig::default()), &path).unwrap_err();
        assert!(format!("{:#}", err).contains("blocker"));
    }

    #[tokio::test]
    async fn test_publish_static() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.html");
        publish(
            render(&MapConfig::default()),
            OutputMode::StaticFile(path.clone()),
        )
        .await
        .unwrap();
        assert!(path.exists());
    }
}
