use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::{stream::BoxStream, StreamExt};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};

use crate::{
    api::{self, ApiError, AssetClient, FetchConfig},
    assets::FONT_AWESOME_FILES,
    domain::{error::Result, DownloadJob, FetchError},
    utils::default_target_dir,
};

/// Downloads the Font Awesome assets described by `config`.
///
/// Returns the directory the files were written to. Fails with the first
/// job error; files already written by other jobs are left in place.
pub async fn fetch_assets(config: FetchConfig) -> Result<PathBuf> {
    let target_dir = resolve_target_dir(&config).inspect_err(|e| error!("{}", e))?;

    let coordinator = FetchCoordinator::from_config(&config).inspect_err(|e| error!("{}", e))?;
    coordinator.fetch_into(&target_dir).await?;
    Ok(target_dir)
}

/// [`fetch_assets`] against the pinned CDN release.
pub async fn fetch_font_awesome(target_dir: Option<PathBuf>) -> Result<PathBuf> {
    let config = FetchConfig {
        target_dir,
        ..FetchConfig::default()
    };
    fetch_assets(config).await
}

/// The configured directory, or `<cwd>/public/fonts` when none is set.
pub fn resolve_target_dir(config: &FetchConfig) -> Result<PathBuf> {
    match &config.target_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_target_dir().map_err(|source| FetchError::Io {
            path: PathBuf::from("public/fonts"),
            source,
        }),
    }
}

#[derive(Clone)]
pub struct FetchCoordinator {
    client: AssetClient,
    base_url: String,
}

impl FetchCoordinator {
    pub fn new(client: AssetClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let client = AssetClient::new(&config.user_agent).map_err(FetchError::Client)?;
        Ok(Self::new(client, config.base_url.clone()))
    }

    /// The fixed job list, one per entry of [`FONT_AWESOME_FILES`].
    pub fn plan_jobs(&self, target_dir: &Path) -> Vec<DownloadJob> {
        let base = self.base_url.trim_end_matches('/');
        FONT_AWESOME_FILES
            .iter()
            .map(|(suffix, file_name)| {
                DownloadJob::new(format!("{}{}", base, suffix), target_dir.join(file_name))
            })
            .collect()
    }

    pub async fn fetch_into(&self, target_dir: &Path) -> Result<()> {
        ensure_dir(target_dir)
            .await
            .inspect_err(|e| error!("{}", e))?;

        info!(
            "Downloading Font Awesome assets to {}...",
            target_dir.display()
        );

        let handles: Vec<_> = self
            .plan_jobs(target_dir)
            .into_iter()
            .map(|job| {
                let coordinator = self.clone();
                tokio::spawn(async move { coordinator.fetch_one(&job).await })
            })
            .collect();

        // First failure wins. Dropping the remaining handles detaches their
        // tasks, which run on to completion in the background.
        let joined = futures::future::try_join_all(handles.into_iter().map(|handle| async move {
            handle.await.map_err(|e| FetchError::Join(e.to_string()))?
        }))
        .await;

        match joined {
            Ok(_) => {
                info!("All Font Awesome assets downloaded successfully.");
                Ok(())
            }
            Err(e) => {
                error!("Failed to download one or more Font Awesome assets: {}", e);
                Err(e)
            }
        }
    }

    pub async fn fetch_one(&self, job: &DownloadJob) -> Result<()> {
        let file_name = job.file_name();
        info!("Downloading {} from {}...", file_name, job.url());

        let (total, stream) = self
            .client
            .download_file_stream(job.url())
            .await
            .map_err(|e| fetch_error(&file_name, e))
            .inspect_err(|e| error!("{}", e))?;

        let mut file = tokio::fs::File::create(job.dest())
            .await
            .map_err(|source| FetchError::Io {
                path: job.dest().to_path_buf(),
                source,
            })
            .inspect_err(|e| error!("{}", e))?;

        match write_body(&mut file, stream.boxed(), job).await {
            Ok(written) => {
                drop(file);
                debug!("{}: wrote {} of {:?} bytes", file_name, written, total);
                info!("{} downloaded successfully.", file_name);
                Ok(())
            }
            Err(e) => {
                match &e {
                    FetchError::Io { .. } => error!("Error writing file {}: {}", file_name, e),
                    _ => error!("Error receiving body for {}: {}", file_name, e),
                }
                drop(file);
                // Partial file cleanup is best-effort.
                let _ = tokio::fs::remove_file(job.dest()).await;
                Err(e)
            }
        }
    }
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    let io_error = |source| FetchError::Io {
        path: dir.to_path_buf(),
        source,
    };

    if !tokio::fs::try_exists(dir).await.map_err(io_error)? {
        debug!("Creating {}", dir.display());
        tokio::fs::create_dir_all(dir).await.map_err(io_error)?;
    }
    Ok(())
}

async fn write_body(
    file: &mut tokio::fs::File,
    mut stream: BoxStream<'_, api::Result<Bytes>>,
    job: &DownloadJob,
) -> Result<u64> {
    let io_error = |source| FetchError::Io {
        path: job.dest().to_path_buf(),
        source,
    };

    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| fetch_error(&job.file_name(), e))?;
        file.write_all(&chunk).await.map_err(io_error)?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(io_error)?;
    file.sync_all().await.map_err(io_error)?;
    Ok(written)
}

fn fetch_error(file_name: &str, err: ApiError) -> FetchError {
    let file = file_name.to_string();
    match err {
        ApiError::RequestError(source) => FetchError::Network { file, source },
        ApiError::RedirectRequest(source) => FetchError::Redirect { file, source },
        ApiError::MissingLocation => FetchError::MissingLocation { file },
        ApiError::InvalidLocation(location) => FetchError::InvalidLocation { file, location },
        ApiError::Status { code, reason } => FetchError::Status { file, code, reason },
    }
}
