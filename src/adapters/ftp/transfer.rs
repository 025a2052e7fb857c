//! FTP transfer client
//!
//! Wraps a blocking FTP stream behind the async [`TransferClient`] port.
//! The stream runs on the blocking pool; the live connection is parked in a
//! mutex between `connect`, `upload`, and `disconnect` so the caller can
//! hold the scoped connect-upload-disconnect discipline.

use crate::adapters::traits::TransferClient;
use crate::adapters::validation::validate_file_size;
use crate::config::schema::FtpConfig;
use crate::domain::errors::{HeraldError, TransferError};
use crate::domain::result::Result;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::path::Path;
use std::sync::Mutex;
use suppaftp::{FtpStream, Mode};

/// FTP transfer client
///
/// Administratively disabled when `ftp.enabled = false`: `connect` and
/// `upload` then return `Ok(false)` without touching the network.
pub struct FtpTransfer {
    config: FtpConfig,
    connection: Mutex<Option<FtpStream>>,
}

impl FtpTransfer {
    /// Create a transfer client from configuration
    pub fn new(config: FtpConfig) -> Self {
        Self {
            config,
            connection: Mutex::new(None),
        }
    }

    /// Whether the channel is administratively enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn store_connection(&self, stream: Option<FtpStream>) {
        *self
            .connection
            .lock()
            .expect("ftp connection mutex poisoned") = stream;
    }

    fn take_connection(&self) -> Option<FtpStream> {
        self.connection
            .lock()
            .expect("ftp connection mutex poisoned")
            .take()
    }
}

#[async_trait]
impl TransferClient for FtpTransfer {
    fn validate(&self, path: &Path, max_size_mb: Option<u64>) -> Result<bool> {
        let cap = max_size_mb.or(self.config.max_upload_mb);
        validate_file_size(path, cap)
    }

    async fn connect(&self) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }

        let host = self.config.host.clone();
        let port = self.config.port;
        let username = self.config.username.clone();
        let password = self
            .config
            .password
            .as_ref()
            .map(|p| p.expose_secret().as_ref().to_string())
            .unwrap_or_default();
        let passive = self.config.passive;
        let remote_dir = self.config.remote_dir.clone();

        let stream = tokio::task::spawn_blocking(
            move || -> std::result::Result<FtpStream, TransferError> {
                let mut stream = FtpStream::connect((host.as_str(), port))
                    .map_err(|e| TransferError::ConnectionFailed(e.to_string()))?;

                stream
                    .login(&username, &password)
                    .map_err(|e| TransferError::ConnectionFailed(format!("Login failed: {e}")))?;

                if passive {
                    stream.set_mode(Mode::Passive);
                }

                if !remote_dir.is_empty() && remote_dir != "/" {
                    stream.cwd(&remote_dir).map_err(|e| {
                        TransferError::ConnectionFailed(format!(
                            "Failed to change to remote directory '{remote_dir}': {e}"
                        ))
                    })?;
                }

                Ok(stream)
            },
        )
        .await
        .map_err(|e| TransferError::ConnectionFailed(format!("Connect task failed: {e}")))??;

        self.store_connection(Some(stream));
        tracing::debug!(host = %self.config.host, "FTP connection established");
        Ok(true)
    }

    async fn upload(&self, local: &Path, remote_name: Option<&str>) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }

        let stream = self
            .take_connection()
            .ok_or(TransferError::NotConnected)?;

        let remote = match remote_name {
            Some(name) => name.to_string(),
            None => local
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    HeraldError::Validation(format!(
                        "Cannot derive remote name from {}",
                        local.display()
                    ))
                })?,
        };
        let local = local.to_path_buf();

        let (stream, outcome) = tokio::task::spawn_blocking(move || {
            let mut stream = stream;
            let outcome = (|| -> std::result::Result<(), TransferError> {
                let mut file = std::fs::File::open(&local).map_err(|e| {
                    TransferError::UploadFailed(format!(
                        "Cannot open local file {}: {e}",
                        local.display()
                    ))
                })?;
                stream
                    .put_file(&remote, &mut file)
                    .map_err(|e| TransferError::UploadFailed(e.to_string()))?;
                Ok(())
            })();
            (stream, outcome)
        })
        .await
        .map_err(|e| TransferError::UploadFailed(format!("Upload task failed: {e}")))?;

        // The connection stays usable after a failed put; park it again so
        // disconnect still runs against it.
        self.store_connection(Some(stream));
        outcome?;
        Ok(true)
    }

    async fn disconnect(&self) {
        if let Some(mut stream) = self.take_connection() {
            let closed = tokio::task::spawn_blocking(move || stream.quit()).await;
            match closed {
                Ok(Ok(())) => tracing::debug!("FTP connection closed"),
                Ok(Err(e)) => tracing::debug!(error = %e, "FTP quit failed, dropping connection"),
                Err(e) => tracing::debug!(error = %e, "FTP disconnect task failed"),
            }
        }
    }
}
