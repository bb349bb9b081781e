//! CLI-based thumbnail renderer using an external ghostscript binary

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::traits::ThumbnailRenderer;
use crate::error::ConvertError;

/// Renders the first PDF page to a JPEG via the `gs` binary
///
/// The PDF bytes are piped to ghostscript on stdin and the compressed image
/// is read back from stdout, so no temporary files are involved.
///
/// # Examples
///
/// ```no_run
/// use pdf_thumbnailer::converter::CliThumbnailRenderer;
/// use std::path::PathBuf;
///
/// // Create with explicit path
/// let renderer = CliThumbnailRenderer::new(PathBuf::from("/usr/bin/gs"), 70, 36);
///
/// // Or auto-discover from PATH
/// let renderer = CliThumbnailRenderer::from_path(70, 36)
///     .expect("gs not found in PATH");
/// ```
pub struct CliThumbnailRenderer {
    binary_path: PathBuf,
    jpeg_quality: u8,
    render_dpi: u32,
}

impl CliThumbnailRenderer {
    /// Create a new CLI renderer with an explicit binary path
    pub fn new(binary_path: PathBuf, jpeg_quality: u8, render_dpi: u32) -> Self {
        Self {
            binary_path,
            jpeg_quality,
            render_dpi,
        }
    }

    /// Attempt to find ghostscript in PATH
    ///
    /// Returns `Some(CliThumbnailRenderer)` if the `gs` binary is found,
    /// `None` otherwise.
    pub fn from_path(jpeg_quality: u8, render_dpi: u32) -> Option<Self> {
        which::which("gs")
            .ok()
            .map(|path| Self::new(path, jpeg_quality, render_dpi))
    }
}

#[async_trait]
impl ThumbnailRenderer for CliThumbnailRenderer {
    async fn render(&self, pdf: &[u8]) -> crate::Result<Vec<u8>> {
        let mut child = Command::new(&self.binary_path)
            .arg("-q")
            .arg("-dSAFER")
            .arg("-dBATCH")
            .arg("-dNOPAUSE")
            .arg("-dFirstPage=1")
            .arg("-dLastPage=1")
            .arg("-sDEVICE=jpeg")
            .arg(format!("-dJPEGQ={}", self.jpeg_quality))
            .arg(format!("-r{}", self.render_dpi))
            .arg("-sOutputFile=-")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                crate::Error::Convert(ConvertError::Render(format!(
                    "failed to execute ghostscript: {}",
                    e
                )))
            })?;

        // Feed the PDF and close stdin so ghostscript sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(pdf).await.map_err(|e| {
                crate::Error::Convert(ConvertError::Render(format!(
                    "failed to write pdf to ghostscript: {}",
                    e
                )))
            })?;
        }

        let output = child.wait_with_output().await.map_err(|e| {
            crate::Error::Convert(ConvertError::Render(format!(
                "failed to read ghostscript output: {}",
                e
            )))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(crate::Error::Convert(ConvertError::Render(format!(
                "ghostscript exited with {}: {}",
                output.status,
                stderr.trim()
            ))));
        }

        Ok(output.stdout)
    }
}
