use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::DisplaySink;
use crate::global_constants;

/// Display adapter for the binary: writes the image blob to a temp file and
/// prints the title, or the status line when there is no photo to show.
pub struct TempFileDisplaySink {
    output_path: PathBuf,
}

impl TempFileDisplaySink {
    pub fn new() -> Self {
        Self::with_output_path(std::env::temp_dir().join(global_constants::RESULT_IMAGE_FILE_NAME))
    }

    pub fn with_output_path(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for TempFileDisplaySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DisplaySink for TempFileDisplaySink {
    async fn display_photo(&self, image: &[u8], title: &str) -> Result<()> {
        tokio::fs::write(&self.output_path, image)
            .await
            .with_context(|| format!("failed to write image to {:?}", self.output_path))?;

        log::info!(
            "[DISPLAY] wrote {} bytes to {:?}",
            image.len(),
            self.output_path
        );
        println!("{}", title);
        println!("saved to {}", self.output_path.display());

        Ok(())
    }

    async fn display_status(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_display_photo_writes_the_blob() {
        let path = std::env::temp_dir().join("photo_roulette_sink_test.jpg");
        let sink = TempFileDisplaySink::with_output_path(path.clone());

        sink.display_photo(&[1, 2, 3], "Pup").await.unwrap();

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[test]
    fn test_default_path_is_in_temp_dir() {
        let sink = TempFileDisplaySink::new();
        assert!(sink.output_path().starts_with(std::env::temp_dir()));
    }
}
