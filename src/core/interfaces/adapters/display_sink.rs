use anyhow::Result;
use async_trait::async_trait;

/// Where found photos end up. A status message replaces the current title
/// and clears any shown photo.
#[async_trait]
pub trait DisplaySink: Send + Sync {
    async fn display_photo(&self, image: &[u8], title: &str) -> Result<()>;

    async fn display_status(&self, message: &str);
}
