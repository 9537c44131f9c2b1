use std::path::{Path, PathBuf};

use anyhow::Context;
use futures::future::try_join_all;
use survey_core::media::Image;

/// Read one image file. The image is named after the file.
pub async fn load_image(path: &Path) -> anyhow::Result<Image> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    tracing::debug!(%name, bytes = data.len(), "image loaded");
    Ok(Image::new(name, data))
}

/// Read every file concurrently and return the images in argument order.
/// Fails as a whole if any file cannot be read.
pub async fn load_images(paths: &[PathBuf]) -> anyhow::Result<Vec<Image>> {
    let tasks = paths.iter().cloned().map(|path| {
        tokio::spawn(async move { load_image(&path).await })
    });

    try_join_all(tasks)
        .await
        .context("image loader task failed")?
        .into_iter()
        .collect()
}
