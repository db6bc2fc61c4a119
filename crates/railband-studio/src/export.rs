use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use railband_engine::render::RasterSurface;

/// Writes the framebuffer as a PNG named by the current timestamp.
///
/// The frame index is appended because headless runs render several
/// frames per millisecond.
pub fn save_frame(surface: &RasterSurface, dir: &Path, frame: u64) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before the Unix epoch")?
        .as_millis();
    let path = dir.join(format!("{millis}-{frame:05}.png"));

    let img = image::RgbaImage::from_raw(
        surface.width(),
        surface.height(),
        surface.as_bytes().to_vec(),
    )
    .context("framebuffer dimensions do not match pixel data")?;
    img.save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!("saved {}", path.display());
    Ok(path)
}
