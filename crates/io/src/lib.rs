use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use render::RenderedIcon;
use types::icon_catalog;

/// Errors from loading the source logo or writing the generated set.
///
/// Nothing is retried or rewritten; callers see the failing path and the
/// underlying decode or filesystem error.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decode the source logo and normalize it to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Encode a rendered icon as PNG at `path`, overwriting any previous file.
pub fn write_icon(icon: &RenderedIcon, path: &Path) -> Result<(), AssetError> {
    match icon {
        RenderedIcon::Rgba(img) => img.save(path),
        RenderedIcon::Rgb(img) => img.save(path),
    }
    .map_err(|source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Produce the full icon set for one source logo.
///
/// Loads and keys the logo, creates `out_dir` (and parents) if missing, then
/// writes every cataloged artifact. Returns the written paths in catalog
/// order. Files written before a failure are left on disk.
pub fn generate_icon_set(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut logo = load_rgba(input)?;
    render::key_out_dark(&mut logo);

    fs::create_dir_all(out_dir).map_err(|source| AssetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for spec in icon_catalog() {
        let icon = render::render_icon(&logo, &spec.kind);
        let path = out_dir.join(&spec.file_name);
        write_icon(&icon, &path)?;
        let (w, h) = icon.dimensions();
        log::debug!("wrote {} ({w}x{h})", path.display());
        written.push(path);
    }
    log::info!(
        "generated {} icons from {}",
        written.len(),
        input.display()
    );
    Ok(written)
}
