//! Flag-asset retrieval: raw vector bytes and on-the-fly PNG rasterization.
//!
//! Every shipped country has a vector flag at
//! `assets/flags/<code-lowercase>.svg` under the crate root. Reads are
//! plain blocking file I/O; decode, scale, and PNG encode are delegated to
//! `resvg`. PNG variants are derived on demand, never stored.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use resvg::{tiny_skia, usvg};

use super::error::{CatalogError, Result};

/// Raster width in pixels used when the caller does not request one.
pub const DEFAULT_PNG_WIDTH: u32 = 512;

/// Path of the vector flag asset for a country short code.
pub(crate) fn svg_path(code: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("flags")
        .join(format!("{}.svg", code.to_ascii_lowercase()))
}

/// Reads the raw bytes of a vector flag asset.
pub(crate) fn read_svg(path: &Path) -> Result<Vec<u8>> {
    debug!("Reading flag asset: {}", path.display());
    fs::read(path).map_err(|source| CatalogError::AssetRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Rasterizes a vector flag to PNG at the requested pixel width.
///
/// The height follows from the asset's aspect ratio, with a floor of one
/// pixel.
pub(crate) fn rasterize(path: &Path, width: u32) -> Result<Vec<u8>> {
    let svg = read_svg(path)?;
    debug!("Rasterizing {} to {}px", path.display(), width);

    let tree = usvg::Tree::from_data(&svg, &usvg::Options::default())
        .map_err(|err| rasterization_error(path, err.to_string()))?;

    let size = tree.size();
    let scale = width as f32 / size.width();
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| rasterization_error(path, format!("invalid raster target {width}x{height}")))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|err| rasterization_error(path, err.to_string()))
}

fn rasterization_error(path: &Path, reason: String) -> CatalogError {
    CatalogError::Rasterization {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_path_is_lowercase_under_assets() {
        let path = svg_path("US");
        assert!(path.ends_with("assets/flags/us.svg"));
    }

    #[test]
    fn missing_asset_surfaces_as_asset_read_error() {
        let err = rasterize(&svg_path("ZZ"), 64).unwrap_err();
        assert!(matches!(err, CatalogError::AssetRead { .. }));
    }

    #[test]
    fn zero_width_is_a_rasterization_error() {
        let err = rasterize(&svg_path("US"), 0).unwrap_err();
        assert!(matches!(err, CatalogError::Rasterization { .. }));
    }
}
