use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::image::CloudImage;
use crate::app::infrastructure::error::Result;

/// Write `image` as an SVG document, adding the `.svg` extension if missing.
/// Returns the path actually written.
pub fn write_svg(path: &Path, image: &CloudImage) -> Result<PathBuf> {
    let path = with_svg_extension(path);
    fs::write(&path, image.to_svg())?;
    log::info!("Exported cloud to {}", path.display());
    Ok(path)
}

fn with_svg_extension(path: &Path) -> PathBuf {
    let has_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if has_svg {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".svg");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::color::Color;

    #[test]
    fn test_with_svg_extension() {
        assert_eq!(with_svg_extension(Path::new("/a/cloud.svg")), PathBuf::from("/a/cloud.svg"));
        assert_eq!(with_svg_extension(Path::new("/a/cloud.SVG")), PathBuf::from("/a/cloud.SVG"));
        assert_eq!(with_svg_extension(Path::new("/a/cloud")), PathBuf::from("/a/cloud.svg"));
        assert_eq!(with_svg_extension(Path::new("/a/cloud.png")), PathBuf::from("/a/cloud.png.svg"));
    }

    #[test]
    fn test_write_svg() {
        let dir = tempfile::tempdir().unwrap();
        let image = CloudImage::new(100, 50, Color::BLACK);
        let written = write_svg(&dir.path().join("out"), &image).unwrap();
        assert_eq!(written, dir.path().join("out.svg"));
        let contents = fs::read_to_string(&written).unwrap();
        assert!(contents.contains("fill=\"#000000\""));
    }
}
