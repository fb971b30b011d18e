use crate::app::domain::image::CloudImage;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::paths::temp_cloud_dir;
use crate::app::services::export::write_svg;
use crate::app::services::pipeline::CloudDisplay;

/// Hands the cloud to the system's default SVG viewer.
#[derive(Debug, Default)]
pub struct ExternalViewer;

impl CloudDisplay for ExternalViewer {
    fn show(&mut self, image: &CloudImage) -> Result<()> {
        let path = write_svg(&temp_cloud_dir().join("cloud.svg"), image)?;
        open::that(&path)
            .map_err(|e| AppError::Viewer(format!("Failed to open viewer: {}", e)))
    }
}
