use std::sync::Arc;
use super::error::ApplicationError;
use serde::Serialize;

use crate::domain::color::Color;
use crate::domain::fill_request::FillRequest;
use crate::domain::flood_fill::flood_fill;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::palette::{ERASER, PALETTE};
use crate::domain::position::Position;
use crate::infrastructure::external_image_fetcher::DefaultExternalImageFetcher;
use crate::infrastructure::file_storage::LocalFileStorage;

pub const ARTWORK_CONTENT_TYPE: &str = "image/png";
pub const ARTWORK_FILE_NAME: &str = "my-pharaoh-artwork.png";

pub struct ColoringService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    image_fetcher: Arc<DefaultExternalImageFetcher>,
    file_storage: Arc<LocalFileStorage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteView {
    pub colors: Vec<String>,
    pub eraser: String,
}

impl ColoringService {
    pub fn new(
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        image_fetcher: Arc<DefaultExternalImageFetcher>,
        file_storage: Arc<LocalFileStorage>,
    ) -> Self {
        Self { image_processor, image_fetcher, file_storage }
    }

    pub fn palette(&self) -> PaletteView {
        PaletteView {
            colors: PALETTE.iter().map(Color::to_hex).collect(),
            eraser: ERASER.to_hex(),
        }
    }

    /// Decodes `image_data`, fills the region under `(x, y)` with `color_hex`
    /// and returns the coloured artwork as PNG. The result is also kept as the
    /// current artwork for preview and download.
    pub async fn fill_artwork(
        &self,
        image_data: Vec<u8>,
        x: i64,
        y: i64,
        color_hex: &str,
    ) -> Result<Vec<u8>, ApplicationError> {
        let target_color: Color = color_hex.parse()?;
        let request = FillRequest::new(Position::new(x, y), target_color);

        let mut raster = self.image_processor.decode(&image_data)?;
        let painted = flood_fill(&mut raster, &request)?;
        tracing::info!(
            x, y,
            color = %target_color,
            width = raster.width(),
            height = raster.height(),
            painted,
            "filled colouring region"
        );

        let png = self.image_processor.encode_png(&raster)?;
        self.file_storage.save_artwork(&png).await?;
        Ok(png)
    }

    pub async fn fill_artwork_from_url(
        &self,
        image_url: &str,
        x: i64,
        y: i64,
        color_hex: &str,
    ) -> Result<Vec<u8>, ApplicationError> {
        let image_data = self.image_fetcher.fetch_image_from_url_impl(image_url).await?;
        self.fill_artwork(image_data, x, y, color_hex).await
    }

    pub async fn current_artwork(&self) -> Result<Vec<u8>, ApplicationError> {
        Ok(self.file_storage.read_artwork().await?)
    }
}
