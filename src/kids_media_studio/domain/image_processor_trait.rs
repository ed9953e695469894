use crate::domain::image::RasterImage;
use crate::infrastructure::error::InfrastructureError;

// 画像ファイルとドメインのラスタ画像を相互変換する
#[cfg_attr(test, mockall::automock)]
pub trait ImageProcessor {
    /// Decodes any supported image file, detecting the format from its bytes.
    fn decode(&self, image_bytes: &[u8]) -> Result<RasterImage, InfrastructureError>;

    /// Encodes the raster as PNG, keeping the alpha channel.
    fn encode_png(&self, image: &RasterImage) -> Result<Vec<u8>, InfrastructureError>;
}
