use crate::domain::image::RasterImage;
use crate::domain::image_processor_trait::ImageProcessor;
use super::error::InfrastructureError;
use image::{ImageFormat, RgbaImage}; // imageクレートの型
use std::io::Cursor;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn decode(&self, image_bytes: &[u8]) -> Result<RasterImage, InfrastructureError> {
        // フォーマットはバイト列から推測
        let img = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?
            .decode()
            .map_err(InfrastructureError::ImageLibError)?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(RasterImage::new(width, height, img.into_raw())?)
    }

    fn encode_png(&self, image: &RasterImage) -> Result<Vec<u8>, InfrastructureError> {
        let rgba = RgbaImage::from_raw(image.width(), image.height(), image.pixels().to_vec())
            .ok_or_else(|| {
                InfrastructureError::ImageProcessingError("pixel buffer does not match image size".to_string())
            })?;

        let mut buffer = Cursor::new(Vec::new());
        rgba.write_to(&mut buffer, ImageFormat::Png).map_err(InfrastructureError::ImageLibError)?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;

    #[test]
    fn test_decode_png() {
        let processor = DefaultImageProcessor::new();
        // 1x1の透明なPNGのBase64エンコードデータ
        let base64_image = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";
        let image_bytes = base64::decode(base64_image).unwrap();

        let raster = processor.decode(&image_bytes).unwrap();
        assert_eq!((raster.width(), raster.height()), (1, 1));
        assert_eq!(raster.pixels().len(), 4);
    }

    #[test]
    fn test_encode_then_decode_keeps_pixels() {
        let processor = DefaultImageProcessor::new();
        let raster = RasterImage::filled(3, 2, Color::new(0x46, 0x82, 0xB4), 255).unwrap();

        let png = processor.encode_png(&raster).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = processor.decode(&png).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_png_keeps_translucent_alpha() {
        let processor = DefaultImageProcessor::new();
        let raster = RasterImage::filled(8, 8, Color::new(0, 100, 0), 128).unwrap();
        let png = processor.encode_png(&raster).unwrap();
        assert_eq!(processor.decode(&png).unwrap().pixel(7, 7), [0, 100, 0, 128]);
    }

    #[test]
    fn test_decode_detects_jpeg_input() {
        let rgb = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 200, 200]));
        let mut jpeg = Cursor::new(Vec::new());
        rgb.write_to(&mut jpeg, ImageFormat::Jpeg).unwrap();

        let raster = DefaultImageProcessor::new().decode(jpeg.get_ref()).unwrap();
        assert_eq!((raster.width(), raster.height()), (4, 4));
        assert_eq!(raster.pixel(0, 0)[3], 255);
    }

    #[test]
    fn test_decode_invalid_image_data() {
        let processor = DefaultImageProcessor::new();
        let invalid_image_bytes = vec![1, 2, 3, 4]; // 明らかに不正な画像データ

        let result = processor.decode(&invalid_image_bytes);
        match result {
            Err(InfrastructureError::ImageLibError(_)) | Err(InfrastructureError::IoError(_)) => {}
            other => panic!("Expected ImageLibError or IoError for invalid image data, got {:?}", other.map(|_| ())),
        }
    }
}
