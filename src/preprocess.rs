//! Converts an uploaded image into the tensor the classifier expects

use image::imageops::FilterType;
use tch::{Kind, Tensor};
use thiserror::Error;

use crate::config::INPUT_SIZE;

/// Errors produced while turning upload bytes into an input tensor
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to build input tensor: {0}")]
    Tensor(#[from] tch::TchError),
}

/// Decode upload bytes and produce a normalized `[1, 224, 224, 3]` float
/// tensor with values in `[0, 1]`.
///
/// The image is forced to 3-channel RGB and resized (not cropped) to the
/// model's input size.
pub fn image_to_tensor(bytes: &[u8]) -> Result<Tensor, PreprocessError> {
    let img = image::load_from_memory(bytes)?.to_rgb8();
    let resized = image::imageops::resize(
        &img,
        INPUT_SIZE as u32,
        INPUT_SIZE as u32,
        FilterType::Triangle,
    );

    let tensor = Tensor::from_slice(resized.as_raw())
        .f_view([INPUT_SIZE, INPUT_SIZE, 3])?
        .to_kind(Kind::Float)
        / 255.0;

    // Leading batch dimension of 1
    Ok(tensor.unsqueeze(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 200, 30]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_tensor_shape() {
        let tensor = image_to_tensor(&png_bytes(64, 48)).unwrap();
        assert_eq!(tensor.size(), vec![1, INPUT_SIZE, INPUT_SIZE, 3]);
        assert_eq!(tensor.kind(), Kind::Float);
    }

    #[test]
    fn test_values_normalized() {
        let tensor = image_to_tensor(&png_bytes(224, 224)).unwrap();
        assert!(tensor.max().double_value(&[]) <= 1.0);
        assert!(tensor.min().double_value(&[]) >= 0.0);
    }

    #[test]
    fn test_corrupt_bytes_rejected() {
        let err = image_to_tensor(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PreprocessError::Decode(_)));
    }
}
