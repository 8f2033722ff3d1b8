//! Still-image decoding into HWC tensors.
//!
//! Thin wrapper around the `image` crate. Every decoded image keeps its
//! source precision (u8, u16 or f32) and uses `[height, width, channels]`.

pub mod error;
pub mod image;

pub use error::ImageError;
pub use image::Image;

use {base::Tensor, crates_image::DynamicImage};

fn to_tensor<T>(width: u32, height: u32, channels: usize, data: Vec<T>) -> Result<Tensor<T>, ImageError> {
    Ok(Tensor::new(vec![height as usize, width as usize, channels], data)?)
}

/// Decodes an image from raw bytes on the current thread.
///
/// Format is auto-detected. Grayscale, RGB and RGBA keep their channel
/// count; 16-bit and float formats keep their precision; anything else
/// is converted to 8-bit RGB.
pub fn decode_image_blocking(data: &[u8]) -> Result<Image, ImageError> {
    let img = crates_image::load_from_memory(data)?;
    let (w, h) = (img.width(), img.height());
    match img {
        DynamicImage::ImageLuma8(buf) => Ok(Image::U8(to_tensor(w, h, 1, buf.into_raw())?)),
        DynamicImage::ImageRgb8(buf) => Ok(Image::U8(to_tensor(w, h, 3, buf.into_raw())?)),
        DynamicImage::ImageRgba8(buf) => Ok(Image::U8(to_tensor(w, h, 4, buf.into_raw())?)),
        DynamicImage::ImageLuma16(buf) => Ok(Image::U16(to_tensor(w, h, 1, buf.into_raw())?)),
        DynamicImage::ImageRgb16(buf) => Ok(Image::U16(to_tensor(w, h, 3, buf.into_raw())?)),
        DynamicImage::ImageRgba16(buf) => Ok(Image::U16(to_tensor(w, h, 4, buf.into_raw())?)),
        DynamicImage::ImageRgb32F(buf) => Ok(Image::F32(to_tensor(w, h, 3, buf.into_raw())?)),
        DynamicImage::ImageRgba32F(buf) => Ok(Image::F32(to_tensor(w, h, 4, buf.into_raw())?)),
        other => Ok(Image::U8(to_tensor(w, h, 3, other.to_rgb8().into_raw())?)),
    }
}
