use anyhow::Result;

pub mod file;

/// A place an image can be decoded from and encoded back to.
pub trait ImageStore {
    fn load(&self) -> Result<image::DynamicImage>;
    fn save(&self, image: &image::RgbaImage) -> Result<()>;
}
