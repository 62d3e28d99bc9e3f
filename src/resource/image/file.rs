use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::resource::image::ImageStore;

/// Stores the image at a single filesystem path; saving overwrites the
/// original file, and the output container is picked from the path extension.
pub struct FileSystemImageStore {
    path: PathBuf,
}

impl FileSystemImageStore {
    pub fn from_path(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ImageStore for FileSystemImageStore {
    fn load(&self) -> Result<image::DynamicImage> {
        if !self.path.is_file() {
            bail!("No image file at the given path: {}", self.path.display());
        }

        Ok(image::open(&self.path)?)
    }

    fn save(&self, image: &image::RgbaImage) -> Result<()> {
        Ok(image.save(&self.path)?)
    }
}
