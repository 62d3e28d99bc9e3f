use anyhow::Result;

use crate::resource::image::ImageStore;

/// Rewrites the stored image as RGBA with every alpha value set to 255.
///
/// The decode happens before any write, so a store holding undecodable data
/// is left untouched on failure.
pub fn add_opaque_alpha(store: &impl ImageStore) -> Result<()> {
    let decoded = store.load()?;

    log::info!(
        "Decoded image: {}x{}, {:?}",
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    store.save(&opacify(decoded))?;

    log::info!("Wrote image with opaque alpha channel");

    Ok(())
}

// Inputs that already carry an alpha channel keep their color values and
// have the alpha forced to 255, which makes repeated runs idempotent.
fn opacify(image: image::DynamicImage) -> image::RgbaImage {
    let mut rgba = image.into_rgba8();

    for pixel in rgba.pixels_mut() {
        pixel[3] = u8::MAX;
    }

    rgba
}
