use clap::Parser;

/// Adds a fully-opaque alpha channel to an image file, overwriting it in place
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the image file that will be rewritten with an opaque alpha channel
    pub image: String,
}
