use std::path::Path;

use anyhow::Result;

use crate::args::Args;
use crate::resource::image::file::FileSystemImageStore;

pub mod args;
pub mod inject;
pub mod resource;

pub fn run(args: Args) -> Result<()> {
    env_logger::init();

    let store = FileSystemImageStore::from_path(Path::new(&args.image));
    inject::add_opaque_alpha(&store)
}
