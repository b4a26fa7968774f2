mod filename_checker;
mod image_provider;

pub use filename_checker::IFilenameChecker;
pub use image_provider::IImageProvider;
