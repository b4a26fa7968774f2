use std::path::PathBuf;

use crate::errors::SwcResult;
use crate::models::NodeRef;

/// Produces an auxiliary image around the soma, e.g. a maximum-intensity
/// projection cropped from a remote volumetric store.
///
/// Supplied by the caller; the standardizer itself never touches image data.
pub trait IImageProvider: Send + Sync {
    /// Render an image centred on `soma` and return where it was written.
    /// `Ok(None)` means the provider declined (e.g. the position is outside
    /// the volume).
    fn soma_image(&self, soma: &NodeRef) -> SwcResult<Option<PathBuf>>;
}
