//! Decoding helpers for front-ends.
//!
//! The engine itself only sees decoded images; these functions turn a file
//! on disk into one, honoring the orientation tag so photos compare upright.

use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Open and decode `path`, sniffing the format from content and applying
/// the decoder-reported orientation.
pub fn open(path: impl AsRef<Path>) -> Result<DynamicImage, SourceError> {
    let path = path.as_ref();
    let open_err = |source: io::Error| SourceError::Open {
        path: path.to_path_buf(),
        source,
    };
    let decode_err = |source: ImageError| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;
    let mut decoder = reader.into_decoder().map_err(decode_err)?;
    let orientation = decoder.orientation().map_err(decode_err)?;
    let mut img = DynamicImage::from_decoder(decoder).map_err(decode_err)?;
    img.apply_orientation(orientation);

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        ?orientation,
        "image loaded"
    );
    Ok(img)
}

/// Like [`open`], but a failure is logged and becomes `None`, which
/// [`compute`](crate::compute) treats as "nothing to compare".
pub fn open_optional(path: impl AsRef<Path>) -> Option<DynamicImage> {
    match open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(error = %e, "could not load image");
            None
        }
    }
}
