//! Boundary contract between the Genesis shell and the native render host.
//!
//! The shell talks to the render engine through exactly three outbound
//! operations (latch an example index, latch a scene index, push the
//! back-label bitmap) and one inbound callback (finish the current screen).
//! Two transports carry the same contract: the [`host::RenderHost`] trait for
//! an engine linked in-process, and the process-wide queues in [`queue`] for
//! an engine driven across an FFI boundary. [`session::RenderSession`] tracks
//! the ordering either way: the selection must be latched strictly before the
//! host surface comes up, because the host reads it only at initialization.

pub mod ffi;
pub mod host;
pub mod queue;
pub mod session;

mod error;

pub use error::{BridgeError, Result};

use std::fmt;

/// Selector latched into a render session before its surface is created.
///
/// The two index spaces are mutually exclusive per session; the enum makes
/// conflating them unrepresentable. Latching a new selection before the
/// surface exists replaces the previous one entirely, example or scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// 1-based rendering example index. 0 is the base demonstration shown
    /// when nothing was picked from the catalog.
    Example(u32),
    /// 0-based scene index. Only scene 0 is implemented.
    Scene(u32),
}

/// RGBA8 label image pushed across the boundary after surface creation.
///
/// Row-major, four bytes per pixel, channel order R,G,B,A. Handed over by
/// value; the producer keeps no reference after the call. The host consumes
/// it at most once per session and treats it as replaceable chrome.
#[derive(Clone, PartialEq, Eq)]
pub struct LabelBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LabelBitmap {
    /// Wrap a pixel buffer, enforcing `pixels.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(BridgeError::BadLabelShape {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for LabelBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The pixel buffer is 64 KiB of mostly zeroes; log its size only.
        f.debug_struct("LabelBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &format_args!("[{} bytes]", self.pixels.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shape_is_enforced() {
        assert!(LabelBitmap::new(256, 64, vec![0; 256 * 64 * 4]).is_ok());
        assert!(matches!(
            LabelBitmap::new(256, 64, vec![0; 16]),
            Err(BridgeError::BadLabelShape { len: 16, .. })
        ));
        assert!(LabelBitmap::new(0, 64, Vec::new()).is_err());
        assert!(LabelBitmap::new(256, 0, Vec::new()).is_err());
    }

    #[test]
    fn label_accessors_match_construction() {
        let label = LabelBitmap::new(2, 3, vec![7; 24]).unwrap();
        assert_eq!(label.width(), 2);
        assert_eq!(label.height(), 3);
        assert_eq!(label.pixels().len(), 24);
    }
}
