//! Direct-call transport for the boundary contract.

use crate::queue;
use crate::LabelBitmap;

/// The three outbound operations of the boundary, for a render engine
/// linked in-process.
///
/// Calls are fire-and-forget: no return value, no acknowledgment, no retry.
/// The selection setters must run strictly before the host creates its
/// surface; the label may follow any time after it.
pub trait RenderHost {
    fn set_example_index(&mut self, index: i32);
    fn set_scene_index(&mut self, index: i32);
    fn set_back_label(&mut self, label: LabelBitmap);
}

/// Queue-backed host: forwards every call onto the process-wide command
/// queue for a consumer on the far side of an FFI boundary.
#[derive(Debug, Default)]
pub struct QueueHost;

impl RenderHost for QueueHost {
    fn set_example_index(&mut self, index: i32) {
        queue::set_example_index(index);
    }

    fn set_scene_index(&mut self, index: i32) {
        queue::set_scene_index(index);
    }

    fn set_back_label(&mut self, label: LabelBitmap) {
        queue::set_back_label(label);
    }
}
