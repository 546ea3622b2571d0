//! C ABI exports for a platform embedder driving the bridge.
//!
//! These functions mirror the three outbound entry points and the inbound
//! finish request. They are exported as C symbols for use from a native
//! host shim (JNI glue, Objective-C, ...).

use std::slice;

use crate::queue;
use crate::LabelBitmap;

/// Latch the 1-based example index for the next render session.
///
/// Must be called strictly before the host surface is created; the host
/// reads the selection only at initialization.
#[unsafe(no_mangle)]
pub extern "C" fn genesis_set_example_index(index: i32) {
    let _ = env_logger::try_init();
    queue::set_example_index(index);
}

/// Latch the 0-based scene index for the next render session.
///
/// Must be called strictly before the host surface is created.
#[unsafe(no_mangle)]
pub extern "C" fn genesis_set_scene_index(index: i32) {
    let _ = env_logger::try_init();
    queue::set_scene_index(index);
}

/// Hand over the back-label bitmap: `len` readable bytes at `pixels`,
/// row-major RGBA with `len == width * height * 4`. The buffer is copied.
///
/// # Returns
/// `true` if the buffer was accepted, `false` on a null pointer or a shape
/// mismatch.
#[unsafe(no_mangle)]
pub extern "C" fn genesis_set_back_label(
    width: u32,
    height: u32,
    pixels: *const u8,
    len: usize,
) -> bool {
    if pixels.is_null() {
        log::error!("genesis_set_back_label: pixels is null");
        return false;
    }

    let bytes = unsafe { slice::from_raw_parts(pixels, len) };
    match LabelBitmap::new(width, height, bytes.to_vec()) {
        Ok(label) => {
            queue::set_back_label(label);
            true
        }
        Err(e) => {
            log::error!("genesis_set_back_label: {e}");
            false
        }
    }
}

/// Ask the shell to close the current screen. Safe from the render thread;
/// the shell picks the request up on its own context.
#[unsafe(no_mangle)]
pub extern "C" fn genesis_request_finish() {
    queue::request_return_to_menu();
}

/// Poll for a pending finish request. Shell context only; drains one
/// request per call.
#[unsafe(no_mangle)]
pub extern "C" fn genesis_poll_finish_request() -> bool {
    queue::pop_host_callback().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misshapen_labels_are_refused() {
        assert!(!genesis_set_back_label(256, 64, std::ptr::null(), 0));

        let pixels = vec![0u8; 16];
        assert!(!genesis_set_back_label(256, 64, pixels.as_ptr(), pixels.len()));
    }

    #[test]
    fn finish_request_round_trips_through_the_poll() {
        genesis_request_finish();
        assert!(genesis_poll_finish_request());
        assert!(!genesis_poll_finish_request());
    }
}
