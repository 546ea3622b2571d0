//! Process-wide queues carrying the boundary contract across threads.
//!
//! Outbound commands are pushed by the shell and drained by the host side;
//! the host reads the latched selection when its surface comes up, so a
//! command arriving later misses that read. Inbound callbacks go the other
//! way and must be drained on the shell context only; the render thread
//! never touches screen state directly.
//!
//! The queues are lazily-initialized shared state with init-once semantics
//! and no teardown; the bridge lives for the process lifetime.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use crate::LabelBitmap;

/// Outbound commands from the shell to the render host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Latch the 1-based example index for the next session.
    SetExampleIndex(i32),
    /// Latch the 0-based scene index for the next session.
    SetSceneIndex(i32),
    /// Hand over the back-label bitmap.
    SetBackLabel(LabelBitmap),
}

/// Inbound requests from the render host to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCallback {
    /// Close the current screen and return to the menu. No payload.
    FinishScreen,
}

/// One command queue and one callback queue, as a unit so tests can run
/// against a private instance instead of the process-wide one.
#[derive(Debug, Default)]
pub struct BridgeQueues {
    commands: Mutex<VecDeque<HostCommand>>,
    callbacks: Mutex<VecDeque<HostCallback>>,
}

impl BridgeQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_command(&self, command: HostCommand) {
        if let Ok(mut q) = self.commands.lock() {
            q.push_back(command);
        }
    }

    pub fn pop_command(&self) -> Option<HostCommand> {
        self.commands.lock().ok()?.pop_front()
    }

    pub fn has_pending_commands(&self) -> bool {
        self.commands.lock().map(|q| !q.is_empty()).unwrap_or(false)
    }

    pub fn push_callback(&self, callback: HostCallback) {
        if let Ok(mut q) = self.callbacks.lock() {
            q.push_back(callback);
        }
    }

    pub fn pop_callback(&self) -> Option<HostCallback> {
        self.callbacks.lock().ok()?.pop_front()
    }

    pub fn has_pending_callbacks(&self) -> bool {
        self.callbacks.lock().map(|q| !q.is_empty()).unwrap_or(false)
    }
}

static QUEUES: OnceLock<BridgeQueues> = OnceLock::new();

fn queues() -> &'static BridgeQueues {
    QUEUES.get_or_init(BridgeQueues::new)
}

/// Latch the example selection for the next render session.
/// Fire-and-forget: no acknowledgment, no retry.
pub fn set_example_index(index: i32) {
    log::info!("bridge: example index {index} latched for the next session");
    queues().push_command(HostCommand::SetExampleIndex(index));
}

/// Latch the scene selection for the next render session.
/// Fire-and-forget: no acknowledgment, no retry.
pub fn set_scene_index(index: i32) {
    log::info!("bridge: scene index {index} latched for the next session");
    queues().push_command(HostCommand::SetSceneIndex(index));
}

/// Hand the back-label bitmap to the host. The shell keeps no reference.
pub fn set_back_label(label: LabelBitmap) {
    log::info!(
        "bridge: back label {}x{} handed over",
        label.width(),
        label.height()
    );
    queues().push_command(HostCommand::SetBackLabel(label));
}

/// Pop the next outbound command. Called by the host side.
pub fn pop_host_command() -> Option<HostCommand> {
    queues().pop_command()
}

pub fn has_pending_commands() -> bool {
    queues().has_pending_commands()
}

/// Ask the shell to close the current screen. Safe to call from the render
/// thread; the request only takes effect once the shell drains it.
pub fn request_return_to_menu() {
    log::info!("bridge: return-to-menu requested");
    queues().push_callback(HostCallback::FinishScreen);
}

/// Pop the next inbound callback. Shell context only.
pub fn pop_host_callback() -> Option<HostCallback> {
    queues().pop_callback()
}

pub fn has_pending_callbacks() -> bool {
    queues().has_pending_callbacks()
}
