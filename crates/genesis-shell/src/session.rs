//! Render session launch and teardown.
//!
//! The launch sequence mirrors the boundary contract: latch the selection,
//! bring the host surface up (the host reads the selection exactly once,
//! there), then rasterize and push the back label. Ordering is enforced by
//! [`RenderSession`]; a lost race surfaces as an error instead of a wrong
//! scene.

use anyhow::{Context, Result};
use genesis_bridge::host::RenderHost;
use genesis_bridge::queue::{self, HostCallback};
use genesis_bridge::session::RenderSession;
use genesis_bridge::SelectionMode;
use genesis_config::GenesisConfig;
use log::info;

use crate::label;
use crate::persistence::PreferencesStore;

/// Parameters fixed at session launch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    pub mode: SelectionMode,
    /// Free rotation, read once from the preference store at launch. The
    /// shell applies it; the host never sees it.
    pub rotation_enabled: bool,
}

/// Latch `mode` into the host and drive the hand-off up to the run phase.
pub fn launch(
    mode: SelectionMode,
    prefs: &PreferencesStore,
    config: &GenesisConfig,
    host: &mut dyn RenderHost,
    session: &mut RenderSession,
) -> Result<SessionParams> {
    let params = SessionParams {
        mode,
        rotation_enabled: prefs.rotation_enabled(),
    };

    session.set_mode(mode).context("latching selection mode")?;
    match mode {
        SelectionMode::Example(index) => host.set_example_index(index as i32),
        SelectionMode::Scene(index) => host.set_scene_index(index as i32),
    }

    // The host surface comes up and reads the latched selection, once.
    let active = session.surface_created().context("creating host surface")?;
    info!(
        "render session started: {active:?} (rotation {})",
        if params.rotation_enabled { "free" } else { "locked" }
    );

    // Rasterization needs the window to exist; the label follows it.
    let font = label::load_label_font(&config.label);
    let text = config.label.text.as_deref().unwrap_or(label::LABEL_TEXT);
    let bitmap = label::render_label(font.as_ref(), text);
    session.push_label(&bitmap).context("pushing back label")?;
    host.set_back_label(bitmap);

    session.mark_running().context("entering run phase")?;
    Ok(params)
}

/// Drain pending host callbacks on the shell context. Returns `true` if a
/// finish request was seen.
pub fn drain_finish_requests() -> bool {
    let mut finish = false;
    while let Some(callback) = queue::pop_host_callback() {
        match callback {
            HostCallback::FinishScreen => finish = true,
        }
    }
    finish
}
