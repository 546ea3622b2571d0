//! Scripted driver for the Genesis shell.
//!
//! Runs one render session end to end over the queue transport: resolve the
//! selection from config/env (default: the base demonstration), latch it,
//! bring the session up, then play the host side by draining the command
//! queue and requesting the return to the menu.

use anyhow::Result;
use genesis_bridge::host::QueueHost;
use genesis_bridge::queue;
use genesis_bridge::session::RenderSession;
use genesis_bridge::SelectionMode;
use genesis_config::GenesisConfig;
use genesis_shell::persistence::PreferencesStore;
use genesis_shell::{session, Shell, ShellEvent};
use log::{info, warn};

fn main() -> Result<()> {
    env_logger::init();

    let config = GenesisConfig::load();
    let mut prefs = PreferencesStore::load()?;
    let mut shell = Shell::new();

    for (position, title) in shell.visible_items().iter().enumerate() {
        info!("menu [{position}] {title}");
    }

    let mode = resolve_selection(&config, &mut shell);

    let mut host = QueueHost;
    let mut session_state = RenderSession::new();
    let params = session::launch(mode, &prefs, &config, &mut host, &mut session_state)?;
    info!("session parameters: {params:?}");

    // Stand in for the engine on the far side of the queue: consume what the
    // shell latched, then ask to come back to the menu.
    while let Some(command) = queue::pop_host_command() {
        info!("host consumed {command:?}");
    }
    queue::request_return_to_menu();

    if session::drain_finish_requests() {
        session_state.terminate();
        shell.back();
        info!("session closed, back on {:?}", shell.current_screen());
    }

    prefs.save()?;
    Ok(())
}

/// Resolve the configured selection by walking the menus the way a tap
/// sequence would; no selection means the base demonstration, launched
/// without touching the menu.
fn resolve_selection(config: &GenesisConfig, shell: &mut Shell) -> SelectionMode {
    let taps = if let Some(index) = config.shell.scene {
        Some((1, index as usize))
    } else if let Some(index) = config.shell.example {
        (index >= 1).then(|| (0, index as usize - 1))
    } else {
        None
    };

    let Some((root_tap, catalog_tap)) = taps else {
        return SelectionMode::Example(0);
    };

    shell.tap(root_tap);
    match shell.tap(catalog_tap) {
        ShellEvent::LaunchSession(mode) => mode,
        event => {
            warn!(
                "configured selection did not resolve to a session ({event:?}); \
                 running the base demonstration"
            );
            SelectionMode::Example(0)
        }
    }
}
