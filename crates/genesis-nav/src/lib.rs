//! Screen routing for the Genesis shell.
//!
//! Routing is a total function over closed, statically known option sets:
//! no error path, no I/O. Taps outside an enumerated range are no-ops.

pub mod stack;

pub use stack::ScreenStack;

use genesis_bridge::SelectionMode;
use genesis_catalog::{EXAMPLE_COUNT, IMPLEMENTED_SCENES, SCENE_COUNT};

/// Screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    RootMenu,
    ExampleCatalog,
    SceneCatalog,
    Parameters,
    /// Placeholder for an unimplemented scene; carries its 0-based index
    /// as a marker only; the bridge is never invoked for it.
    Placeholder(u32),
    /// The native render host, latched to a selection.
    RenderHost(SelectionMode),
}

/// Outcome of a tap on a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Push a new screen.
    Open(ScreenId),
    /// Terminate the application.
    ExitApp,
    /// Tap outside the enumerated set; nothing happens.
    None,
}

/// Resolve a 0-based tap position on `screen` to a navigation action.
pub fn route(screen: ScreenId, position: usize) -> NavAction {
    match screen {
        ScreenId::RootMenu => route_root_menu(position),
        ScreenId::ExampleCatalog => route_example_catalog(position),
        ScreenId::SceneCatalog => route_scene_catalog(position),
        // Non-list screens have no tap handles.
        _ => NavAction::None,
    }
}

fn route_root_menu(position: usize) -> NavAction {
    match position {
        0 => NavAction::Open(ScreenId::ExampleCatalog),
        1 => NavAction::Open(ScreenId::SceneCatalog),
        2 => NavAction::Open(ScreenId::Parameters),
        3 => NavAction::ExitApp,
        _ => NavAction::None,
    }
}

fn route_example_catalog(position: usize) -> NavAction {
    if position < EXAMPLE_COUNT {
        // Position 0 is example 1; index 0 stays reserved for the base
        // demonstration.
        NavAction::Open(ScreenId::RenderHost(SelectionMode::Example(
            position as u32 + 1,
        )))
    } else {
        NavAction::None
    }
}

fn route_scene_catalog(position: usize) -> NavAction {
    if position < IMPLEMENTED_SCENES {
        NavAction::Open(ScreenId::RenderHost(SelectionMode::Scene(position as u32)))
    } else if position < SCENE_COUNT {
        NavAction::Open(ScreenId::Placeholder(position as u32))
    } else {
        NavAction::None
    }
}
