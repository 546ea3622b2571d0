//! Screen driver: taps, back-presses, and the resulting transitions.

use genesis_nav::{route, NavAction, ScreenId, ScreenStack};
use log::debug;

/// What a tap or back-press resolved to, for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The visible screen changed.
    ScreenChanged(ScreenId),
    /// A render session must be launched for the latched selection.
    LaunchSession(genesis_bridge::SelectionMode),
    /// The application should terminate.
    Exit,
    /// Nothing happened.
    None,
}

/// The shell: one screen stack, driven from the single shell context.
#[derive(Debug, Default)]
pub struct Shell {
    stack: ScreenStack,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            stack: ScreenStack::new(),
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.stack.current()
    }

    /// Items of the current screen's list, if it is a list screen. The
    /// catalog is the sole source of tap handles.
    pub fn visible_items(&self) -> &'static [&'static str] {
        match self.stack.current() {
            ScreenId::RootMenu => &genesis_catalog::ROOT_MENU,
            ScreenId::ExampleCatalog => &genesis_catalog::EXAMPLE_TITLES,
            ScreenId::SceneCatalog => &genesis_catalog::SCENE_TITLES,
            _ => &[],
        }
    }

    /// Handle a 0-based tap on the current screen.
    pub fn tap(&mut self, position: usize) -> ShellEvent {
        match route(self.stack.current(), position) {
            NavAction::Open(ScreenId::RenderHost(mode)) => {
                debug!("launching render host with {mode:?}");
                self.stack.push(ScreenId::RenderHost(mode));
                ShellEvent::LaunchSession(mode)
            }
            NavAction::Open(screen) => {
                debug!("opening {screen:?}");
                self.stack.push(screen);
                ShellEvent::ScreenChanged(screen)
            }
            NavAction::ExitApp => ShellEvent::Exit,
            NavAction::None => ShellEvent::None,
        }
    }

    /// Handle a back-press (or a drained finish request) on the current
    /// screen. Backing out of the root menu exits.
    pub fn back(&mut self) -> ShellEvent {
        if self.stack.pop() {
            ShellEvent::ScreenChanged(self.stack.current())
        } else {
            ShellEvent::Exit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_bridge::SelectionMode;

    #[test]
    fn taps_walk_the_menu_tree() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.tap(0),
            ShellEvent::ScreenChanged(ScreenId::ExampleCatalog)
        );
        assert_eq!(shell.visible_items().len(), genesis_catalog::EXAMPLE_COUNT);

        assert_eq!(
            shell.tap(2),
            ShellEvent::LaunchSession(SelectionMode::Example(3))
        );
        assert_eq!(
            shell.current_screen(),
            ScreenId::RenderHost(SelectionMode::Example(3))
        );
    }

    #[test]
    fn back_retraces_the_stack() {
        let mut shell = Shell::new();
        shell.tap(1);
        shell.tap(3);
        assert_eq!(shell.current_screen(), ScreenId::Placeholder(3));

        assert_eq!(
            shell.back(),
            ShellEvent::ScreenChanged(ScreenId::SceneCatalog)
        );
        assert_eq!(shell.back(), ShellEvent::ScreenChanged(ScreenId::RootMenu));
        assert_eq!(shell.back(), ShellEvent::Exit);
    }

    #[test]
    fn exit_option_terminates_without_pushing() {
        let mut shell = Shell::new();
        assert_eq!(shell.tap(3), ShellEvent::Exit);
        assert_eq!(shell.current_screen(), ScreenId::RootMenu);
    }

    #[test]
    fn out_of_range_taps_are_no_ops() {
        let mut shell = Shell::new();
        assert_eq!(shell.tap(99), ShellEvent::None);
        assert_eq!(shell.current_screen(), ScreenId::RootMenu);
    }

    #[test]
    fn non_list_screens_expose_no_tap_handles() {
        let mut shell = Shell::new();
        shell.tap(2);
        assert_eq!(shell.current_screen(), ScreenId::Parameters);
        assert!(shell.visible_items().is_empty());
        assert_eq!(shell.tap(0), ShellEvent::None);
    }
}
