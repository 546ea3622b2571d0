//! Per-session ordering state machine for the host hand-off.
//!
//! The host reads the active selection exactly once, when its surface is
//! created; the mode must therefore be latched strictly before
//! [`RenderSession::surface_created`]. The original contract let a late
//! write vanish silently; here it is rejected instead, so a lost race
//! surfaces as an error rather than a wrong scene.

use crate::error::{BridgeError, Result};
use crate::{LabelBitmap, SelectionMode};

/// Lifecycle phase of one render session.
///
/// `Terminated` is reachable from every phase and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    ModeSet,
    SurfaceReady,
    Running,
    Terminated,
}

/// Tracks one render session from selection latch to teardown.
#[derive(Debug)]
pub struct RenderSession {
    phase: SessionPhase,
    mode: Option<SelectionMode>,
    label_pushed: bool,
}

impl RenderSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            mode: None,
            label_pushed: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The latched selection, if any.
    pub fn mode(&self) -> Option<SelectionMode> {
        self.mode
    }

    pub fn label_pushed(&self) -> bool {
        self.label_pushed
    }

    /// Latch the selection for this session. Re-latching before the surface
    /// exists is last-write-wins; afterwards the write is stale and rejected.
    pub fn set_mode(&mut self, mode: SelectionMode) -> Result<()> {
        match self.phase {
            SessionPhase::Uninitialized | SessionPhase::ModeSet => {
                self.mode = Some(mode);
                self.phase = SessionPhase::ModeSet;
                Ok(())
            }
            SessionPhase::Terminated => Err(BridgeError::Terminated),
            SessionPhase::SurfaceReady | SessionPhase::Running => Err(BridgeError::StaleModeSet),
        }
    }

    /// The host surface exists. Returns the latched selection, the one
    /// value the host initializes from.
    pub fn surface_created(&mut self) -> Result<SelectionMode> {
        match self.phase {
            SessionPhase::ModeSet => {
                self.phase = SessionPhase::SurfaceReady;
                self.mode.ok_or(BridgeError::ModeNotSet)
            }
            SessionPhase::Uninitialized => Err(BridgeError::ModeNotSet),
            SessionPhase::Terminated => Err(BridgeError::Terminated),
            SessionPhase::SurfaceReady | SessionPhase::Running => {
                Err(BridgeError::InvalidPhase("surface already created"))
            }
        }
    }

    /// Record the label push; valid any time at or after surface creation.
    pub fn push_label(&mut self, label: &LabelBitmap) -> Result<()> {
        match self.phase {
            SessionPhase::SurfaceReady | SessionPhase::Running => {
                self.label_pushed = true;
                log::debug!(
                    "back label pushed ({}x{})",
                    label.width(),
                    label.height()
                );
                Ok(())
            }
            SessionPhase::Terminated => Err(BridgeError::Terminated),
            SessionPhase::Uninitialized | SessionPhase::ModeSet => {
                Err(BridgeError::InvalidPhase("label pushed before surface creation"))
            }
        }
    }

    /// First frame is up; the session is live.
    pub fn mark_running(&mut self) -> Result<()> {
        match self.phase {
            SessionPhase::SurfaceReady | SessionPhase::Running => {
                self.phase = SessionPhase::Running;
                Ok(())
            }
            SessionPhase::Terminated => Err(BridgeError::Terminated),
            SessionPhase::Uninitialized | SessionPhase::ModeSet => {
                Err(BridgeError::InvalidPhase("running before surface creation"))
            }
        }
    }

    /// Tear the session down. Valid in every phase; absorbing.
    pub fn terminate(&mut self) {
        self.phase = SessionPhase::Terminated;
    }
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> LabelBitmap {
        LabelBitmap::new(256, 64, vec![0; 256 * 64 * 4]).unwrap()
    }

    #[test]
    fn full_session_walks_the_phases_in_order() {
        let mut session = RenderSession::new();
        assert_eq!(session.phase(), SessionPhase::Uninitialized);

        session.set_mode(SelectionMode::Example(3)).unwrap();
        assert_eq!(session.phase(), SessionPhase::ModeSet);

        assert_eq!(session.surface_created().unwrap(), SelectionMode::Example(3));
        assert_eq!(session.phase(), SessionPhase::SurfaceReady);

        session.push_label(&label()).unwrap();
        assert!(session.label_pushed());

        session.mark_running().unwrap();
        assert_eq!(session.phase(), SessionPhase::Running);

        session.terminate();
        assert_eq!(session.phase(), SessionPhase::Terminated);
    }

    #[test]
    fn surface_without_mode_is_an_error() {
        let mut session = RenderSession::new();
        assert_eq!(session.surface_created(), Err(BridgeError::ModeNotSet));
    }

    #[test]
    fn stale_mode_write_is_rejected() {
        let mut session = RenderSession::new();
        session.set_mode(SelectionMode::Scene(0)).unwrap();
        session.surface_created().unwrap();
        assert_eq!(
            session.set_mode(SelectionMode::Example(1)),
            Err(BridgeError::StaleModeSet)
        );
        // The latched selection is unchanged.
        assert_eq!(session.mode(), Some(SelectionMode::Scene(0)));
    }

    #[test]
    fn relatching_before_surface_is_last_write_wins() {
        let mut session = RenderSession::new();
        session.set_mode(SelectionMode::Example(7)).unwrap();
        session.set_mode(SelectionMode::Scene(0)).unwrap();
        assert_eq!(session.surface_created().unwrap(), SelectionMode::Scene(0));
    }

    #[test]
    fn label_before_surface_is_rejected() {
        let mut session = RenderSession::new();
        session.set_mode(SelectionMode::Example(1)).unwrap();
        assert!(matches!(
            session.push_label(&label()),
            Err(BridgeError::InvalidPhase(_))
        ));
        assert!(!session.label_pushed());
    }

    #[test]
    fn label_is_accepted_while_running() {
        let mut session = RenderSession::new();
        session.set_mode(SelectionMode::Example(1)).unwrap();
        session.surface_created().unwrap();
        session.mark_running().unwrap();
        session.push_label(&label()).unwrap();
        assert!(session.label_pushed());
    }

    #[test]
    fn termination_is_absorbing() {
        let mut session = RenderSession::new();
        session.terminate();
        assert_eq!(
            session.set_mode(SelectionMode::Example(1)),
            Err(BridgeError::Terminated)
        );
        assert_eq!(session.surface_created(), Err(BridgeError::Terminated));
        assert_eq!(session.mark_running(), Err(BridgeError::Terminated));
        session.terminate();
        assert_eq!(session.phase(), SessionPhase::Terminated);
    }
}
