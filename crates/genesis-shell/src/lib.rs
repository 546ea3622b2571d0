//! The Genesis application shell.
//!
//! Wires the selection catalogs and the navigation controller to the render
//! host bridge, owns preference persistence and the back-label bitmap, and
//! drives render sessions from launch to finish. Everything here runs on the
//! single shell-owned context; the only thing that ever crosses from the
//! render side is the queued return-to-menu request.

pub mod label;
pub mod persistence;
pub mod screens;
pub mod session;

pub use screens::{Shell, ShellEvent};
