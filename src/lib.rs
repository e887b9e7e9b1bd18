//! Account document tree and file-store sync core.
//!
//! The host shell owns the window, the rendering widget, and the real
//! backend clients; this crate owns the tree construction, expansion state,
//! row-action routing, and sync outcome handling behind them. See
//! [`commands`] for the functions a shell binds.

pub mod actions;
pub mod commands;
pub mod devtools;
pub mod expansion;
pub mod filestore;
pub mod notification;
pub mod provider;
pub mod state;
pub mod tree;
pub mod types;
