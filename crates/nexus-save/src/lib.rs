//! SAVE_CODE compiler for Nexus Hub.
//!
//! Turns a [`SaveSnapshot`] (user, campaign, sessions, generation time) into
//! one canonical text document that can be pasted into any AI chat to
//! restore campaign context. The same snapshot always compiles to the same
//! bytes.
//!
//! The [`cards`] module renders the short on-screen summaries used by
//! dashboards; those are for display only and never appear in a SAVE_CODE.

pub mod cards;
pub mod compiler;
pub mod config;
pub mod format;
pub mod sections;
pub mod snapshot;

pub use compiler::{SaveCompiler, compile};
pub use config::SaveConfig;
pub use snapshot::SaveSnapshot;
