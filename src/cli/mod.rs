//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session.

pub mod dashboard;
pub mod session;
pub mod setup;
pub mod shell;

pub use dashboard::write_dashboard;
pub use session::{demo_session, handle_demo, handle_session, resolve_today};
pub use setup::{handle_config, handle_init};
pub use shell::{run_shell, ShellCommand};
