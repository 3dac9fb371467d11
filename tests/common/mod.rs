//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;
use tempfile::TempDir;
use viewstate::view::{ViewReducer, ViewState};
use viewstate::{Store, Subscription};

pub type Recorded = Arc<Mutex<Vec<ViewState>>>;

/// Subscribe a listener that records every snapshot it sees.
pub fn record(store: &Store<ViewReducer>) -> (Recorded, Subscription<ViewReducer>) {
    let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move |state| sink.lock().push(state.clone()));
    (seen, subscription)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Command for the built binary, pinned to an empty config so the
/// developer's own config file never leaks into tests.
pub fn viewstate_cmd(config_path: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_viewstate"));
    cmd.arg("--config").arg(config_path).env_remove("RUST_LOG");
    cmd
}
