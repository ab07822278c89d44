use std::env as stdenv;
use std::path::PathBuf;

/// Mutable process state that outlives a single loop iteration.
///
/// The working directory is the only thing a command can change that later
/// iterations observe. It mirrors the real process working directory; `cd`
/// updates both together.
#[derive(Debug, Clone)]
pub struct Environment {
    pub current_dir: PathBuf,
}

impl Environment {
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { current_dir }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
