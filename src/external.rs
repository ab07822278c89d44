use crate::env::Environment;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Command that is not a builtin.
pub(crate) struct ExternalCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    /// Resolves the first token of `argv` to an executable path.
    ///
    /// Returns `None` when `argv` is empty or no program with that name can
    /// be found.
    pub(crate) fn resolve(argv: &[String]) -> Option<Self> {
        let (name, rest) = argv.split_first()?;
        let search_paths = std::env::var_os("PATH").unwrap_or_default();
        let program = find_command_path(&search_paths, Path::new(name))?;
        Some(Self {
            program: program.into_owned().into_os_string(),
            args: rest.iter().map(OsString::from).collect(),
        })
    }

    /// Spawns the program and blocks until it terminates.
    ///
    /// The child inherits the parent's environment and standard streams and
    /// runs in the tracked working directory. Its exit status is discarded:
    /// a failing program never ends the shell.
    pub(crate) fn launch(self, env: &Environment) -> Result<()> {
        let mut child = std::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(&env.current_dir)
            .spawn()
            .with_context(|| format!("can't launch {}", Path::new(&self.program).display()))?;
        child.wait().context("wait for child failed")?;
        Ok(())
    }
}

/// Resolve a command name the way the launcher does.
///
/// A name that is a single path component is looked up in each directory of
/// `search_paths` in order. Anything containing a separator (absolute paths,
/// `./foo`, `bin/foo`) is used as a path directly. Returns the first
/// existing match, or `None`.
pub(crate) fn find_command_path<'a>(
    search_paths: &OsStr,
    program: &'a Path,
) -> Option<Cow<'a, Path>> {
    if program.as_os_str().is_empty() {
        return None;
    }
    if program.is_absolute() || program.components().count() > 1 {
        return program.exists().then_some(Cow::Borrowed(program));
    }
    std::env::split_paths(search_paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.exists())
        .map(Cow::Owned)
}
