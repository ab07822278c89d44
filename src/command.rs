use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Continuation signal returned by every dispatched command.
///
/// The main loop keeps running on [`Flow::Continue`] and ends after the
/// iteration that produced [`Flow::Exit`]. Only the `exit` built-in
/// produces the latter; external programs always continue, whatever their
/// exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Leave the command loop after the current iteration.
    Exit,
}

/// Object-safe interface for a command implemented inside the shell itself.
///
/// Implementors carry their own name, so the registry needs no separate
/// name table. Built-ins defined in this crate get this trait through a
/// blanket adapter over their typed `argh` front-ends.
pub trait Builtin {
    /// Canonical name of the command, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Parses `args` and executes the command.
    ///
    /// Argument and execution errors are reported to standard error by the
    /// implementor; the returned [`Flow`] tells the loop what to do next.
    fn invoke(
        &self,
        args: &[&str],
        registry: &Registry,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow>;
}

/// Immutable collection of built-in commands, populated once at startup.
pub struct Registry {
    entries: Vec<Box<dyn Builtin>>,
}

impl Registry {
    pub fn new(entries: Vec<Box<dyn Builtin>>) -> Self {
        Self { entries }
    }

    /// Case-sensitive lookup by command name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Builtin> {
        self.entries
            .iter()
            .find(|b| b.name() == name)
            .map(|b| b.as_ref())
    }

    /// Names of all registered built-ins, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|b| b.name())
    }
}
