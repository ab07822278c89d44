use crate::SHELL_NAME;
use crate::command::{Builtin, Flow, Registry};
use crate::env::Environment;
use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// directly in-process without spawning a child process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cd".
    fn name() -> &'static str;

    /// Executes the command against the provided output stream and environment.
    ///
    /// Whatever the outcome, the returned [`Flow`] tells the main loop
    /// whether to keep running.
    fn execute(
        self,
        registry: &Registry,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow>;
}

/// Registry entry adapting a typed [`BuiltinCommand`] to the object-safe
/// [`Builtin`] interface.
pub(crate) struct Entry<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: BuiltinCommand> Builtin for Entry<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn invoke(
        &self,
        args: &[&str],
        registry: &Registry,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        match T::from_args(&[T::name()], args) {
            Ok(cmd) => match cmd.execute(registry, stdout, env) {
                Ok(flow) => Ok(flow),
                Err(e) => {
                    eprintln!("{}: {:#}", SHELL_NAME, e);
                    Ok(Flow::Continue)
                }
            },
            // Usage errors go to stderr; help requested via --help goes to
            // stdout. Neither ends the loop.
            Err(EarlyExit { output, status }) => {
                if status.is_err() {
                    eprintln!("{}: {}", SHELL_NAME, output.trim_end());
                } else {
                    writeln!(stdout, "{}", output.trim_end())?;
                }
                Ok(Flow::Continue)
            }
        }
    }
}

/// Registry with the stock built-ins in their canonical order.
pub(crate) fn default_registry() -> Registry {
    Registry::new(vec![
        Box::new(Entry::<Cd>::default()),
        Box::new(Entry::<Help>::default()),
        Box::new(Entry::<Exit>::default()),
    ])
}

#[derive(FromArgs)]
/// Change the current working directory.
pub struct Cd {
    #[argh(positional)]
    /// directory to switch to; absolute or relative to the current directory.
    pub target: String,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn execute(
        self,
        _registry: &Registry,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let target = PathBuf::from(&self.target);
        let new_dir = if target.is_absolute() {
            target
        } else {
            env.current_dir.join(target)
        };

        let canonical =
            fs::canonicalize(&new_dir).with_context(|| format!("cd: {}", new_dir.display()))?;
        std::env::set_current_dir(&canonical)
            .with_context(|| format!("cd: can't change to {}", canonical.display()))?;
        env.current_dir = canonical;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// List the commands built into the shell.
pub struct Help {
    #[argh(positional, greedy)]
    /// ignored; help takes no arguments.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(
        self,
        registry: &Registry,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        writeln!(stdout, "Type a program name and its arguments, then press enter.")?;
        writeln!(stdout, "The following commands are built in:")?;
        for name in registry.names() {
            writeln!(stdout, "  {}", name)?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Leave the shell.
pub struct Exit {
    #[argh(positional, greedy)]
    /// ignored; the shell always exits successfully.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(
        self,
        _registry: &Registry,
        _stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        Ok(Flow::Exit)
    }
}
