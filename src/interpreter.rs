use crate::SHELL_NAME;
use crate::builtin;
use crate::command::{Flow, Registry};
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::lexer;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

const PROMPT: &str = "> ";

/// The shell's read-parse-execute loop.
///
/// Holds the built-in [`Registry`] and the mutable [`Environment`];
/// everything else (the input line, the token list) lives and dies with a
/// single loop iteration.
pub struct Interpreter {
    env: Environment,
    registry: Registry,
}

impl Interpreter {
    /// Creates an interpreter with a custom set of built-ins.
    pub fn new(registry: Registry) -> Self {
        Self {
            env: Environment::new(),
            registry,
        }
    }

    /// Tokenizes one input line and dispatches it.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) -> Result<Flow> {
        let argv = lexer::split_into_tokens(line);
        self.dispatch(&argv, stdout)
    }

    /// Routes a token list to a built-in or an external program.
    ///
    /// An empty list is a no-op. A first token that matches no built-in is
    /// resolved against `PATH`; resolution and launch failures are reported
    /// to standard error and the loop keeps going. The child's exit status
    /// is never inspected.
    pub fn dispatch(&mut self, argv: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let Some(name) = argv.first() else {
            return Ok(Flow::Continue);
        };

        if let Some(cmd) = self.registry.lookup(name) {
            let args: Vec<&str> = argv[1..].iter().map(String::as_str).collect();
            return cmd.invoke(&args, &self.registry, stdout, &mut self.env);
        }

        match ExternalCommand::resolve(argv) {
            Some(cmd) => {
                if let Err(e) = cmd.launch(&self.env) {
                    eprintln!("{}: {:#}", SHELL_NAME, e);
                }
            }
            None => eprintln!("{}: {}: command not found", SHELL_NAME, name),
        }
        Ok(Flow::Continue)
    }

    /// Runs the interactive loop until `exit` or end of input.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    match self.execute_line(&line, &mut std::io::stdout()) {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Exit) => break,
                        Err(e) => eprintln!("{}: {:#}", SHELL_NAME, e),
                    }
                }
                // Ctrl-C drops the pending line and prompts again.
                Err(ReadlineError::Interrupted) => continue,
                // Closed input ends the session like `exit` does.
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Interpreter with the stock built-ins `cd`, `help` and `exit`.
    fn default() -> Self {
        Self::new(builtin::default_registry())
    }
}
