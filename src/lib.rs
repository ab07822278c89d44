//! A minimal interactive command-line shell.
//!
//! The whole crate is one read-parse-execute loop: a prompt line is read
//! from standard input, split into whitespace-delimited tokens, and either
//! routed to a built-in command (`cd`, `help`, `exit`) or launched as an
//! external program located through `PATH`. There is no pipelining,
//! redirection, quoting, globbing or job control.
//!
//! The main entry point is [`Interpreter`], which owns the built-in
//! [`Registry`](command::Registry) and the process
//! [`Environment`](env::Environment) and drives the loop. The public
//! modules [`command`] and [`env`] expose the traits and types needed to
//! register additional built-ins.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
mod lexer;

#[cfg(test)]
mod test_support;

/// Prefix for every diagnostic the shell writes to standard error.
pub(crate) const SHELL_NAME: &str = "minish";

pub use interpreter::Interpreter;
