pub mod commands;
pub mod context;
pub mod display;
pub mod logging;
pub mod repl;
pub mod shell;

pub use context::CliContext;
pub use repl::readline;
