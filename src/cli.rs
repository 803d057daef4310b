use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notetag", version, about = "Notes and tags over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply migrations and serve the HTTP API (default)
    Serve,
    /// Create or upgrade the database schema, then exit
    Migrate,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
