//! Subcommand argument parsers and their entry points

pub mod play;
