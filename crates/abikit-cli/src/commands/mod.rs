//! CLI subcommands

pub mod encode;
