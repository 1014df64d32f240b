//! Shell completion generation

use clap::Command;
use clap_complete::{Generator, generate};

use std::io;

/// Write completions for the given shell to stdout
pub fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
