//! # crossword-solver
//!
//! Fills a crossword grid from a word list. The grid is read from a structure
//! file (one row per line, `_` for a fillable cell, anything else blocked) and
//! every maximal run of two or more fillable cells becomes a slot needing one
//! word. Words may be used once, must fit their slot's length, and must agree
//! with every slot they cross.
//!
//! ## Usage
//!
//! ```sh
//! crossword-solver solve --structure data/structure1.structure --words data/words1.txt
//! crossword-solver solve --structure grid.structure --words words.txt --output grid.txt --stats
//! crossword-solver dir --path data --words data/words1.txt --solver parallel
//! crossword-solver completions zsh
//! ```
//!
//! ### Common options
//!
//! -   `-d, --debug`: log preprocessing and search progress.
//! -   `-v, --verify`: re-check the returned fill against every constraint.
//! -   `-s, --stats`: print preprocessing, search and memory statistics.
//! -   `-p, --print-solution`: list the word placed in every slot.
//! -   `--solver <backtracking|parallel>`
//! -   `--variable-selection <mrv|fixed|random>` and `--seed <n>`
//! -   `--value-ordering <lcv|elimination|domain>`
//! -   `--queue <fifo|lifo>`: AC-3 work list.

use crate::command_line::cli::{Cli, Commands, solve_dir, solve_files};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::info;

mod command_line;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    let debug = cli.command.common().is_some_and(|common| common.debug);
    env_logger::Builder::from_env(Env::default().default_filter_or(if debug {
        "debug"
    } else {
        "info"
    }))
    .init();

    let result = match cli.command {
        Commands::Solve {
            structure,
            words,
            output,
            common,
        } => solve_files(&structure, &words, output.as_deref(), &common),
        Commands::Dir {
            path,
            words,
            common,
        } => solve_dir(&path, &words, &common).map(|count| {
            info!("Solved {count} structure files");
        }),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
