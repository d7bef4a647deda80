//! # backtrack
//!
//! `backtrack` is a command-line front end to the `backtracking` crate. Each
//! subcommand builds one of the classic puzzles, runs the shared depth-first
//! search on it and prints what it found.
//!
//! ## Usage
//!
//! ```sh
//! backtrack <SUBCOMMAND> [ARGS] [OPTIONS]
//! ```
//!
//! ### Subcommands
//!
//! -   `queens -n <N>`: every placement of N non-attacking queens.
//! -   `sudoku --path <FILE|DIR>`: solve one board, or every `.sudoku` and
//!     `.txt` board below a directory.
//! -   `word-search --path <FILE> -w <WORD>`: trace a word on a letter grid.
//! -   `subset-sum --nums 1,2,3 -t <TARGET>`: subsets adding up to a target.
//! -   `combination-sum --candidates 2,3,6,7 -t <TARGET>`: multisets of the
//!     candidates adding up to a target.
//! -   `permutations --items a,b,c`: every ordering.
//! -   `maze --path <FILE>`: every path through a 0/1 maze.
//! -   `hamiltonian --path <FILE>`: a Hamiltonian cycle of a 0/1 adjacency matrix.
//! -   `knights-tour -n <N>`: a knight's tour from the corner.
//! -   `palindromes -t <TEXT>`: every palindrome partition.
//! -   `parentheses -n <N>`: every balanced string of N pairs.
//! -   `pattern --text <TEXT> -p <PATTERN>`: whole-string `.`/`*` matching.
//! -   `magic-square -n <N>`: an N x N magic square.
//! -   `completions <SHELL>`: shell completion script.
//!
//! ### Common options
//!
//! -   `-d, --debug`: debug-level logging of the search.
//! -   `--verify <BOOL>`: check solutions with an independent verifier (default: `true`).
//! -   `-s, --stats`: print search statistics and memory usage.
//! -   `-l, --limit <K>`: stop after K solutions.
//!
//! ## Example invocations
//!
//! ```sh
//! backtrack queens -n 8 --limit 3 --stats
//! backtrack sudoku --path puzzles/
//! backtrack pattern --text mississippi -p 'mis*is*ip*.'
//! ```

use crate::command_line::cli::{Cli, dispatch};
use clap::Parser;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.command.common().is_some_and(|common| common.debug));

    if let Err(e) = dispatch(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
