#![allow(clippy::cast_precision_loss)]

use backtracking::input::{parse_char_grid_file, parse_int_grid_file, parse_sudoku_file};
use backtracking::problems::combination_sum::CombinationSum;
use backtracking::problems::hamiltonian::{HamiltonianCycle, is_hamiltonian_cycle};
use backtracking::problems::knights_tour::{KnightsTour, is_valid_tour};
use backtracking::problems::magic_square::{MagicSquare, is_magic};
use backtracking::problems::n_queens::{NQueens, is_valid_placement};
use backtracking::problems::palindrome::PalindromePartitioning;
use backtracking::problems::parentheses::Parentheses;
use backtracking::problems::pattern::PatternMatch;
use backtracking::problems::permutations::Permutations;
use backtracking::problems::rat_in_maze::{RatInMaze, is_maze_path};
use backtracking::problems::subset_sum::SubsetSum;
use backtracking::problems::sudoku::{Sudoku, is_solved};
use backtracking::problems::word_search::WordSearch;
use backtracking::problems::Cell;
use backtracking::search::{Backtracker, Problem, SearchStats};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface of the puzzle solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "backtrack",
    version,
    about = "Classic puzzles solved by backtracking search"
)]
pub(crate) struct Cli {
    /// The puzzle to solve.
    #[clap(subcommand)]
    pub command: Commands,
}

/// Enumerates the puzzles the tool can solve.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Place N queens on an N x N board so that none attack each other.
    Queens {
        /// Board size.
        #[arg(short, long)]
        n: usize,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a Sudoku file, or every `.sudoku` and `.txt` file below a directory.
    Sudoku {
        /// Path to the board file or directory. Boards are one row per line,
        /// `0` or `.` for empty cells.
        #[arg(long)]
        path: PathBuf,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Trace a word through adjacent cells of a letter grid.
    WordSearch {
        /// Path to the letter grid, one row per line.
        #[arg(long)]
        path: PathBuf,

        /// The word to find.
        #[arg(short, long)]
        word: String,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Find every subset of the numbers that adds up to the target.
    SubsetSum {
        /// Comma-separated numbers (e.g. "1,2,3").
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        nums: Vec<i64>,

        /// Target sum.
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Find every multiset of the candidates that adds up to the target.
    CombinationSum {
        /// Comma-separated positive candidates (e.g. "2,3,6,7").
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        candidates: Vec<i64>,

        /// Target sum.
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// List every ordering of the items.
    Permutations {
        /// Comma-separated items (e.g. "a,b,c").
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<String>,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Find every path from the top-left to the bottom-right cell of a maze.
    Maze {
        /// Path to the maze, a square grid of 0 (wall) and 1 (open).
        #[arg(long)]
        path: PathBuf,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Find a Hamiltonian cycle starting at vertex 0.
    Hamiltonian {
        /// Path to the adjacency matrix, a square grid of 0 and 1.
        #[arg(long)]
        path: PathBuf,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Find a knight's tour from the top-left corner.
    KnightsTour {
        /// Board size.
        #[arg(short, long)]
        n: usize,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Split a string into palindromes in every possible way.
    Palindromes {
        /// The string to split.
        #[arg(short, long)]
        text: String,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// List every balanced string of N pairs of parentheses.
    Parentheses {
        /// Number of pairs.
        #[arg(short, long)]
        n: usize,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Match a whole string against a pattern with `.` and `*`.
    Pattern {
        /// The text to match.
        #[arg(long)]
        text: String,

        /// The pattern.
        #[arg(short, long)]
        pattern: String,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Find an N x N magic square.
    MagicSquare {
        /// Side length.
        #[arg(short, long)]
        n: usize,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// The shared options, if the command runs a search.
    pub(crate) const fn common(&self) -> Option<&CommonOptions> {
        match self {
            Self::Queens { common, .. }
            | Self::Sudoku { common, .. }
            | Self::WordSearch { common, .. }
            | Self::SubsetSum { common, .. }
            | Self::CombinationSum { common, .. }
            | Self::Permutations { common, .. }
            | Self::Maze { common, .. }
            | Self::Hamiltonian { common, .. }
            | Self::KnightsTour { common, .. }
            | Self::Palindromes { common, .. }
            | Self::Parentheses { common, .. }
            | Self::Pattern { common, .. }
            | Self::MagicSquare { common, .. } => Some(common),
            Self::Completions { .. } => None,
        }
    }
}

/// Defines command-line options shared by every puzzle.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Log the search at debug level (`RUST_LOG` still takes precedence).
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check every reported solution with an independent verifier.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub(crate) verify: bool,

    /// Print search statistics and memory usage after solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// Stop after this many solutions. Only affects puzzles that list all
    /// their solutions.
    #[arg(short, long)]
    pub(crate) limit: Option<usize>,
}

/// A finished search: its result, statistics and timing.
#[derive(Debug)]
pub(crate) struct Outcome<T> {
    pub(crate) name: String,
    pub(crate) result: T,
    pub(crate) stats: SearchStats,
    pub(crate) elapsed: Duration,
}

/// Lists solutions, honouring `--limit`.
pub(crate) fn search_all<P: Problem>(problem: P, common: &CommonOptions) -> Outcome<Vec<P::Solution>> {
    let name = problem.name().to_string();
    let mut search = Backtracker::new(problem);

    let time = Instant::now();
    let result = match common.limit {
        Some(limit) => search.solve_limited(limit),
        None => search.solve_all(),
    };
    let elapsed = time.elapsed();

    Outcome {
        name,
        result,
        stats: *search.stats(),
        elapsed,
    }
}

/// Stops at the first solution.
pub(crate) fn search_first<P: Problem>(problem: P) -> Outcome<Option<P::Solution>> {
    let name = problem.name().to_string();
    let mut search = Backtracker::new(problem);

    let time = Instant::now();
    let result = search.solve();
    let elapsed = time.elapsed();

    Outcome {
        name,
        result,
        stats: *search.stats(),
        elapsed,
    }
}

fn invalid(e: impl Display) -> String {
    format!("Invalid input: {e}")
}

/// Runs the selected command.
///
/// # Errors
///
/// A printable message if the input is rejected, a file cannot be read or a
/// solution fails verification.
pub(crate) fn dispatch(command: Commands) -> Result<(), String> {
    match command {
        Commands::Queens { n, common } => solve_queens(n, &common),
        Commands::Sudoku { path, common } => {
            if path.is_dir() {
                solve_dir(&path, &common)
            } else {
                solve_sudoku(&path, &common)
            }
        }
        Commands::WordSearch { path, word, common } => solve_word_search(&path, &word, &common),
        Commands::SubsetSum {
            nums,
            target,
            common,
        } => solve_subset_sum(&nums, target, &common),
        Commands::CombinationSum {
            candidates,
            target,
            common,
        } => solve_combination_sum(&candidates, target, &common),
        Commands::Permutations { items, common } => solve_permutations(&items, &common),
        Commands::Maze { path, common } => solve_maze(&path, &common),
        Commands::Hamiltonian { path, common } => solve_hamiltonian(&path, &common),
        Commands::KnightsTour { n, common } => solve_knights_tour(n, &common),
        Commands::Palindromes { text, common } => solve_palindromes(&text, &common),
        Commands::Parentheses { n, common } => solve_parentheses(n, &common),
        Commands::Pattern {
            text,
            pattern,
            common,
        } => solve_pattern(&text, &pattern, &common),
        Commands::MagicSquare { n, common } => solve_magic_square(n, &common),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "backtrack", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Solves every Sudoku file under a directory.
///
/// # Errors
///
/// The first file that cannot be parsed or whose solution fails verification.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        if file_path
            .extension()
            .is_none_or(|ext| ext != "sudoku" && ext != "txt")
        {
            eprintln!("Skipping non-Sudoku file: {}", file_path.display());
            continue;
        }

        solve_sudoku(file_path, common)?;
    }

    Ok(())
}

/// Solves a Sudoku file and prints the filled board.
///
/// # Errors
///
/// If the file is missing or malformed, or the solution fails verification.
pub(crate) fn solve_sudoku(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    println!("Solving: {}", path.display());
    let board = parse_sudoku_file(path).map_err(|e| format!("Error parsing Sudoku file: {e}"))?;
    println!("Parsed Sudoku:\n{board}");

    let sudoku = Sudoku::new(board).map_err(invalid)?;
    let clashing = sudoku.has_conflicting_clues();

    let outcome = search_first(sudoku);
    match &outcome.result {
        Some(solved) => println!("Solution:\n{solved}"),
        None if clashing => println!("No solution found: the clues clash"),
        None => println!("No solution found"),
    }

    conclude(&outcome, common, |solved| solved.as_ref().is_none_or(is_solved))
}

fn solve_queens(n: usize, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_all(NQueens::new(n).map_err(invalid)?, common);
    for columns in &outcome.result {
        println!("{}", columns.iter().join(" "));
    }
    println!("{} solution(s)", outcome.result.len());

    conclude(&outcome, common, |all| all.iter().all(|c| is_valid_placement(c)))
}

fn solve_word_search(path: &Path, word: &str, common: &CommonOptions) -> Result<(), String> {
    let grid = parse_char_grid_file(path).map_err(|e| format!("Error parsing grid file: {e}"))?;
    let outcome = search_first(WordSearch::new(&grid, word).map_err(invalid)?);
    match &outcome.result {
        Some(cells) => println!("Found: {}", format_path(cells)),
        None => println!("Not found"),
    }

    conclude(&outcome, common, |found| {
        found
            .as_ref()
            .is_none_or(|cells| traces_word(&grid, word, cells))
    })
}

fn solve_subset_sum(nums: &[i64], target: i64, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_all(SubsetSum::new(nums, target), common);
    for subset in &outcome.result {
        println!("[{}]", subset.iter().join(", "));
    }
    println!("{} subset(s)", outcome.result.len());

    conclude(&outcome, common, |all| {
        all.iter().all(|s| s.iter().sum::<i64>() == target)
    })
}

fn solve_combination_sum(candidates: &[i64], target: i64, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_all(CombinationSum::new(candidates, target).map_err(invalid)?, common);
    for combination in &outcome.result {
        println!("[{}]", combination.iter().join(", "));
    }
    println!("{} combination(s)", outcome.result.len());

    conclude(&outcome, common, |all| {
        all.iter().all(|c| {
            c.iter().sum::<i64>() == target && c.iter().all(|v| candidates.contains(v))
        })
    })
}

fn solve_permutations(items: &[String], common: &CommonOptions) -> Result<(), String> {
    let outcome = search_all(Permutations::new(items), common);
    for permutation in &outcome.result {
        println!("{}", permutation.iter().join(" "));
    }
    println!("{} permutation(s)", outcome.result.len());

    let sorted = items.iter().sorted().collect_vec();
    conclude(&outcome, common, |all| {
        all.iter().all(|p| p.iter().sorted().collect_vec() == sorted)
    })
}

fn solve_maze(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let maze = parse_int_grid_file(path).map_err(|e| format!("Error parsing maze file: {e}"))?;
    let outcome = search_all(RatInMaze::new(&maze).map_err(invalid)?, common);
    for route in &outcome.result {
        println!("{}", format_path(route));
    }
    println!("{} path(s)", outcome.result.len());

    conclude(&outcome, common, |all| all.iter().all(|p| is_maze_path(&maze, p)))
}

fn solve_hamiltonian(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let graph =
        parse_int_grid_file(path).map_err(|e| format!("Error parsing adjacency matrix: {e}"))?;
    let outcome = search_first(HamiltonianCycle::new(&graph).map_err(invalid)?);
    match &outcome.result {
        Some(cycle) => println!("Cycle: {}", cycle.iter().join(" -> ")),
        None => println!("No Hamiltonian cycle"),
    }

    conclude(&outcome, common, |cycle| {
        cycle
            .as_ref()
            .is_none_or(|c| is_hamiltonian_cycle(&graph, c))
    })
}

fn solve_knights_tour(n: usize, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_first(KnightsTour::new(n).map_err(invalid)?);
    match &outcome.result {
        Some(tour) => {
            let width = (n * n).to_string().len();
            for row in tour.board() {
                println!("{}", row.iter().map(|step| format!("{step:>width$}")).join(" "));
            }
        }
        None => println!("No tour from the corner"),
    }

    conclude(&outcome, common, |tour| {
        tour.as_ref().is_none_or(|t| is_valid_tour(n, t.path()))
    })
}

fn solve_palindromes(text: &str, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_all(PalindromePartitioning::new(text), common);
    for pieces in &outcome.result {
        println!("{}", pieces.iter().join(" | "));
    }
    println!("{} partition(s)", outcome.result.len());

    conclude(&outcome, common, |all| {
        all.iter().all(|pieces| {
            pieces.concat() == text
                && pieces.iter().all(|p| p.chars().eq(p.chars().rev()))
        })
    })
}

fn solve_parentheses(n: usize, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_all(Parentheses::new(n), common);
    for s in &outcome.result {
        println!("{s}");
    }
    println!("{} string(s)", outcome.result.len());

    conclude(&outcome, common, |all| {
        all.iter().all(|s| s.len() == 2 * n && is_balanced(s))
    })
}

fn solve_pattern(text: &str, pattern: &str, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_first(PatternMatch::new(text, pattern));
    println!("{}", if outcome.result.is_some() { "Match" } else { "No match" });

    if common.stats {
        print_stats(&outcome);
    }
    Ok(())
}

fn solve_magic_square(n: usize, common: &CommonOptions) -> Result<(), String> {
    let outcome = search_first(MagicSquare::new(n).map_err(invalid)?);
    match &outcome.result {
        Some(square) => {
            let width = (n * n).to_string().len();
            for row in square {
                println!("{}", row.iter().map(|v| format!("{v:>width$}")).join(" "));
            }
        }
        None => println!("No magic square of order {n}"),
    }

    conclude(&outcome, common, |square| square.as_ref().is_none_or(|s| is_magic(s)))
}

/// Verifies (if asked) and prints statistics (if asked).
///
/// # Errors
///
/// If `check` rejects the result.
fn conclude<T>(
    outcome: &Outcome<T>,
    common: &CommonOptions,
    check: impl FnOnce(&T) -> bool,
) -> Result<(), String> {
    if common.verify {
        let ok = check(&outcome.result);
        println!("Verified: {ok}");
        if !ok {
            return Err(format!("{} solution failed verification", outcome.name));
        }
    }

    if common.stats {
        print_stats(outcome);
    }
    Ok(())
}

fn format_path(cells: &[Cell]) -> String {
    cells.iter().map(|(r, c)| format!("({r}, {c})")).join(" -> ")
}

fn traces_word(grid: &[Vec<char>], word: &str, cells: &[Cell]) -> bool {
    cells.iter().map(|&(r, c)| grid[r][c]).eq(word.chars())
        && cells.iter().all_unique()
        && cells
            .windows(2)
            .all(|w| w[0].0.abs_diff(w[1].0) + w[0].1.abs_diff(w[1].1) == 1)
}

fn is_balanced(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => return false,
        }
    }
    depth == 0
}

/// Allocated and resident memory in MiB, as reported by jemalloc.
fn memory_usage() -> Option<(f64, f64)> {
    const MIB: f64 = 1024.0 * 1024.0;

    epoch::advance().ok()?;
    let allocated = stats::allocated::mib().ok()?.read().ok()?;
    let resident = stats::resident::mib().ok()?.read().ok()?;
    Some((allocated as f64 / MIB, resident as f64 / MIB))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints the search statistics of `outcome` with memory usage and timing.
pub(crate) fn print_stats<T>(outcome: &Outcome<T>) {
    let s = &outcome.stats;
    let elapsed_secs = outcome.elapsed.as_secs_f64();

    println!("\n========================[ Search Statistics ]========================");
    stat_line("Problem", &outcome.name);
    stat_line_with_rate("Nodes", s.nodes, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Candidates", s.candidates);
    stat_line("Pruned", s.pruned);
    stat_line("Prune ratio", format!("{:.3}", s.prune_ratio()));
    stat_line("Solutions", s.solutions);
    stat_line("Max depth", s.max_depth);
    if let Some((allocated, resident)) = memory_usage() {
        stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
        stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    }
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_common_defaults() {
        let Commands::Queens { n, common } = parse(&["backtrack", "queens", "-n", "8"]) else {
            panic!("expected queens");
        };
        assert_eq!(n, 8);
        assert!(common.verify);
        assert!(!common.stats);
        assert!(!common.debug);
        assert_eq!(common.limit, None);
    }

    #[test]
    fn test_common_flags() {
        let command = parse(&[
            "backtrack", "parentheses", "-n", "3", "--verify", "false", "--stats", "--limit", "2",
            "-d",
        ]);
        let common = command.common().unwrap();
        assert!(!common.verify);
        assert!(common.stats);
        assert!(common.debug);
        assert_eq!(common.limit, Some(2));
    }

    #[test]
    fn test_number_lists() {
        let Commands::SubsetSum { nums, target, .. } =
            parse(&["backtrack", "subset-sum", "--nums", "1,-2,3", "-t", "-1"])
        else {
            panic!("expected subset-sum");
        };
        assert_eq!(nums, vec![1, -2, 3]);
        assert_eq!(target, -1);
    }

    #[test]
    fn test_completions_have_no_common_options() {
        let command = parse(&["backtrack", "completions", "bash"]);
        assert!(command.common().is_none());
    }

    #[test]
    fn test_search_all_honours_limit() {
        let common = CommonOptions {
            limit: Some(3),
            ..CommonOptions::default()
        };
        let outcome = search_all(Parentheses::new(4), &common);
        assert_eq!(outcome.result.len(), 3);
        assert_eq!(outcome.name, "valid parentheses");
        assert_eq!(outcome.stats.solutions, 3);
    }

    #[test]
    fn test_conclude_rejects_failed_check() {
        let common = CommonOptions {
            verify: true,
            ..CommonOptions::default()
        };
        let outcome = search_first(Parentheses::new(1));
        assert!(conclude(&outcome, &common, |_| true).is_ok());
        assert!(conclude(&outcome, &common, |_| false).is_err());
    }

    #[test]
    fn test_helpers() {
        assert!(is_balanced("(())()"));
        assert!(!is_balanced("())("));
        assert_eq!(format_path(&[(0, 0), (1, 0)]), "(0, 0) -> (1, 0)");

        let grid = vec![vec!['A', 'B'], vec!['C', 'D']];
        assert!(traces_word(&grid, "ABD", &[(0, 0), (0, 1), (1, 1)]));
        assert!(!traces_word(&grid, "AD", &[(0, 0), (1, 1)]));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let common = CommonOptions::default();
        assert!(solve_queens(0, &common).is_err());
        assert!(solve_magic_square(0, &common).is_err());
        assert!(solve_magic_square(1 << 32, &common).is_err());
        assert!(solve_knights_tour(1 << 32, &common).is_err());
        assert!(solve_combination_sum(&[0, 2], 4, &common).is_err());
        assert!(solve_sudoku(Path::new("/nonexistent.sudoku"), &common).is_err());
    }

    #[test]
    fn test_negative_targets_find_nothing() {
        let common = CommonOptions::default();
        assert!(solve_subset_sum(&[-1, 2], -1, &common).is_ok());
        assert!(solve_combination_sum(&[2, 3], -5, &common).is_ok());
        assert!(solve_combination_sum(&[2, -3], -5, &common).is_err());
    }
}
