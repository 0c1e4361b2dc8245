#![allow(clippy::cast_precision_loss)]

use crossword_solver::crossword::puzzle::Puzzle;
use crossword_solver::crossword::structure::Structure;
use crossword_solver::crossword::vocabulary::Vocabulary;
use crossword_solver::csp::arc_consistency::ArcQueueType;
use crossword_solver::csp::assignment::Assignment;
use crossword_solver::csp::backtracking::Backtracking;
use crossword_solver::csp::solver::{
    DynamicConfig, SolutionStats, Solver, SolverImpls, SolverType,
};
use crossword_solver::csp::value_ordering::ValueOrderingType;
use crossword_solver::csp::variable_selection::{DEFAULT_SEED, VariableSelectionType};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Extension of structure files picked up by `dir`.
const STRUCTURE_EXTENSION: &str = "structure";

/// Defines the command-line interface for the crossword solver.
#[derive(Parser, Debug)]
#[command(
    name = "crossword-solver",
    version,
    about = "Fills crossword grids with node consistency, AC-3 and backtracking"
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve one structure file with a word list.
    Solve {
        /// Grid layout: one row per line, `_` for fillable cells.
        #[arg(long)]
        structure: PathBuf,

        /// Word list, one word per line.
        #[arg(long)]
        words: PathBuf,

        /// Also write the filled grid to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.structure` file below a directory with one word list.
    Dir {
        #[arg(long)]
        path: PathBuf,

        #[arg(long)]
        words: PathBuf,

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
    /// Options of the command, if it takes any.
    pub(crate) const fn common(&self) -> Option<&CommonOptions> {
        match self {
            Self::Solve { common, .. } | Self::Dir { common, .. } => Some(common),
            Self::Completions { .. } => None,
        }
    }
}

/// Options shared by the solving commands.
#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Log preprocessing and search progress.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check the returned fill against every constraint before reporting it.
    #[arg(short, long, default_value_t = false)]
    pub(crate) verify: bool,

    /// Print preprocessing, search and memory statistics.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// List the word placed in every slot.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    #[arg(long, default_value_t = SolverType::Backtracking)]
    pub(crate) solver: SolverType,

    #[arg(long, default_value_t = VariableSelectionType::Mrv)]
    pub(crate) variable_selection: VariableSelectionType,

    #[arg(long, default_value_t = ValueOrderingType::Lcv)]
    pub(crate) value_ordering: ValueOrderingType,

    #[arg(long, default_value_t = ArcQueueType::Fifo)]
    pub(crate) queue: ArcQueueType,

    /// Seed for `--variable-selection random`.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub(crate) seed: u64,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            debug: false,
            verify: false,
            stats: false,
            print_solution: false,
            solver: SolverType::default(),
            variable_selection: VariableSelectionType::default(),
            value_ordering: ValueOrderingType::default(),
            queue: ArcQueueType::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Builds the solver the options describe.
pub(crate) fn get_solver<'p>(
    common: &CommonOptions,
    puzzle: &'p Puzzle,
) -> SolverImpls<'p, DynamicConfig> {
    let search = Backtracking::<DynamicConfig>::from_parts(
        puzzle,
        common.variable_selection.to_impl(puzzle, common.seed),
        common.value_ordering.to_impl(),
        common.queue.to_impl(),
    );
    common.solver.to_impl(search)
}

pub(crate) fn solve_files(
    structure: &Path,
    words: &Path,
    output: Option<&Path>,
    common: &CommonOptions,
) -> Result<(), String> {
    let time = Instant::now();
    let puzzle = Puzzle::from_files(structure, words).map_err(|e| e.to_string())?;
    let parse_time = time.elapsed();

    let solution = solve_and_report(&puzzle, common, Some(structure), parse_time)?;

    if let (Some(output), Some(solution)) = (output, &solution) {
        std::fs::write(output, format!("{}\n", puzzle.render(solution)))
            .map_err(|e| format!("Unable to write {}: {e}", output.display()))?;
        println!("Grid written to: {}", output.display());
    }
    Ok(())
}

/// Solves every structure file below `path`, returning how many were found.
pub(crate) fn solve_dir(
    path: &Path,
    words: &Path,
    common: &CommonOptions,
) -> Result<usize, String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    let vocabulary = Vocabulary::from_file(words)
        .map_err(|e| format!("cannot read words {}: {e}", words.display()))?;

    let mut count = 0;
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
            .is_none_or(|ext| ext != STRUCTURE_EXTENSION)
        {
            eprintln!("Skipping non-structure file: {}", file_path.display());
            continue;
        }

        let time = Instant::now();
        let structure = Structure::from_file(file_path)
            .map_err(|e| format!("cannot read structure {}: {e}", file_path.display()))?;
        let puzzle = Puzzle::new(structure, vocabulary.clone());
        let parse_time = time.elapsed();

        solve_and_report(&puzzle, common, Some(file_path), parse_time)?;
        count += 1;
    }

    Ok(count)
}

/// Panics if `solution` breaks a constraint of `puzzle`.
pub(crate) fn verify_solution(puzzle: &Puzzle, solution: Option<&Assignment>) {
    if let Some(solution) = solution {
        let ok = solution.is_complete() && solution.is_consistent(puzzle);
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    } else {
        println!("No solution to verify");
    }
}

pub(crate) fn solve(
    puzzle: &Puzzle,
    label: Option<&Path>,
    common: &CommonOptions,
) -> (Option<Assignment>, Duration, SolutionStats) {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    info!(
        "{}x{} grid, {} slots, {} words, solver {}, selection {}, ordering {}, queue {}",
        puzzle.structure.width(),
        puzzle.structure.height(),
        puzzle.num_vars(),
        puzzle.vocabulary.len(),
        common.solver,
        common.variable_selection,
        common.value_ordering,
        common.queue
    );

    let time = Instant::now();
    let mut solver = get_solver(common, puzzle);
    let solution = solver.solve();
    let elapsed = time.elapsed();

    info!("solved in {elapsed:?}");
    (solution, elapsed, solver.stats())
}

/// Allocated and resident memory in MiB.
fn memory_usage() -> Result<(f64, f64), String> {
    epoch::advance().map_err(|e| e.to_string())?;
    let allocated = stats::allocated::read().map_err(|e| e.to_string())?;
    let resident = stats::resident::read().map_err(|e| e.to_string())?;
    Ok((
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    ))
}

pub(crate) fn solve_and_report(
    puzzle: &Puzzle,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Result<Option<Assignment>, String> {
    epoch::advance().map_err(|e| e.to_string())?;

    let (solution, elapsed, solver_stats) = solve(puzzle, label, common);

    if common.verify {
        verify_solution(puzzle, solution.as_ref());
    }

    if common.stats {
        let (allocated, resident) = memory_usage()?;
        print_stats(
            parse_time,
            elapsed,
            puzzle,
            &solver_stats,
            allocated,
            resident,
        );
    }

    match &solution {
        Some(solution) => {
            if common.print_solution {
                for (variable, word) in solution.words(puzzle) {
                    println!("{variable}  {word}");
                }
            }
            println!("{}", puzzle.render(solution));
        }
        None => println!("No solution."),
    }

    Ok(solution)
}

pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    puzzle: &Puzzle,
    s: &SolutionStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line(
        "Grid",
        format!("{}x{}", puzzle.structure.width(), puzzle.structure.height()),
    );
    stat_line("Fillable cells", puzzle.structure.fillable_count());
    stat_line("Slots", puzzle.num_vars());
    stat_line("Crossings", puzzle.arcs().count() / 2);
    stat_line("Words", puzzle.vocabulary.len());

    println!("=====================[ Preprocessing Statistics ]=====================");
    stat_line("Wrong-length removals", s.node_consistency_removals);
    stat_line("Arc revisions", s.revisions);
    stat_line("Arc removals", s.arc_removals);
    stat_line("Domain wipeout", s.wipeout);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Nodes", s.nodes, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Max depth", s.max_depth);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
