//! Command-line argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use cts_core::{Directions, OperatorPolicy};
use std::path::PathBuf;

const LONG_ABOUT: &str = "Solver for CTS reordering and renumbering puzzles.

Enter the top row and bottom row symbols in the order shown in the puzzle and
the operator from the middle box. The solver reorders the top row by the
operator, renumbers it 1..N, and reads the bottom row through that numbering
(the Top→Bottom code). The Bottom→Top code is derived as well unless
--direction forward is given.

Symbols may be separated by spaces or commas. The alphabet comes from
--alphabet, from the preset for --size, or from the preset matching the
number of symbols in the top row.";

#[derive(Parser, Debug)]
#[command(name = "cts", version, about = "CTS reordering and renumbering solver", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Preset table to use instead of the one in the config directory.
    #[arg(long, value_name = "FILE", global = true)]
    pub presets: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the answer code for one puzzle and check it against options.
    Solve(SolveArgs),
    /// List the alphabet presets by puzzle size.
    Presets,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Top row symbols, in puzzle order.
    #[arg(long, short = 't')]
    pub top: String,

    /// Bottom row symbols, in puzzle order.
    #[arg(long, short = 'b')]
    pub bottom: String,

    /// Operator digits from the middle box, e.g. 241356.
    #[arg(long, short = 'o')]
    pub operator: String,

    /// Puzzle size; selects the alphabet preset.
    #[arg(long, short = 'n', conflicts_with = "alphabet")]
    pub size: Option<usize>,

    /// Explicit alphabet, e.g. "% ● ■ ▲ + X".
    #[arg(long, short = 'a')]
    pub alphabet: Option<String>,

    /// Candidate answers separated by spaces, newlines, or commas.
    #[arg(long, short = 'c')]
    pub candidates: Option<String>,

    /// Read candidate answers from a file.
    #[arg(long, value_name = "FILE", conflicts_with = "candidates")]
    pub candidates_file: Option<PathBuf>,

    #[arg(long, short = 'd', value_enum, default_value_t = DirectionArg::Both)]
    pub direction: DirectionArg,

    /// Reject operators that are not a permutation of 1..N.
    #[arg(long)]
    pub strict: bool,
}

impl SolveArgs {
    pub fn directions(&self) -> Directions {
        match self.direction {
            DirectionArg::Forward => Directions::Forward,
            DirectionArg::Both => Directions::Both,
        }
    }

    pub fn operator_policy(&self) -> OperatorPolicy {
        if self.strict {
            OperatorPolicy::Strict
        } else {
            OperatorPolicy::Lenient
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionArg {
    Forward,
    Both,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
