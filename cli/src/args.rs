use std::path::PathBuf;

use clap::{Parser, Subcommand};
use radix_engine::{Base, Width};

#[derive(Parser)]
#[command(name = "radix")]
#[command(about = "Radix number-base converter", long_about = None)]
pub struct Cli {
    /// TOML file with converter settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every representation of a value
    Convert {
        /// Input text (numeral or expression)
        value: String,
        /// Field the input is typed in: dec, bin, hex, b64 or ascii
        #[arg(short, long, default_value_t = Base::Decimal)]
        from: Base,
        /// Print the converter snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate an expression and print the result
    Eval {
        /// Expression, e.g. `32+53` or `100>>1`
        expr: String,
        /// Base the expression is written in: dec, bin or hex
        #[arg(short, long, default_value_t = Base::Decimal)]
        base: Base,
    },
    /// Fixed-width two's-complement panels
    Panels {
        /// Decimal value, or a bit string with --decode
        value: String,
        /// Panel widths (8, 16, 32, 64); defaults to the configured set
        #[arg(short, long = "width")]
        widths: Vec<Width>,
        /// Interpret VALUE as a two's-complement bit string
        #[arg(long)]
        decode: bool,
    },
    /// Encode text as hex, or decode hex/binary bytes into text
    Ascii {
        /// Text to encode, or digits to decode with --from
        text: String,
        /// Decode TEXT from this base instead of encoding it
        #[arg(long)]
        from: Option<Base>,
    },
    /// Start an interactive converter session
    Repl,
}
