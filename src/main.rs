//  ____ __        __     ____
// |  _ \\ \      / /__  / ___| ___ _ __
// | |_) |\ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ < \ V  V / (_) | |_| |  __/ | | |
// |_| \_\ \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// A custom wordlist generator and password strength analyzer
// for authorized security testing, written in Rust.

use clap::Parser;

use rwogen::commands::{analyze, genlist};

#[derive(Debug, Parser)]
#[command(name = "rwogen")]
#[command(about = "A custom wordlist generator and password strength analyzer", long_about = None)]
enum Cli {
    /// Generate a candidate wordlist from seed personal information
    Gen(GenArgs),

    /// Analyze password strength and properties
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Names, comma-separated
    #[arg(short, long)]
    names: Option<String>,

    /// Important dates or years, comma-separated
    #[arg(short, long)]
    dates: Option<String>,

    /// Pet names, comma-separated
    #[arg(short, long)]
    pets: Option<String>,

    /// Interests or hobbies, comma-separated
    #[arg(short, long)]
    interests: Option<String>,

    /// Skip year suffix variations
    #[arg(long, default_value_t = false)]
    no_years: bool,

    /// Skip leetspeak variations
    #[arg(long, default_value_t = false)]
    no_leet: bool,

    /// Skip multi-word combinations
    #[arg(long, default_value_t = false)]
    no_combinations: bool,

    /// Maximum number of words to keep (0 = unlimited)
    #[arg(short, long, default_value_t = 10000)]
    max_words: usize,

    /// Reference year for the year window (defaults to the current year)
    #[arg(long)]
    ref_year: Option<i32>,

    /// Write the wordlist to this file, one word per line
    #[arg(short, long)]
    output: Option<String>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Parser)]
struct AnalyzeArgs {
    /// Password to analyze
    password: Option<String>,

    /// Analyze every non-empty line of this file instead
    #[arg(short, long)]
    file: Option<String>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => genlist::generate_wordlist(
            args.names,
            args.dates,
            args.pets,
            args.interests,
            args.no_years,
            args.no_leet,
            args.no_combinations,
            args.max_words,
            args.ref_year,
            args.output,
            args.json,
        ),
        Cli::Analyze(args) => analyze::analyze_password(args.password, args.file, args.json),
    }
}
