//! Wordle Combinations Finder - CLI
//!
//! Interactive constraint-filtering assistant plus a word-list formatter
//! utility.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_combos::{
    commands::{AssistOptions, FormatConfig, run_assist, run_format},
    core::Word,
    filter::Assistant,
    output::{DisplayConfig, Palette},
    suggest::SuggestConfig,
    wordlists::{
        WORDS,
        formatter::FormatOptions,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_combos",
    about = "Find the Wordle answers still consistent with your guesses and feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum suggested guesses shown per round
    #[arg(short = 'n', long, global = true, default_value = "5")]
    suggestions: usize,

    /// Dictionary prefix length scored when many candidates remain
    ///
    /// Larger values consider more probe words at higher cost; suggestions
    /// depend on dictionary order either way.
    #[arg(long, global = true, default_value = "2000")]
    pool_cap: usize,

    /// Use high-contrast colors (foreground on background)
    #[arg(long, global = true)]
    high_contrast: bool,

    /// Disable mark symbols and rely on colors alone
    #[arg(long, global = true)]
    no_symbols: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive filtering session (default)
    Assist,

    /// Reformat a word list file as a bracketed quoted list
    Format {
        /// Input file with one word per line
        input: PathBuf,

        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Words per output line
        #[arg(long, default_value = "10")]
        words_per_line: usize,

        /// Keep input order instead of sorting alphabetically
        #[arg(long)]
        no_sort: bool,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the interactive session if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            anyhow::ensure!(!dictionary.is_empty(), "Dictionary is empty");

            let suggest_config = SuggestConfig {
                pool_cap: cli.pool_cap,
                ..SuggestConfig::default()
            };
            let assistant = Assistant::new(&dictionary, suggest_config);

            let options = AssistOptions {
                suggestions: cli.suggestions,
                display: DisplayConfig {
                    palette: if cli.high_contrast {
                        Palette::HighContrast
                    } else {
                        Palette::Standard
                    },
                    symbols: !cli.no_symbols,
                },
            };

            run_assist(&assistant, &options).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Format {
            input,
            output,
            words_per_line,
            no_sort,
        } => {
            let config = FormatConfig {
                input,
                output,
                options: FormatOptions {
                    words_per_line,
                    alphabetize: !no_sort,
                },
            };

            run_format(&config).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
