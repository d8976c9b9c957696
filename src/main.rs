//! headline-style CLI - converts text to headline style.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use headline_style::config::Config;
use headline_style::{SmallWords, Wordlist, headline_with};
use similar::TextDiff;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Converts text to headline style, capitalizing major words and
/// lowercasing small words.
#[derive(Parser, Debug)]
#[command(name = "headline-style")]
#[command(version, about, long_about = None)]
struct Args {
    /// Text to convert. Multiple arguments are joined with spaces.
    #[arg(value_name = "STRING", conflicts_with = "input_file")]
    string: Vec<String>,

    /// File to read from. Use - for stdin.
    #[arg(short = 'f', long, value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// File to write the converted text to. Use - for stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Word list of acronyms with fixed casing, one per line.
    /// Defaults to ~/.headline-style.txt.
    #[arg(short = 'w', long, value_name = "FILE")]
    wordlist: Option<PathBuf>,

    /// Do not skip blank lines in the input.
    #[arg(long)]
    preserve_blank_lines: bool,

    /// Comma separated small words, replacing the built-in list.
    #[arg(long, value_name = "WORDS", value_delimiter = ',')]
    small_words: Option<Vec<String>>,

    /// Configuration file. Defaults to the nearest .headline-style.toml.
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Do not look for a configuration file.
    #[arg(long)]
    no_config: bool,

    /// Check if the input is already in headline style (exit 1 if not).
    #[arg(short, long)]
    check: bool,

    /// Print a unified diff instead of the converted text.
    #[arg(long)]
    diff: bool,

    /// Log what the converter is doing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut options = config.to_options();
    if let Some(words) = &args.small_words {
        options.small_words = SmallWords::new(words);
    }
    options.preserve_blank_lines |= args.preserve_blank_lines;

    let wordlist_path = args
        .wordlist
        .clone()
        .or(config.wordlist)
        .or_else(Wordlist::default_path);
    let wordlist = Wordlist::from_file(wordlist_path.as_deref());

    let input = if !args.string.is_empty() {
        args.string.join(" ")
    } else {
        match read_input(args.input_file.as_deref()) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let output = headline_with(&input, &options, &wordlist);

    if args.check {
        if input != output {
            eprintln!("{}: not in headline style", input_name(&args));
            if args.diff {
                print!("{}", unified_diff(&input, &output));
            }
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let rendered = if args.diff {
        unified_diff(&input, &output)
    } else {
        output
    };
    if let Err(e) = write_output(args.output_file.as_deref(), &rendered) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "headline_style=debug"
    } else {
        "headline_style=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_config(args: &Args) -> Result<Config, headline_style::config::ConfigError> {
    if args.no_config {
        return Ok(Config::default());
    }
    if let Some(path) = &args.config {
        tracing::debug!(path = %path.display(), "using configuration");
        return Config::from_file(path);
    }
    let Ok(cwd) = std::env::current_dir() else {
        return Ok(Config::default());
    };
    match Config::discover(&cwd)? {
        Some((path, config)) => {
            tracing::debug!(path = %path.display(), "using configuration");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if !is_stdio(path) => fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> io::Result<()> {
    match path {
        Some(path) if !is_stdio(path) => fs::write(path, output),
        _ => {
            print!("{}", output);
            Ok(())
        }
    }
}

fn input_name(args: &Args) -> String {
    match &args.input_file {
        Some(path) if args.string.is_empty() && !is_stdio(path) => path.display().to_string(),
        _ if !args.string.is_empty() => "<arguments>".to_string(),
        _ => "<stdin>".to_string(),
    }
}

fn unified_diff(input: &str, output: &str) -> String {
    TextDiff::from_lines(input, output)
        .unified_diff()
        .header("original", "headline")
        .to_string()
}
