use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};

use betokened::TokenizeError;
use clap::{value_t, App, Arg};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use log::debug;

mod sample;

pub use crate::sample::{sample_tokenizer, QuoteStyle, SampleToken, SampleTokenKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Config {
    pub source_path: String,

    /// How double quotes are escaped inside string literals.
    pub quote_style: QuoteStyle,

    /// Whether leftover input that no recognizer accepts is reported as an error. When unset,
    /// tokenizing quietly stops at such input.
    pub end_check: bool,

    /// A flag for integration tests: this allows to better capture output. There is
    /// no way to set it through command-line.
    pub plaintext_errors: bool,
}

impl Config {
    /// Reads the configuration from the process arguments, exiting on invalid ones.
    pub fn new() -> Config {
        Config::from_args(std::env::args_os()).unwrap_or_else(|error| error.exit())
    }

    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = App::new("betokened")
            .version(VERSION)
            .about("Tokenizes files written in a small s-expression notation")
            .arg(
                Arg::with_name("FILE")
                    .help("Path to the file to tokenize")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::with_name("quote-style")
                    .long("quote-style")
                    .takes_value(true)
                    .possible_values(&["backslash", "doubled"])
                    .default_value("backslash")
                    .help("How double quotes are escaped inside strings"),
            )
            .arg(
                Arg::with_name("no-end-check")
                    .long("no-end-check")
                    .help("Stop quietly at unrecognized input instead of reporting an error"),
            )
            .get_matches_from_safe(args)?;

        Ok(Config {
            source_path: matches.value_of("FILE").unwrap_or_default().to_string(),
            quote_style: value_t!(matches, "quote-style", QuoteStyle)?,
            end_check: !matches.is_present("no-end-check"),
            plaintext_errors: false,
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum RunResult {
    Ok,
    IoError,
    TokenizeError,
}

/// Tokenizes the file and prints the tokens to stdout.
pub fn run(config: &Config) -> RunResult {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Tokenizes the file and prints the tokens to `out`, one per line.
pub fn run_with_output(config: &Config, out: &mut dyn Write) -> RunResult {
    let source = match fs::read_to_string(&config.source_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error while reading the source file:\n{}", error);
            return RunResult::IoError;
        }
    };

    debug!(
        "tokenizing {} ({} bytes, quote style {:?})",
        config.source_path,
        source.len(),
        config.quote_style
    );
    let tokenizer = sample_tokenizer(config.quote_style, config.end_check);
    match tokenizer.tokenize_str(&source) {
        Ok(tokens) => {
            for token in tokens {
                if let Err(error) = writeln!(out, "{}", token) {
                    eprintln!("Error while writing tokens:\n{}", error);
                    return RunResult::IoError;
                }
            }
            RunResult::Ok
        }
        Err(error) => {
            report_tokenize_error(
                &config.source_path,
                &source,
                &error,
                config.plaintext_errors,
            );
            RunResult::TokenizeError
        }
    }
}

fn report_tokenize_error(
    file_name: &str,
    source: &str,
    error: &TokenizeError,
    plaintext_stderr: bool,
) {
    if !plaintext_stderr {
        let mut files = SimpleFiles::new();
        let file_id = files.add(file_name, source);

        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        let diagnostic = error.to_codespan(file_id, source);
        if let Err(error) =
            codespan_reporting::term::emit(&mut writer.lock(), &config, &files, &diagnostic)
        {
            eprintln!("Error while reporting a tokenize error:\n{}", error);
        };
    } else {
        eprintln!("{:?}", error);
    }
}
