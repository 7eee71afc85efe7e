mod check;
mod config;
mod convert;
mod diff;
mod path_glob;
mod stats;
mod validation;
mod view;

use clap::{ArgAction, Parser, Subcommand};
use emsesp_i18n::Localizer;

use crate::check::{CheckOptions, run_check_command};
use crate::config::Config;
use crate::convert::{
    ConvertOptions, ExportOptions, load_table, run_convert_command, run_export_command,
};
use crate::diff::{DiffOptions, run_diff_command};
use crate::stats::print_stats;
use crate::view::{ViewOptions, lookup, parse_args, print_view};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./emsesp-i18n.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the entries of a locale table.
    Show {
        /// Locale file to show; the built-in table when omitted
        #[arg(short, long)]
        input: Option<String>,

        /// Language code of the table
        #[arg(short, long)]
        lang: Option<String>,

        /// Only show keys containing this text
        #[arg(short, long)]
        key: Option<String>,

        /// Display full value without truncation
        #[arg(long)]
        full: bool,
    },

    /// Look up and render one message.
    Get {
        /// Message key
        key: String,

        /// Locale file to read; the built-in tables when omitted
        #[arg(short, long)]
        input: Option<String>,

        /// Language code
        #[arg(short, long)]
        lang: Option<String>,

        /// Argument for placeholders and plurals (name=value, repeatable)
        #[arg(short, long = "arg")]
        args: Vec<String>,

        /// Item of a list message
        #[arg(long)]
        index: Option<usize>,
    },

    /// Write a built-in table to a file.
    Export {
        /// The output file to write
        #[arg(short, long)]
        output: String,

        /// Language of the built-in table
        #[arg(short, long)]
        lang: Option<String>,

        /// Output format (json, table-json, csv); inferred from the file name by default
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Convert a locale file between formats.
    Convert {
        /// The input file to process
        #[arg(short, long)]
        input: String,

        /// The output file to write the results to
        #[arg(short, long)]
        output: String,

        /// Input format; inferred from the file name by default
        #[arg(long)]
        input_format: Option<String>,

        /// Output format; inferred from the file name by default
        #[arg(long)]
        output_format: Option<String>,

        /// Language of the input, overriding the file and its path
        #[arg(short, long)]
        lang: Option<String>,

        /// Require a determinable language and report pending entries
        #[arg(long)]
        strict: bool,
    },

    /// Check locale files for completeness against a reference.
    Check {
        /// Files to check (glob patterns allowed)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Reference file; the built-in table when omitted
        #[arg(short, long)]
        reference: Option<String>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error when any table is incomplete
        #[arg(long)]
        strict: bool,
    },

    /// Show entry counts and translation progress.
    Stats {
        /// Locale file; the built-in table when omitted
        #[arg(short, long)]
        input: Option<String>,

        /// Language code of the table
        #[arg(short, long)]
        lang: Option<String>,

        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two locale files.
    Diff {
        /// The original file
        #[arg(short, long)]
        source: String,

        /// The updated file
        #[arg(short, long)]
        target: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), String> {
    let config = Config::load(args.config.as_deref())?;

    match args.commands {
        Commands::Show {
            input,
            lang,
            key,
            full,
        } => {
            let lang = lang.or_else(|| input.is_none().then(|| config.default_language.clone()));
            let table = load_table(input.as_deref(), None, lang.as_deref(), config.strict)?;
            print_view(
                &table,
                &ViewOptions {
                    key_filter: key,
                    full,
                    width: config.truncate_width,
                },
            )
        }
        Commands::Get {
            key,
            input,
            lang,
            args,
            index,
        } => {
            let render_args = parse_args(&args)?;
            let rendered = match input {
                Some(input) => {
                    let table =
                        load_table(Some(&input), None, lang.as_deref(), config.strict)?;
                    lookup(&table, &key, &render_args, index)?
                }
                None => {
                    let lang = lang.unwrap_or_else(|| config.default_language.clone());
                    crate::validation::validate_language_code(&lang)?;
                    let localizer = Localizer::new(
                        emsesp_i18n::Codec::builtin(),
                        config.default_language.clone(),
                    );
                    let (table, _) = localizer
                        .resolve(&lang, &key)
                        .ok_or_else(|| emsesp_i18n::Error::unknown_key(&lang, &key).to_string())?;
                    lookup(table, &key, &render_args, index)?
                }
            };
            println!("{}", rendered);
            Ok(())
        }
        Commands::Export {
            output,
            lang,
            format,
        } => run_export_command(ExportOptions {
            output,
            lang: lang.unwrap_or_else(|| config.default_language.clone()),
            format,
        }),
        Commands::Convert {
            input,
            output,
            input_format,
            output_format,
            lang,
            strict,
        } => run_convert_command(ConvertOptions {
            input,
            output,
            input_format,
            output_format,
            lang,
            strict: strict || config.strict,
        }),
        Commands::Check {
            input,
            reference,
            json,
            strict,
        } => run_check_command(CheckOptions {
            inputs: input,
            reference: reference.or(config.reference.clone()),
            json,
            strict: strict || config.strict,
        }),
        Commands::Stats { input, lang, json } => {
            let lang = lang.or_else(|| input.is_none().then(|| config.default_language.clone()));
            let table = load_table(input.as_deref(), None, lang.as_deref(), config.strict)?;
            print_stats(&table, json)
        }
        Commands::Diff {
            source,
            target,
            json,
            output,
        } => run_diff_command(DiffOptions {
            source,
            target,
            json,
            output,
            strict: config.strict,
        }),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
