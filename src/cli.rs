//! Command-line interface implementation for nitrogen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for nitrogen.
#[derive(Parser, Debug)]
#[command(author, version, about = "nitrogen: frontend project scaffolding tool", long_about = None)]
pub struct Args {
    /// Path to the materialized template source tree
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory where the generated project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// The name of your app (defaults to the output directory basename)
    #[arg(long)]
    pub name: Option<String>,

    /// Your desired stylesheet preprocessor [less|scss]
    #[arg(long, value_name = "PRE")]
    pub pre: Option<String>,

    /// Your desired script compiler [JavaScript|TypeScript]
    #[arg(long, value_name = "JS")]
    pub js: Option<String>,

    /// Your desired view file extension [html|hbs|mustache]
    #[arg(long, value_name = "EXT")]
    pub view_ext: Option<String>,

    /// Include client side templates
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub client_tpl: Option<bool>,

    /// Include the example code
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub example_code: Option<bool>,

    /// Include static exporting functionalities
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub exporter: Option<bool>,

    /// Include release management
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub release: Option<bool>,

    /// Use defaults for options not passed on the command line and skip
    /// all questions
    #[arg(long)]
    pub skip_questions: bool,

    /// Skip the package manager invocation after scaffolding
    #[arg(long)]
    pub skip_install: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
