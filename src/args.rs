mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Koch snowflake segment generator.
#[derive(Debug, Parser)]
#[command(version)]
pub struct KochflakeCli {
    #[command(subcommand)]
    pub sub_command: RunCommand,
}

/// Parser for the subcommands of the kochflake binary using clap.
#[derive(Debug, Subcommand)]
pub enum RunCommand {
    #[command(name = "generate")]
    /// Generate the segments of a shape, writing them to a file or stdout.
    Generate(GenerateArgs),

    #[command(name = "example")]
    /// Print the default render config.
    Example(ExampleArgs),

    #[command(name = "list")]
    /// List the available shape types.
    List,
}

/// Data formats for config and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Arguments for the generate command. Compiled with clap.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(short = 't', long = "type", conflicts_with = "query")]
    /// Shape type: full, half_structure, one_section or half_snowflake [default: full].
    pub shape_type: Option<String>,

    #[arg(short, long)]
    /// URL query string to read the request from, e.g. "type=half_snowflake&order=3".
    pub query: Option<String>,

    #[arg(short = 'n', long, allow_negative_numbers = true)]
    /// Recursion order, overriding the config and query.
    pub order: Option<i32>,

    #[arg(short, long = "cfg")]
    /// Path to a render config file (.json, .toml, .yaml/.yml).
    pub cfg_path: Option<String>,

    #[arg(short, long = "output")]
    /// Path to write the drawing to; the format follows the extension.
    pub output_path: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    /// Format for printing the drawing to stdout.
    pub format: Format,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed config.
    pub format: Format,
}

/// Parse the command line arguments for the kochflake binary.
pub fn parse_cli_args() -> KochflakeCli {
    KochflakeCli::parse()
}
