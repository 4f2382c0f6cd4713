use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aar-summary")]
#[command(author, version)]
#[command(about = "Summarize after-action review feedback into a formatted document")]
#[command(after_help = "\
EXAMPLES:

    # List the classes that have responses
    aar-summary classes --sheet responses.json

    # Generate an HTML report for one class
    aar-summary generate --sheet responses.json --class 101 --title \"Fire Drill\" -o report.html

    # Convert already generated text without calling the service
    cat summary.txt | aar-summary convert --format text

    # Store the model to use
    aar-summary config --model gpt-4o-mini

CONFIGURATION:

Settings are read from ~/.config/aar-summary/config.toml unless --config is given:

    api_key = \"$OPENAI_API_KEY\"
    model = \"gpt-4o-mini\"
    max_tokens = 1000

OPENAI_API_KEY in the environment overrides api_key.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize one class's feedback and write the report
    Generate {
        /// Sheet export: a JSON array of rows, the first row holding headers
        #[arg(long)]
        sheet: PathBuf,

        /// Class id to summarize
        #[arg(long)]
        class: String,

        /// Activity title shown after "AAR" in the report title
        #[arg(long, default_value = "")]
        title: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert generated text into a document without calling the service
    Convert {
        /// Input file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the distinct class ids in a sheet
    Classes {
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Write settings to the configuration file, keeping any not given
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// API key, or a reference such as "$OPENAI_API_KEY"
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the chat-completions API
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub max_tokens: Option<u32>,
}

#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep **bold** spans as bold instead of flattening inline markers
    #[arg(long)]
    pub bold_spans: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Text,
    Json,
}
