use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "tocify")]
#[command(about = "Table of contents generator for HTML articles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input HTML file or directory
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the annotated article copy (a directory when the input
    /// is a directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the full result as JSON instead of the bare TOC markup
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Render the TOC as an ordered list
    #[arg(long, default_value_t = false)]
    pub ordered: bool,

    /// CSS class for the outermost TOC list
    #[arg(long, value_name = "CLASS")]
    pub list_class: Option<String>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}
