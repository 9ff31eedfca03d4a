//! csvsieve CLI - select columns and filter rows of CSV documents
//!
//! # Main Commands
//!
//! ```bash
//! csvsieve process "a,b\n1,2" -c a -f "b>1"   # Process inline CSV text
//! csvsieve process-file data.csv -c col1,col3  # Process a CSV file
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! csvsieve parse data.csv          # Just parse CSV to JSON records
//! csvsieve operators               # Show available filter operators
//! ```

use clap::{Parser, Subcommand};
use csvsieve::{
    parse_document_file, process_csv_file, process_csv_file_to, process_csv_text,
    process_csv_text_to, ProcessOutcome,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csvsieve")]
#[command(about = "Select columns and filter rows of CSV documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process raw CSV text given on the command line
    Process {
        /// CSV text, rows separated by newlines
        csv: String,

        /// Comma-separated column selection (empty = all columns)
        #[arg(short, long, default_value = "")]
        columns: String,

        /// Newline-separated filter expressions, e.g. "header1>1"
        #[arg(short, long, default_value = "")]
        filters: String,

        /// Output file (default: from CSV_OUTPUT_PATH/CSV_OUTPUT_NAME env)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Process a CSV file
    ProcessFile {
        /// Input CSV file
        input: PathBuf,

        /// Comma-separated column selection (empty = all columns)
        #[arg(short, long, default_value = "")]
        columns: String,

        /// Newline-separated filter expressions, e.g. "header1>1"
        #[arg(short, long, default_value = "")]
        filters: String,

        /// Output file (default: from CSV_OUTPUT_PATH/CSV_OUTPUT_NAME env)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a CSV file and output its rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show available filter operators
    Operators,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            csv,
            columns,
            filters,
            output,
        } => cmd_process(&csv, &columns, &filters, output.as_deref()),

        Commands::ProcessFile {
            input,
            columns,
            filters,
            output,
        } => cmd_process_file(&input, &columns, &filters, output.as_deref()),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Operators => cmd_operators(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_process(
    csv: &str,
    columns: &str,
    filters: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = match output {
        Some(path) => process_csv_text_to(csv, columns, filters, path)?,
        None => process_csv_text(csv, columns, filters)?,
    };

    report_outcome(&outcome);
    Ok(())
}

fn cmd_process_file(
    input: &Path,
    columns: &str,
    filters: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let outcome = match output {
        Some(path) => process_csv_file_to(input, columns, filters, path)?,
        None => process_csv_file(input, columns, filters)?,
    };

    report_outcome(&outcome);
    Ok(())
}

fn report_outcome(outcome: &ProcessOutcome) {
    eprintln!("   Columns: {}", outcome.headers.join(", "));
    eprintln!(
        "   Rows: {} in, {} out",
        outcome.input_rows, outcome.output_rows
    );
    eprintln!("💾 Output written to: {}", outcome.output_path.display());
    println!("{}", outcome.csv);
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let document = parse_document_file(input)?;

    eprintln!("   Columns: {}", document.headers.join(", "));
    eprintln!("✅ Parsed {} rows", document.row_count());

    let json = serde_json::to_string_pretty(&document.to_records())?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_operators() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", csvsieve::operators_description());
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
