//! route-parser: scrape `# route:` annotations into a JSON artifact.
//!
//! ```text
//! route-parser -f routes.json app.rb other.rb
//! route-parser -p < app.rb
//! ```
//!
//! Inputs are processed in order; with no inputs, stdin is read.

use std::io::{self, Write};
use std::path::PathBuf;
use clap::Parser;

use route_list::observability::init_logging;
use route_list::parser::{parse_files, parse_reader};
use route_list::store::artifact::{records_to_string, save_records};

#[derive(Parser)]
#[command(name = "route-parser")]
#[command(about = "Parse route annotations from source comments into a JSON file", long_about = None)]
struct Cli {
    /// Output file ("-" writes to stdout).
    #[arg(short, long, default_value = "routes.json")]
    file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Source files to scan.
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let routes = if cli.inputs.is_empty() {
        parse_reader(io::stdin().lock())?
    } else {
        parse_files(&cli.inputs)?
    };
    tracing::info!(routes = routes.len(), inputs = cli.inputs.len(), "Parsed route annotations");

    if cli.file.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", records_to_string(&routes, cli.pretty)?)?;
    } else {
        save_records(&cli.file, &routes, cli.pretty)?;
    }

    Ok(())
}
