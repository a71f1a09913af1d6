//! ldif2csv CLI - Export LDIF directory dumps to CSV
//!
//! ```bash
//! ldif2csv groups.ldif                     # rows on stdout, cn/owner columns
//! ldif2csv groups.ldif groups.csv          # write to a file
//! ldif2csv groups.ldif -a cn,owner,mail    # pick the attributes to keep
//! ```

use clap::Parser;
use ldif2csv::{parse_file_auto, write_csv, write_csv_file, ConvertResult};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ldif2csv")]
#[command(about = "Export LDIF directory dumps to CSV", long_about = None)]
struct Cli {
    /// Input LDIF file
    input: PathBuf,

    /// Output CSV file (default: stdout)
    output: Option<PathBuf>,

    /// Attributes to keep, comma-separated
    #[arg(short, long, value_delimiter = ',', default_value = "cn,owner")]
    attributes: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ConvertResult<()> {
    eprintln!("📄 Parsing LDIF: {}", cli.input.display());

    let result = parse_file_auto(&cli.input, &cli.attributes)?;
    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Attributes: {}", cli.attributes.join(", "));
    eprintln!("✅ Parsed {} records", result.records.len());

    match cli.output {
        Some(path) => {
            write_csv_file(&path, &result.records)?;
            eprintln!("💾 Output written to: {}", path.display());
        }
        None => {
            write_csv(io::stdout().lock(), &result.records)?;
        }
    }

    Ok(())
}
