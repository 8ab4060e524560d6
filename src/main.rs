use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowstat::report::{self, DEFAULT_OUTPUT_FILE};
use flowstat::MetricsTable;

const USAGE: &str = "Usage: flowstat <xml_file>";

#[derive(Parser, Debug)]
#[command(name = "flowstat", version)]
#[command(about = "Extract per-flow QoS metrics from an ns-3 FlowMonitor XML file")]
struct Args {
    /// FlowMonitor XML file (e.g. qos-results.xml)
    xml_file: PathBuf,

    /// Anything after the input file is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{USAGE}");
            std::process::exit(1);
        }
        // --help, --version and unknown flags
        Err(e) => e.exit(),
    };

    init_tracing();

    let table = MetricsTable::load(&args.xml_file).with_context(|| {
        format!("Failed to extract metrics from {}", args.xml_file.display())
    })?;

    let output = Path::new(DEFAULT_OUTPUT_FILE);
    report::write_csv(&table, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✅ Metrics saved to {}\n", output.display());
    println!("{}", report::console::render(&table));
    Ok(())
}

/// Diagnostics go to stderr so stdout only carries the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
