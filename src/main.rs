use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[macro_use]
extern crate tracing;

use encode_for_xml::{decode_file, encode_file, DEFAULT_INPUT, DEFAULT_OUTPUT, STDIO};

/// Escape `&`, `<`, `>`, `"` and `'` in a script so it can be pasted into an XML document.
///
/// With no arguments, reads `LogicMonitor_Portal_Alert_Statistics_COLLECT.groovy`
/// from the working directory and writes `encoded_script.txt`.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// File to read the script from, or `-` for stdin.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// File to write the result to, or `-` for stdout.
    ///
    /// Created if missing and truncated if present.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Resolve character references instead of escaping.
    #[arg(short, long)]
    decode: bool,
}

fn main() -> anyhow::Result<()> {
    // Use info level by default, load overrides from `RUST_LOG` env variable.
    // Logs go to stderr so stdout only carries the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    let args = Args::parse();

    info!(
        "{} {}",
        Args::command().get_name(),
        env!("CARGO_PKG_VERSION")
    );

    let (summary, action) = if args.decode {
        (decode_file(&args.input, &args.output)?, "decoded")
    } else {
        (encode_file(&args.input, &args.output)?, "encoded")
    };

    info!(
        "Read {} bytes, wrote {} bytes, {} references",
        summary.bytes_read, summary.bytes_written, summary.references
    );

    let message = format!("Script {action} and saved to {}", summary.output.display());
    if summary.output.as_os_str() == STDIO {
        info!("{message}");
    } else {
        println!("{message}");
    }

    Ok(())
}
