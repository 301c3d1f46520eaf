use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use escp_parser::{EscpParser, SliceSource, WriteSink};
use flexi_logger::Logger;

#[derive(Parser)]
#[command(version, about = "Dumps ESC/P printer command streams as a human-readable trace.")]
struct Cli {
    #[arg(help = "Printer stream to decode.")]
    path: PathBuf,

    #[arg(help = "Log decoder diagnostics to stderr.", long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let spec = if args.verbose { "debug" } else { "warn" };
    let _logger = Logger::try_with_env_or_str(spec)?.start()?;

    let data = fs::read(&args.path).with_context(|| format!("Error opening file: {}", args.path.display()))?;
    log::info!("decoding {} ({} bytes)", args.path.display(), data.len());

    let mut source = SliceSource::new(&data);
    let mut sink = WriteSink::new(BufWriter::new(io::stdout().lock()));
    let mut parser = EscpParser::new();

    // A terminal decode error is already reported on the trace itself; the
    // process still exits 0, like reaching end of stream.
    match parser.parse(&mut source, &mut sink) {
        Ok(()) => log::info!("reached end of stream at offset {}", source.position()),
        Err(error) => log::info!("stopped at offset {}: {error}", source.position()),
    }
    sink.into_inner().flush()?;
    Ok(())
}
