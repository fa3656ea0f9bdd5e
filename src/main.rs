use std::{fs::File, io::BufWriter, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use iau_wkt::{save_as, IauCatalog, OutputFormat};
use tracing::{dispatcher, error, info, Dispatch};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    #[value(name = "OFF")]
    Off,
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
}

/// Convert the IAU catalogue of planetary radii into WKT coordinate reference systems.
#[derive(Parser, Debug)]
#[command(name = "iau-wkt", version, about)]
struct Cli {
    /// IAU catalogue, the publication year is read from its name (`..._IAU2015.csv`)
    csv_file: Utf8PathBuf,

    /// Output file, standard output when absent
    #[arg(long)]
    output: Option<Utf8PathBuf>,

    /// Output format
    #[arg(long, default_value = "WKT", value_parser = ["WKT", "CSV"])]
    format: String,

    /// Logging level, RUST_LOG takes precedence when set
    #[arg(long, value_enum, default_value_t = Verbosity::Info)]
    verbose: Verbosity,
}

fn build_dispatch(verbose: Verbosity) -> Dispatch {
    let level = match verbose {
        Verbosity::Off => return Dispatch::none(),
        Verbosity::Info => "info",
        Verbosity::Debug => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    Dispatch::new(subscriber)
}

fn run(cli: &Cli, dispatch: Dispatch) -> Result<()> {
    let format: OutputFormat = cli.format.parse()?;
    let catalog = IauCatalog::new(&cli.csv_file)
        .with_context(|| format!("Cannot open catalogue {}", cli.csv_file))?
        .with_dispatch(dispatch);

    let start = Instant::now();
    let entries = catalog
        .process_file()
        .with_context(|| format!("Cannot process catalogue {}", cli.csv_file))?;
    info!(
        "function [process_file] finished in {} ms",
        start.elapsed().as_millis()
    );
    info!("{} WKTs loaded from {}", entries.len(), cli.csv_file);

    let start = Instant::now();
    match &cli.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Cannot create {path}"))?;
            save_as(&entries, catalog.publication(), format, BufWriter::new(file))?;
        }
        None => save_as(
            &entries,
            catalog.publication(),
            format,
            std::io::stdout().lock(),
        )?,
    }
    info!("function [save_as] finished in {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.csv_file.is_file() {
        let mut command = Cli::command();
        command
            .error(
                ErrorKind::ValueValidation,
                format!("catalogue file not found: {}", cli.csv_file),
            )
            .exit();
    }

    let dispatch = build_dispatch(cli.verbose);
    let _guard = dispatcher::set_default(&dispatch);

    match run(&cli, dispatch.clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
