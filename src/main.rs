use anyhow::{Context, Result};
use clap::Parser;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use num_format::{Locale, ToFormattedString};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use osm_river_inflows::analysis::analyse_river;
use osm_river_inflows::fileio::{
    OutputFormat, read_feature_collection, write_inflows_csv, write_mouths_geojson,
};
use osm_river_inflows::overpass::overpass_query;
use osm_river_inflows::report::LogReporter;

mod cli_args;

fn init_logging(args: &cli_args::Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(args.verbose.log_level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    if let Some(log_file) = &args.log_file {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Opening log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(f)));
    }
    builder.try_init()?;
    Ok(())
}

fn check_output(filename: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && filename.exists() {
        error!(
            "Output file {} already exists and --overwrite not used. Refusing to overwrite",
            filename.display()
        );
        anyhow::bail!("Output file {} already exists", filename.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = cli_args::Args::parse();

    if args.print_overpass_query {
        print!("{}", overpass_query(&args.river, args.overpass_timeout));
        return Ok(());
    }

    init_logging(&args)?;
    let global_start = Instant::now();
    info!(
        "Welcome to osm-river-inflows v{}. Have fun! :)",
        std::env!("CARGO_PKG_VERSION"),
    );

    let Some(input_filename) = &args.input_filename else {
        anyhow::bail!("No input file given");
    };
    if !input_filename.is_file() {
        error!(
            "Input file ( {} ) is not a file we can read",
            input_filename.display()
        );
        anyhow::bail!("Input file ( {} ) is not a file", input_filename.display());
    }
    for output in [&args.csv_output, &args.geojson_output].into_iter().flatten() {
        check_output(output, args.overwrite)?;
    }

    info!("Starting to read {:?}", input_filename);
    let collection = read_feature_collection(input_filename)
        .with_context(|| format!("Reading {}", input_filename.display()))?;
    info!(
        "Read {} features",
        collection.len().to_formatted_string(&Locale::en)
    );
    debug!("Match mode for river names: {}", args.match_mode);

    let report = analyse_river(&collection, &args.river, args.match_mode, &mut LogReporter)
        .inspect_err(|e| error!("{}", e))?;

    if let Some(csv_output) = &args.csv_output {
        let f = BufWriter::new(std::fs::File::create(csv_output)?);
        let num_written = write_inflows_csv(f, &report.inflow_distances)?;
        info!(
            "Wrote {} inflow distances to {}",
            num_written.to_formatted_string(&Locale::en),
            csv_output.display()
        );
    }

    if let Some(geojson_output) = &args.geojson_output {
        let mut f = BufWriter::new(std::fs::File::create(geojson_output)?);
        let num_written = write_mouths_geojson(
            &mut f,
            &report,
            OutputFormat::from_filename(geojson_output),
        )?;
        f.flush()?;
        info!(
            "Wrote {} mouths to {}",
            num_written.to_formatted_string(&Locale::en),
            geojson_output.display()
        );
    }

    info!(
        "Finished all in {:.1}sec",
        global_start.elapsed().as_secs_f32()
    );
    Ok(())
}
