use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::path::PathBuf;

use osm_river_inflows::namefilter::MatchMode;

/// Calculate the length of a river, and how far each of its inflows is from its mouth
///
/// Reads a GeoJSON file of river features (e.g. exported from Overpass Turbo). Every feature
/// whose `name` matches `--river` is part of the river, every other feature is an inflow.
///
/// The mouth of a river is the last point of its line (last point of the last line for a
/// MultiLineString). Distances are geodesic, on the WGS-84 ellipsoid, from the river's mouth to
/// each inflow's mouth.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Input GeoJSON filename
    #[arg(short, long, value_name = "FILENAME.geojson", required_unless_present = "print_overpass_query")]
    pub input_filename: Option<PathBuf>,

    /// Name of the river
    #[arg(short, long, default_value = "Обь")]
    pub river: String,

    /// How feature names are compared to `--river`
    ///   • `contains`: the name contains the river name (e.g. `Малая Обь` is part of `Обь`)
    ///   • `exact`: the name is the river name
    ///   • `not-contains` / `not-exact`: the opposite, i.e. swap river and inflows
    #[arg(short, long, default_value = "contains", value_name = "MODE")]
    pub match_mode: MatchMode,

    /// Append log messages to this file, rather than stderr
    #[arg(long, value_name = "FILENAME.log")]
    pub log_file: Option<PathBuf>,

    /// Save the distance to each inflow as CSV, with columns `name` and `distance_km`
    #[arg(long, value_name = "FILENAME.csv")]
    pub csv_output: Option<PathBuf>,

    /// Save the mouths of the river & inflows as GeoJSON points.
    /// Filename .geojson will be GeoJSON, .geojsons will be GeoJSONSeq
    #[arg(long, value_name = "OUTPUT.geojson[s]")]
    pub geojson_output: Option<PathBuf>,

    /// If an output file already exists, overwrite it. By default, exit if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Print the Overpass QL query to download this river & its inflows, and exit
    #[arg(long)]
    pub print_overpass_query: bool,

    /// Timeout (in seconds) for the printed Overpass query
    #[arg(long, default_value_t = 30, value_name = "SECONDS")]
    pub overpass_timeout: u32,

    #[command(flatten)]
    pub verbose: Verbosity<clap_verbosity_flag::InfoLevel>,
}
