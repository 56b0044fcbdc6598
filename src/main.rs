use std::path::PathBuf;

use clap::Parser;

use loadmaster::config::LoadmasterConfig;
use loadmaster::models::Compartment;
use loadmaster::report::render_plan;
use loadmaster::telemetry::init_tracing;
use loadmaster::workflow::{plan_load, LoadInputs};

#[derive(Parser)]
#[command(name = "loadmaster")]
#[command(about = "Split a shipment over the five cargo compartments")]
struct Args {
    /// Total shipment weight in kg, AVI included
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    total: String,

    /// Number of pieces
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pieces: String,

    /// Weight of the reserved AVI item carried in CP5, in kg
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    avi: String,

    /// Compartment to apply the load correction to
    #[arg(long, default_value = "CP3")]
    lmc_cp: Compartment,

    /// Pieces to remove from the correction compartment
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lmc_pieces: String,

    /// Capacity configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = LoadmasterConfig::load(args.config.as_deref())?;
    let capacities = settings.capacity_table()?;

    let inputs = LoadInputs::from_raw(&args.total, &args.pieces, &args.avi, args.lmc_cp, &args.lmc_pieces);
    let plan = plan_load(&inputs, &capacities);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan(&plan, &capacities));
    }
    Ok(())
}
