use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use smartroute_planner::{
    json::{loader::read_planning_input, types::JsonTripPlan},
    planner::{summary::PlanSummary, trip_builder::build_trips},
};
use tracing::{info, warn};

use crate::{
    file_utils::{output_path, read_input_folder},
    map::trips_to_geojson,
    parsers, report,
};

#[derive(Args)]
pub struct PlanArgs {
    /// Planning input, or a folder searched recursively for .json inputs
    #[arg(short, long)]
    input: PathBuf,

    /// Output folder for <name>.trips.json files
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also write a <name>.geojson map next to each trip plan
    #[arg(long, requires = "out")]
    map: bool,

    #[arg(long, value_parser = parsers::parse_duration)]
    travel_time_per_km: Option<jiff::SignedDuration>,

    #[arg(long, value_parser = parsers::parse_duration)]
    delivery_time: Option<jiff::SignedDuration>,
}

pub fn run(args: PlanArgs) -> Result<(), anyhow::Error> {
    let paths = if args.input.is_file() {
        vec![args.input.clone()]
    } else {
        read_input_folder(&args.input)
            .with_context(|| format!("Cannot read folder {}", args.input.display()))?
    };

    if paths.is_empty() {
        warn!("No planning input found in {:?}", args.input);
    }

    for path in paths {
        plan_file(&path, &args)?;
    }

    Ok(())
}

fn plan_file(path: &Path, args: &PlanArgs) -> Result<(), anyhow::Error> {
    info!("Planning {:?}", path);

    let mut input = read_planning_input(path)?;
    if let Some(travel_time_per_km) = args.travel_time_per_km {
        input.params.travel_time_per_km = travel_time_per_km;
    }
    if let Some(delivery_time) = args.delivery_time {
        input.params.delivery_time_per_shipment = delivery_time;
    }

    let mut fleet = input.params.initial_fleet();
    let trips = build_trips(&input.problem, &input.params, &mut fleet)
        .with_context(|| format!("Cannot plan {}", path.display()))?;
    let summary = PlanSummary::new(&trips, &fleet, &input.params);

    println!("{}", report::trips_table(&trips));
    println!("{}", report::summary_table(&summary));
    info!(
        trips = summary.trips,
        shipments = summary.shipments,
        "Total distance {}",
        summary.total_distance
    );

    let Some(out) = &args.out else {
        return Ok(());
    };
    fs::create_dir_all(out)?;

    let plan = JsonTripPlan::new(&trips, summary);
    let trips_path = output_path(out, path, "trips.json");
    fs::write(&trips_path, serde_json::to_string_pretty(&plan)?)?;
    info!("Trip plan written to {:?}", trips_path);

    if args.map {
        let map_path = output_path(out, path, "geojson");
        let collection = trips_to_geojson(input.problem.store(), &trips);
        fs::write(&map_path, serde_json::to_string_pretty(&collection)?)?;
        info!("Map written to {:?}", map_path);
    }

    Ok(())
}
