use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use smartroute_planner::{
    planner::{summary::PlanSummary, trip::Trip},
    problem::fleet::Availability,
};

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn trips_table(trips: &[Trip]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Trip",
        "Time window",
        "Shipments",
        "Distance",
        "Trip time (min)",
        "Vehicle",
        "Capacity",
        "Time",
        "Coverage",
    ]);

    for trip in trips {
        let utilization = trip.utilization();
        table.add_row(vec![
            trip.id().to_string(),
            trip.time_window().to_string(),
            trip.number_of_shipments().to_string(),
            trip.distance().to_string(),
            format!("{:.1}", trip.trip_time_minutes()),
            trip.vehicle_type().to_string(),
            percent(utilization.capacity),
            percent(utilization.time),
            percent(utilization.coverage),
        ]);
    }

    table
}

pub fn summary_table(summary: &PlanSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Vehicle", "Trips", "Remaining"]);

    for usage in &summary.vehicle_types {
        let remaining = match usage.remaining {
            Some(Availability::Limited(count)) => count.to_string(),
            Some(Availability::Unlimited) => String::from("unlimited"),
            None => String::from("-"),
        };
        table.add_row(vec![
            usage.vehicle_type.clone(),
            usage.trips.to_string(),
            remaining,
        ]);
    }

    table
}
