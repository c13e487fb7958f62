use crate::problem::{kilometers::Kilometers, location::Location};

/// Length of `path` travelled in the given order: the sum of great-circle legs
/// between consecutive points. No reordering or shortest-path search is done,
/// so this is an estimate of the route a driver following the group order
/// would take. Older reports label this value "MST distance".
pub fn estimate_route_distance(path: &[Location]) -> Kilometers {
    path.windows(2)
        .map(|leg| leg[0].haversine_distance(&leg[1]))
        .sum()
}

/// Store, then every stop in order, then back to the store.
pub fn round_trip_path<'a, I>(store: &Location, stops: I) -> Vec<Location>
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut path = vec![*store];
    path.extend(stops.into_iter().copied());
    path.push(*store);
    path
}
