use std::collections::BTreeMap;

use log::info;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalogue::{ExtBus, ExtStop, TransportCatalogue};
use crate::error::ProcessError;
use crate::geo::Coordinates;
use crate::routing::{RoutingSettings, TransportRouter};
use crate::timer::Timer;

pub struct RandomNetworkPlan {
    pub num_stops: usize,
    pub num_buses: usize,
    pub max_stops_per_bus: usize,
}

/// Generates stops and buses where every hop a bus makes has a road distance,
/// sometimes only authored in one direction. Needs at least two stops.
pub fn random_network(rng: &mut impl Rng, plan: &RandomNetworkPlan) -> (Vec<ExtStop>, Vec<ExtBus>) {
    let stop_name = |i: usize| format!("Stop {i}");
    let mut distances: BTreeMap<(usize, usize), u32> = BTreeMap::new();

    let buses = (0..plan.num_buses)
        .map(|id| {
            let is_roundtrip = rng.random_bool(0.5);
            let len = rng.random_range(2..=plan.max_stops_per_bus.max(2));
            let mut stops: Vec<usize> = vec![rng.random_range(0..plan.num_stops)];
            while stops.len() < len {
                let next = rng.random_range(0..plan.num_stops);
                if Some(&next) != stops.last() {
                    stops.push(next);
                }
            }
            if is_roundtrip && stops.last() != stops.first() {
                stops.push(stops[0]);
            }

            for window in stops.windows(2) {
                let (from, to) = (window[0], window[1]);
                if !distances.contains_key(&(from, to)) && !distances.contains_key(&(to, from)) {
                    distances.insert((from, to), rng.random_range(100..5000));
                    if rng.random_bool(0.3) {
                        distances.insert((to, from), rng.random_range(100..5000));
                    }
                }
            }

            ExtBus {
                name: format!("{id}"),
                stops: stops.into_iter().map(stop_name).collect(),
                is_roundtrip,
            }
        })
        .collect::<Vec<_>>();

    let stops = (0..plan.num_stops)
        .map(|i| ExtStop {
            name: stop_name(i),
            position: Coordinates {
                lat: rng.random_range(55.5..55.9),
                lng: rng.random_range(37.3..37.9),
            },
            road_distances: distances
                .range((i, 0)..(i + 1, 0))
                .map(|(&(_, to), &distance)| (stop_name(to), distance))
                .collect(),
        })
        .collect();

    (stops, buses)
}

/// Builds a random network and answers random route requests, logging timings.
pub fn run(seed: u64, plan: &RandomNetworkPlan, num_queries: usize) -> Result<(), ProcessError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut timer = Timer::start();

    let (ext_stops, ext_buses) = random_network(&mut rng, plan);
    let catalogue = TransportCatalogue::new(&ext_stops, &ext_buses)?;
    timer.lap("generate");

    let settings = RoutingSettings::new(rng.random_range(0..10), rng.random_range(20.0..60.0))?;
    let router = TransportRouter::new(&catalogue, settings)?;
    timer.lap("build");

    let mut found = 0;
    for _ in 0..num_queries {
        let (Some(from), Some(to)) = (ext_stops.choose(&mut rng), ext_stops.choose(&mut rng)) else {
            break;
        };
        if router.resolve(&from.name, &to.name).is_some() {
            found += 1;
        }
    }
    timer.lap("queries");

    info!(
        "Seed {}: {} stops, {} buses, {} edges, {}/{} routes found",
        seed,
        catalogue.num_stops(),
        router.stats().num_buses,
        router.stats().num_edges,
        found,
        num_queries
    );
    for (name, duration) in timer.laps() {
        info!("  {:<10} {:?}", name, duration);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::col::{map_new, HashMap};
    use crate::graph::VertexIdx;
    use crate::routing::Leg;

    fn plan() -> RandomNetworkPlan {
        RandomNetworkPlan {
            num_stops: 40,
            num_buses: 12,
            max_stops_per_bus: 9,
        }
    }

    fn sample(seed: u64) -> (TransportCatalogue, RoutingSettings) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (stops, buses) = random_network(&mut rng, &plan());
        let catalogue = TransportCatalogue::new(&stops, &buses).unwrap();
        (catalogue, RoutingSettings::new(6, 40.0).unwrap())
    }

    #[test]
    fn rebuilding_yields_the_same_edges() {
        for seed in 0..5 {
            let (catalogue, settings) = sample(seed);
            let first = TransportRouter::new(&catalogue, settings).unwrap();
            let second = TransportRouter::new(&catalogue, settings).unwrap();

            let tuples = |router: &TransportRouter| {
                router
                    .graph()
                    .edges()
                    .map(|(edge_idx, edge)| {
                        let props = router.edge_props(edge_idx);
                        (edge.from, edge.to, props.distance, edge.weight.to_bits())
                    })
                    .sorted_by_key(|it| (it.0, it.1, it.2, it.3))
                    .collect_vec()
            };
            assert_eq!(tuples(&first), tuples(&second), "seed {seed}");
        }
    }

    #[test]
    fn committed_distance_is_the_shortest_ride_of_the_bus() {
        for seed in 0..5 {
            let (catalogue, settings) = sample(seed);
            let router = TransportRouter::new(&catalogue, settings).unwrap();

            for (bus_idx, bus) in catalogue.buses() {
                let mut expected: HashMap<(VertexIdx, VertexIdx), u64> = map_new();
                let mut directions = vec![bus.stops.clone()];
                if !bus.is_roundtrip {
                    directions.push(bus.stops.iter().rev().copied().collect());
                }
                for stops in &directions {
                    for i in 0..stops.len() {
                        let mut distance = 0;
                        for j in i + 1..stops.len() {
                            distance +=
                                catalogue.road_distance(stops[j - 1], stops[j]).unwrap() as u64;
                            if stops[i] == stops[j] {
                                continue;
                            }
                            let best = expected
                                .entry((stops[i].into(), stops[j].into()))
                                .or_insert(distance);
                            *best = (*best).min(distance);
                        }
                    }
                }

                let committed: HashMap<(VertexIdx, VertexIdx), u64> = router
                    .graph()
                    .edges()
                    .filter(|(edge_idx, _)| router.edge_props(*edge_idx).bus == bus_idx)
                    .map(|(edge_idx, edge)| {
                        ((edge.from, edge.to), router.edge_props(edge_idx).distance)
                    })
                    .collect();
                assert_eq!(committed, expected, "seed {seed}, bus {}", bus.name);
            }
        }
    }

    #[test]
    fn itineraries_add_up() {
        for seed in 0..5 {
            let (catalogue, settings) = sample(seed);
            let router = TransportRouter::new(&catalogue, settings).unwrap();

            let names = catalogue
                .stops()
                .map(|(_, stop)| stop.name.as_str())
                .collect_vec();
            for (&from, &to) in names.iter().cartesian_product(names.iter()) {
                let Some(itinerary) = router.resolve(from, to) else {
                    continue;
                };
                let leg_sum: f64 = itinerary.legs.iter().map(Leg::time).sum();
                assert!((leg_sum - itinerary.total_time).abs() < 1e-6);
                assert_eq!(itinerary.legs.len() % 2, 0);
                for pair in itinerary.legs.chunks(2) {
                    assert!(matches!(pair[0], Leg::Wait { time, .. } if time == 6.0));
                    assert!(matches!(pair[1], Leg::Ride { time, .. } if time >= 0.0));
                }
                if let Some(Leg::Wait { stop_name, .. }) = itinerary.legs.first() {
                    assert_eq!(stop_name, from);
                }
            }
        }
    }

    #[test]
    fn run_random_sample() {
        let _ = env_logger::builder().is_test(true).try_init();
        run(7, &plan(), 100).unwrap();
    }
}
