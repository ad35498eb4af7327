use std::time::Duration;

use log::{debug, info, warn};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::catalogue::{Bus, BusIdx, StopIdx, TransportCatalogue};
use crate::col::{map_with_capacity, PairMap};
use crate::error::{BuildError, CatalogueError};
use crate::graph::Graph;
use crate::routing::RoutingSettings;
use crate::timer::Timer;

/// What a committed edge stands for: board `bus` at `boarding_stop` and ride
/// `span_count` hops without getting off.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeProps {
    pub bus: BusIdx,
    pub span_count: u32,
    pub distance: u64,
    pub travel_time: f64,
    pub boarding_stop: StopIdx,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub from: StopIdx,
    pub to: StopIdx,
    pub span_count: u32,
    pub distance: u64,
}

#[derive(Debug, Clone)]
pub struct BuildStats {
    pub num_buses: usize,
    pub num_edges: usize,
    pub zero_distance_edges: usize,
    pub computation_time: Duration,
}

/// The cheapest candidate per directed stop pair of one bus, in first-offer order.
struct CandidateSet {
    candidates: Vec<Candidate>,
    position_by_pair: PairMap<StopIdx, usize>,
}

impl CandidateSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
            position_by_pair: map_with_capacity(capacity),
        }
    }

    /// Keeps `candidate` if it is strictly shorter than what is known for its pair.
    fn offer(&mut self, candidate: Candidate) {
        if candidate.from == candidate.to {
            return;
        }
        match self.position_by_pair.get(&(candidate.from, candidate.to)) {
            None => {
                self.position_by_pair
                    .insert((candidate.from, candidate.to), self.candidates.len());
                self.candidates.push(candidate);
            }
            Some(&position) => {
                if candidate.distance < self.candidates[position].distance {
                    self.candidates[position] = candidate;
                }
            }
        }
    }
}

/// Every (boarding, alighting) pair the bus offers, reduced to the shortest ride per pair.
///
/// Non-roundtrip buses are ridden in both directions over the same stop sequence.
pub fn collect_candidates(
    catalogue: &TransportCatalogue,
    bus: &Bus,
) -> Result<Vec<Candidate>, CatalogueError> {
    let stops = &bus.stops;
    let num_pairs = stops.len() * (stops.len() - 1) / 2;
    let mut set = CandidateSet::with_capacity(if bus.is_roundtrip {
        num_pairs
    } else {
        2 * num_pairs
    });

    for (i, &origin) in stops.iter().enumerate() {
        let mut forward: u64 = 0;
        let mut backward: u64 = 0;
        for j in i + 1..stops.len() {
            let (prev, current) = (stops[j - 1], stops[j]);
            let span_count = (j - i) as u32;

            forward += catalogue.require_road_distance(prev, current)? as u64;
            set.offer(Candidate {
                from: origin,
                to: current,
                span_count,
                distance: forward,
            });

            if !bus.is_roundtrip {
                backward += catalogue.require_road_distance(current, prev)? as u64;
                set.offer(Candidate {
                    from: current,
                    to: origin,
                    span_count,
                    distance: backward,
                });
            }
        }
    }
    Ok(set.candidates)
}

/// Turns every bus into graph edges. Vertices are the catalogue's stop indices and the
/// returned props are indexed by edge id.
pub fn build_graph(
    catalogue: &TransportCatalogue,
    settings: &RoutingSettings,
) -> Result<(Graph<f64>, Vec<EdgeProps>, BuildStats), BuildError> {
    let timer = Timer::start();

    // Buses are independent; results are committed in bus order below.
    let candidates_by_bus = catalogue
        .buses()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(_, bus)| {
            collect_candidates(catalogue, bus).map_err(|source| BuildError::Catalogue {
                bus: bus.name.clone(),
                source,
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let num_edges = candidates_by_bus.iter().map(|it| it.len()).sum();
    let mut graph = Graph::new(catalogue.num_stops());
    let mut edge_props = Vec::with_capacity(num_edges);
    let mut zero_distance_edges = 0;

    for ((bus_idx, bus), candidates) in catalogue.buses().zip(candidates_by_bus) {
        debug!(
            "Bus {:?} ({}) offers {} edges",
            bus_idx,
            bus.name,
            candidates.len()
        );
        for candidate in candidates {
            if candidate.distance == 0 {
                warn!(
                    "Bus {} rides zero metres from {} to {}",
                    bus.name,
                    catalogue.stop(candidate.from).name,
                    catalogue.stop(candidate.to).name
                );
                zero_distance_edges += 1;
            }
            let travel_time = settings.travel_time(candidate.distance);
            let edge_idx = graph.add_edge(candidate.from.into(), candidate.to.into(), travel_time);
            debug_assert_eq!(edge_idx.0 as usize, edge_props.len());
            edge_props.push(EdgeProps {
                bus: bus_idx,
                span_count: candidate.span_count,
                distance: candidate.distance,
                travel_time,
                boarding_stop: candidate.from,
            });
        }
    }

    let stats = BuildStats {
        num_buses: catalogue.buses().len(),
        num_edges: graph.num_edges(),
        zero_distance_edges,
        computation_time: timer.elapsed(),
    };
    info!(
        "Built routing graph: {} buses, {} stops served, {} edges in {:?}",
        stats.num_buses,
        catalogue.num_served_stops(),
        stats.num_edges,
        stats.computation_time
    );
    Ok((graph, edge_props, stats))
}
