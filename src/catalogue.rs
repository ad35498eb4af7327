use std::collections::BTreeSet;
use std::fmt::Debug;

use itertools::Itertools;
use log::debug;

use crate::col::{map_new, set_new, HashSet, PairMap};
use crate::error::CatalogueError;
use crate::geo::{compute_distance, Coordinates};
use crate::indexer::Indexer;

/// Dense index of a stop, assigned in insertion order. Doubles as the routing graph vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopIdx(pub u32);
impl Debug for StopIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("s#{}", self.0))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusIdx(pub u32);
impl Debug for BusIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("b#{}", self.0))
    }
}

/// A stop as authored in the input.
#[derive(Debug, Clone)]
pub struct ExtStop {
    pub name: String,
    pub position: Coordinates,
    pub road_distances: Vec<(String, u32)>,
}

/// A bus route as authored in the input.
#[derive(Debug, Clone)]
pub struct ExtBus {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Debug)]
pub struct Stop {
    pub name: String,
    pub position: Coordinates,
}

#[derive(Debug)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopIdx>,
    /// If false, the bus runs the stop sequence forward and then back again.
    pub is_roundtrip: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusStat {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: u64,
    pub curvature: f64,
}

pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_idx: Indexer<String, StopIdx>,
    bus_idx: Indexer<String, BusIdx>,
    road_distances: PairMap<StopIdx, u32>,
    buses_by_stop: Vec<BTreeSet<String>>,
}

impl TransportCatalogue {
    /// Loads stops first, then their road distances, then the buses.
    pub fn new(ext_stops: &[ExtStop], ext_buses: &[ExtBus]) -> Result<Self, CatalogueError> {
        let mut catalogue = TransportCatalogue {
            stops: Vec::with_capacity(ext_stops.len()),
            buses: Vec::with_capacity(ext_buses.len()),
            stop_idx: Indexer::new(|i| StopIdx(i as u32)),
            bus_idx: Indexer::new(|i| BusIdx(i as u32)),
            road_distances: map_new(),
            buses_by_stop: Vec::with_capacity(ext_stops.len()),
        };

        for ext_stop in ext_stops {
            catalogue.add_stop(ext_stop)?;
        }
        for (i, ext_stop) in ext_stops.iter().enumerate() {
            catalogue.add_road_distances(StopIdx(i as u32), ext_stop)?;
        }
        for ext_bus in ext_buses {
            catalogue.add_bus(ext_bus)?;
        }
        debug!(
            "Loaded {} stops, {} buses and {} road distances",
            catalogue.stops.len(),
            catalogue.buses.len(),
            catalogue.road_distances.len()
        );
        Ok(catalogue)
    }

    fn add_stop(&mut self, ext_stop: &ExtStop) -> Result<(), CatalogueError> {
        self.stop_idx
            .insert(ext_stop.name.clone())
            .ok_or_else(|| CatalogueError::DuplicateStop(ext_stop.name.clone()))?;
        self.stops.push(Stop {
            name: ext_stop.name.clone(),
            position: ext_stop.position,
        });
        self.buses_by_stop.push(BTreeSet::new());
        Ok(())
    }

    fn add_road_distances(
        &mut self,
        from: StopIdx,
        ext_stop: &ExtStop,
    ) -> Result<(), CatalogueError> {
        for (to_name, distance) in &ext_stop.road_distances {
            let to = self.stop_idx.get(to_name.as_str()).ok_or_else(|| {
                CatalogueError::UnknownStopInDistance {
                    from: ext_stop.name.clone(),
                    to: to_name.clone(),
                }
            })?;
            self.road_distances.entry((from, to)).or_insert(*distance);
        }
        Ok(())
    }

    fn add_bus(&mut self, ext_bus: &ExtBus) -> Result<(), CatalogueError> {
        if ext_bus.stops.len() < 2 {
            return Err(CatalogueError::TooFewStops(ext_bus.name.clone()));
        }
        let stops = ext_bus
            .stops
            .iter()
            .map(|name| {
                self.stop_idx
                    .get(name.as_str())
                    .ok_or_else(|| CatalogueError::UnknownStopInBus {
                        bus: ext_bus.name.clone(),
                        stop: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.bus_idx
            .insert(ext_bus.name.clone())
            .ok_or_else(|| CatalogueError::DuplicateBus(ext_bus.name.clone()))?;
        for &stop in &stops {
            self.buses_by_stop[stop.0 as usize].insert(ext_bus.name.clone());
        }
        self.buses.push(Bus {
            name: ext_bus.name.clone(),
            stops,
            is_roundtrip: ext_bus.is_roundtrip,
        });
        Ok(())
    }

    pub fn stop(&self, stop_idx: StopIdx) -> &Stop {
        &self.stops[stop_idx.0 as usize]
    }

    pub fn stops(&self) -> impl Iterator<Item = (StopIdx, &Stop)> {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, s)| (StopIdx(i as u32), s))
    }

    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn stop_index(&self, name: &str) -> Option<StopIdx> {
        self.stop_idx.get(name)
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stop_index(name).map(|stop_idx| self.stop(stop_idx))
    }

    pub fn buses(&self) -> impl ExactSizeIterator<Item = (BusIdx, &Bus)> {
        self.buses
            .iter()
            .enumerate()
            .map(|(i, b)| (BusIdx(i as u32), b))
    }

    pub fn bus(&self, bus_idx: BusIdx) -> &Bus {
        &self.buses[bus_idx.0 as usize]
    }

    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        self.bus_idx.get(name).map(|bus_idx| self.bus(bus_idx))
    }

    /// Sorted names of all buses calling at the stop.
    pub fn buses_by_stop(&self, stop_idx: StopIdx) -> &BTreeSet<String> {
        &self.buses_by_stop[stop_idx.0 as usize]
    }

    /// The authored `from -> to` distance, falling back to the authored `to -> from` one.
    pub fn road_distance(&self, from: StopIdx, to: StopIdx) -> Option<u32> {
        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .copied()
    }

    pub fn require_road_distance(&self, from: StopIdx, to: StopIdx) -> Result<u32, CatalogueError> {
        self.road_distance(from, to)
            .ok_or_else(|| CatalogueError::MissingRoadDistance {
                from: self.stop(from).name.clone(),
                to: self.stop(to).name.clone(),
            })
    }

    pub fn bus_stat(&self, bus: &Bus) -> Result<BusStat, CatalogueError> {
        let stop_count = if bus.is_roundtrip {
            bus.stops.len()
        } else {
            2 * bus.stops.len() - 1
        };
        let unique_stop_count = bus.stops.iter().collect::<HashSet<_>>().len();

        let mut route_length: u64 = 0;
        let mut geo_length = 0.0;
        for (&prev, &next) in bus.stops.iter().tuple_windows() {
            route_length += self.require_road_distance(prev, next)? as u64;
            if !bus.is_roundtrip {
                route_length += self.require_road_distance(next, prev)? as u64;
            }
            geo_length += compute_distance(self.stop(prev).position, self.stop(next).position);
        }
        if !bus.is_roundtrip {
            geo_length *= 2.0;
        }

        let curvature = if geo_length.abs() < 1e-6 {
            0.0
        } else {
            route_length as f64 / geo_length
        };

        Ok(BusStat {
            stop_count,
            unique_stop_count,
            route_length,
            curvature,
        })
    }

    /// Stops served by at least one bus.
    pub fn served_stops(&self) -> impl Iterator<Item = (StopIdx, &Stop)> {
        self.stops()
            .filter(|(stop_idx, _)| !self.buses_by_stop(*stop_idx).is_empty())
    }

    /// Number of distinct stops referenced by the buses.
    pub fn num_served_stops(&self) -> usize {
        let mut served = set_new();
        for bus in &self.buses {
            served.extend(bus.stops.iter().copied());
        }
        served.len()
    }
}
