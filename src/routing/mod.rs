//! Fastest itineraries between stops.
//!
//! Every edge of the routing graph means "wait for a bus at the origin, then ride it
//! without getting off until the destination"; its weight is the wait plus the ride
//! time in minutes. The graph is built once from a loaded catalogue and only read
//! afterwards.

mod builder;
mod itinerary;
mod settings;

pub use builder::{build_graph, BuildStats, EdgeProps};
pub use itinerary::{Itinerary, Leg};
pub use settings::RoutingSettings;

use crate::catalogue::TransportCatalogue;
use crate::error::BuildError;
use crate::graph::{EdgeIdx, Graph};
use crate::shortest_path::dijkstra::Router;

pub struct TransportRouter<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    router: Router<f64>,
    edge_props: Vec<EdgeProps>,
    stats: BuildStats,
}

impl<'a> TransportRouter<'a> {
    /// Builds the routing graph and settles all shortest paths. Fails if a bus rides
    /// over a hop without a known road distance.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, BuildError> {
        let (graph, edge_props, stats) = build_graph(catalogue, &settings)?;
        Ok(Self {
            catalogue,
            settings,
            router: Router::new(graph),
            edge_props,
            stats,
        })
    }

    pub fn graph(&self) -> &Graph<f64> {
        self.router.graph()
    }

    pub fn edge_props(&self, edge_idx: EdgeIdx) -> &EdgeProps {
        &self.edge_props[edge_idx.0 as usize]
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}
