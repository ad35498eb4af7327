use log::debug;

use super::TransportRouter;

#[derive(Debug, Clone, PartialEq)]
pub enum Leg {
    Wait { stop_name: String, time: f64 },
    Ride { bus: String, span_count: u32, time: f64 },
}

impl Leg {
    pub fn time(&self) -> f64 {
        match self {
            Leg::Wait { time, .. } | Leg::Ride { time, .. } => *time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub total_time: f64,
    pub legs: Vec<Leg>,
}

impl TransportRouter<'_> {
    /// The fastest itinerary between two stops, or `None` if either stop is unknown or
    /// the destination cannot be reached.
    pub fn resolve(&self, from: &str, to: &str) -> Option<Itinerary> {
        let (Some(from_idx), Some(to_idx)) = (
            self.catalogue.stop_index(from),
            self.catalogue.stop_index(to),
        ) else {
            debug!("Unknown stop in route request {:?} -> {:?}", from, to);
            return None;
        };

        let route = self.router.build_route(from_idx.into(), to_idx.into())?;

        let wait_time = self.settings.wait_time();
        let mut legs = Vec::with_capacity(2 * route.edges.len());
        let mut total_time = 0.0;
        for &edge_idx in &route.edges {
            let props = self.edge_props(edge_idx);
            legs.push(Leg::Wait {
                stop_name: self.catalogue.stop(props.boarding_stop).name.clone(),
                time: wait_time,
            });
            legs.push(Leg::Ride {
                bus: self.catalogue.bus(props.bus).name.clone(),
                span_count: props.span_count,
                time: props.travel_time - wait_time,
            });
            total_time += props.travel_time;
        }
        debug_assert!((route.weight - total_time).abs() < 1e-6);

        Some(Itinerary { total_time, legs })
    }
}
