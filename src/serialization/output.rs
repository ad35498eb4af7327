use serde::Serialize;

use crate::catalogue::BusStat;
use crate::routing::{Itinerary, Leg};

pub const NOT_FOUND: &str = "not found";

/// One answer per stat request. Keys are serialized in lexicographic order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus {
        curvature: f64,
        request_id: i64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        buses: Vec<String>,
        request_id: i64,
    },
    Map {
        map: String,
        request_id: i64,
    },
    Route {
        items: Vec<RouteItem>,
        request_id: i64,
        total_time: f64,
    },
    NotFound {
        error_message: &'static str,
        request_id: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: u32,
        time: f64,
    },
}

impl From<Leg> for RouteItem {
    fn from(leg: Leg) -> Self {
        match leg {
            Leg::Wait { stop_name, time } => RouteItem::Wait { stop_name, time },
            Leg::Ride {
                bus,
                span_count,
                time,
            } => RouteItem::Bus {
                bus,
                span_count,
                time,
            },
        }
    }
}

impl Response {
    pub fn not_found(request_id: i64) -> Self {
        Response::NotFound {
            error_message: NOT_FOUND,
            request_id,
        }
    }

    pub fn bus(request_id: i64, stat: BusStat) -> Self {
        Response::Bus {
            curvature: stat.curvature,
            request_id,
            route_length: stat.route_length,
            stop_count: stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }

    pub fn route(request_id: i64, itinerary: Itinerary) -> Self {
        Response::Route {
            items: itinerary.legs.into_iter().map(RouteItem::from).collect(),
            request_id,
            total_time: itinerary.total_time,
        }
    }
}
