use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalogue::{ExtBus, ExtStop};
use crate::error::SettingsError;
use crate::geo::Coordinates;
use crate::map_renderer::RenderSettings;
use crate::routing::RoutingSettings;

/// A request document. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputDocument {
    pub base_requests: Vec<BaseRequest>,
    pub render_settings: RenderSettings,
    pub routing_settings: Option<RoutingSettingsInput>,
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// Wait time in minutes, velocity in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettingsInput {
    pub bus_wait_time: i64,
    pub bus_velocity: f64,
}

impl TryFrom<RoutingSettingsInput> for RoutingSettings {
    type Error = SettingsError;

    fn try_from(input: RoutingSettingsInput) -> Result<Self, Self::Error> {
        RoutingSettings::new(input.bus_wait_time, input.bus_velocity)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(flatten)]
    pub kind: StatRequestKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequestKind {
    Bus { name: String },
    Stop { name: String },
    Map,
    Route { from: String, to: String },
}

impl InputDocument {
    /// Splits the base requests into stops and buses, keeping their order.
    pub fn network(&self) -> (Vec<ExtStop>, Vec<ExtBus>) {
        let mut stops = vec![];
        let mut buses = vec![];
        for request in &self.base_requests {
            match request {
                BaseRequest::Stop {
                    name,
                    latitude,
                    longitude,
                    road_distances,
                } => stops.push(ExtStop {
                    name: name.clone(),
                    position: Coordinates {
                        lat: *latitude,
                        lng: *longitude,
                    },
                    road_distances: road_distances
                        .iter()
                        .map(|(to, &distance)| (to.clone(), distance))
                        .collect(),
                }),
                BaseRequest::Bus {
                    name,
                    stops: stop_names,
                    is_roundtrip,
                } => buses.push(ExtBus {
                    name: name.clone(),
                    stops: stop_names.clone(),
                    is_roundtrip: *is_roundtrip,
                }),
            }
        }
        (stops, buses)
    }
}
