use crate::catalogue::{ExtBus, ExtStop, TransportCatalogue};
use crate::geo::Coordinates;

pub fn ext_stop(name: &str, lat: f64, lng: f64, road_distances: &[(&str, u32)]) -> ExtStop {
    ExtStop {
        name: name.to_string(),
        position: Coordinates { lat, lng },
        road_distances: road_distances
            .iter()
            .map(|&(to, distance)| (to.to_string(), distance))
            .collect(),
    }
}

pub fn ext_bus(name: &str, stops: &[&str], is_roundtrip: bool) -> ExtBus {
    ExtBus {
        name: name.to_string(),
        stops: stops.iter().map(|it| it.to_string()).collect(),
        is_roundtrip,
    }
}

/// Stops A, B, C served by the linear bus "1", 1000 m apart in both directions.
pub fn line_abc() -> TransportCatalogue {
    TransportCatalogue::new(
        &[
            ext_stop("A", 55.574371, 37.6517, &[("B", 1000)]),
            ext_stop("B", 55.581065, 37.64839, &[("A", 1000), ("C", 1000)]),
            ext_stop("C", 55.587655, 37.645687, &[("B", 1000)]),
        ],
        &[ext_bus("1", &["A", "B", "C"], false)],
    )
    .unwrap()
}

/// A small city: a ring line, a linear line sharing two stops with it, and an
/// isolated stop nobody serves.
pub fn small_city() -> TransportCatalogue {
    TransportCatalogue::new(
        &[
            ext_stop(
                "Harbour",
                43.590317,
                39.746833,
                &[("Market", 850), ("Station", 2400)],
            ),
            ext_stop(
                "Market",
                43.587795,
                39.716901,
                &[("Harbour", 900), ("Park", 1300)],
            ),
            ext_stop("Park", 43.581969, 39.719848, &[("Station", 1100)]),
            ext_stop("Station", 43.578079, 39.728372, &[("Harbour", 2300)]),
            ext_stop("University", 43.598701, 39.730623, &[("Market", 1800)]),
            ext_stop("Lighthouse", 43.61, 39.70, &[]),
        ],
        &[
            ext_bus(
                "ring",
                &["Harbour", "Market", "Park", "Station", "Harbour"],
                true,
            ),
            ext_bus("24", &["University", "Market", "Harbour"], false),
        ],
    )
    .unwrap()
}

/// A complete request document over a two-stop line plus an unserved stop.
pub const SAMPLE_DOCUMENT: &str = r#"{
    "base_requests": [
        {"type": "Bus", "name": "114", "stops": ["Sea Port", "Riviera"], "is_roundtrip": false},
        {"type": "Stop", "name": "Sea Port", "latitude": 43.581969, "longitude": 39.719848,
         "road_distances": {"Riviera": 1200}},
        {"type": "Stop", "name": "Riviera", "latitude": 43.587795, "longitude": 39.716901,
         "road_distances": {"Sea Port": 1200}},
        {"type": "Stop", "name": "Lonely", "latitude": 43.6, "longitude": 39.7}
    ],
    "render_settings": {
        "width": 200, "height": 200, "padding": 30,
        "stop_radius": 5, "line_width": 14,
        "bus_label_font_size": 20, "bus_label_offset": [7, 15],
        "stop_label_font_size": 20, "stop_label_offset": [7, -3],
        "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3,
        "color_palette": ["green", [255, 160, 0], "red"]
    },
    "routing_settings": {"bus_wait_time": 6, "bus_velocity": 36},
    "stat_requests": [
        {"id": 1, "type": "Bus", "name": "114"},
        {"id": 2, "type": "Stop", "name": "Riviera"},
        {"id": 3, "type": "Bus", "name": "751"},
        {"id": 4, "type": "Route", "from": "Sea Port", "to": "Riviera"},
        {"id": 5, "type": "Route", "from": "Sea Port", "to": "Lonely"},
        {"id": 6, "type": "Stop", "name": "Atlantis"},
        {"id": 7, "type": "Map"}
    ]
}"#;
