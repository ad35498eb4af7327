//! The JSON request document and its answers.

pub mod input;
pub mod output;

use log::{debug, info};

use crate::catalogue::TransportCatalogue;
use crate::error::ProcessError;
use crate::request_handler::RequestHandler;
use crate::routing::{RoutingSettings, TransportRouter};
use crate::timer::Timer;
use input::{InputDocument, StatRequestKind};
use output::Response;

/// Loads the network, builds the router if routing settings are given and answers
/// every stat request in order. Any load or build failure aborts before answering.
pub fn process(doc: &InputDocument) -> Result<Vec<Response>, ProcessError> {
    let mut timer = Timer::start();

    let (stops, buses) = doc.network();
    let catalogue = TransportCatalogue::new(&stops, &buses)?;
    timer.lap("load");

    let settings = doc
        .routing_settings
        .map(RoutingSettings::try_from)
        .transpose()?;
    let router = settings
        .map(|settings| TransportRouter::new(&catalogue, settings))
        .transpose()?;
    if router.is_some() {
        timer.lap("build");
    }

    let handler = RequestHandler::new(&catalogue, &doc.render_settings, router.as_ref());
    let responses = doc
        .stat_requests
        .iter()
        .map(|request| -> Result<Response, ProcessError> {
            let id = request.id;
            let response = match &request.kind {
                StatRequestKind::Bus { name } => {
                    handler.bus_stat(name)?.map(|stat| Response::bus(id, stat))
                }
                StatRequestKind::Stop { name } => {
                    handler.buses_by_stop(name).map(|buses| Response::Stop {
                        buses: buses.iter().cloned().collect(),
                        request_id: id,
                    })
                }
                StatRequestKind::Map => Some(Response::Map {
                    map: handler.render_map(),
                    request_id: id,
                }),
                StatRequestKind::Route { from, to } => handler
                    .route(from, to)
                    .map(|itinerary| Response::route(id, itinerary)),
            };
            if response.is_none() {
                debug!("Request {} not found: {:?}", id, request.kind);
            }
            Ok(response.unwrap_or_else(|| Response::not_found(id)))
        })
        .collect::<Result<Vec<_>, ProcessError>>()?;
    timer.lap("answer");

    info!(
        "Answered {} requests in {:?}",
        responses.len(),
        timer.elapsed()
    );
    Ok(responses)
}
