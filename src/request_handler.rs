use std::collections::BTreeSet;

use crate::catalogue::{BusStat, TransportCatalogue};
use crate::error::CatalogueError;
use crate::map_renderer::{MapRenderer, RenderSettings};
use crate::routing::{Itinerary, TransportRouter};

/// Answers stat requests against a loaded catalogue. Routing is optional: without
/// routing settings every route request is a miss.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    renderer: MapRenderer<'a>,
    router: Option<&'a TransportRouter<'a>>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(
        catalogue: &'a TransportCatalogue,
        render_settings: &'a RenderSettings,
        router: Option<&'a TransportRouter<'a>>,
    ) -> Self {
        RequestHandler {
            catalogue,
            renderer: MapRenderer::new(catalogue, render_settings),
            router,
        }
    }

    /// `Ok(None)` if there is no such bus.
    pub fn bus_stat(&self, name: &str) -> Result<Option<BusStat>, CatalogueError> {
        self.catalogue
            .bus_by_name(name)
            .map(|bus| self.catalogue.bus_stat(bus))
            .transpose()
    }

    pub fn buses_by_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.catalogue
            .stop_index(name)
            .map(|stop_idx| self.catalogue.buses_by_stop(stop_idx))
    }

    pub fn render_map(&self) -> String {
        self.renderer.render().to_string()
    }

    pub fn route(&self, from: &str, to: &str) -> Option<Itinerary> {
        self.router?.resolve(from, to)
    }
}
