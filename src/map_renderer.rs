use itertools::Itertools;
use serde::Deserialize;

use crate::catalogue::{Bus, Stop, StopIdx, TransportCatalogue};
use crate::geo::Coordinates;
use crate::svg::{
    Circle, Color, Document, Point, Polyline, StrokeLineCap, StrokeLineJoin, Text, WithPathProps,
};

const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

/// Maps geographic coordinates onto the canvas so that all given points fit inside
/// the padding, keeping the aspect ratio.
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: &[Coordinates], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = SphereProjector {
            padding,
            min_lng: 0.0,
            max_lat: 0.0,
            zoom: 0.0,
        };
        let (Some(min_lng), Some(max_lng)) = (
            points.iter().map(|p| p.lng).min_by(f64::total_cmp),
            points.iter().map(|p| p.lng).max_by(f64::total_cmp),
        ) else {
            return projector;
        };
        let (Some(min_lat), Some(max_lat)) = (
            points.iter().map(|p| p.lat).min_by(f64::total_cmp),
            points.iter().map(|p| p.lat).max_by(f64::total_cmp),
        ) else {
            return projector;
        };
        projector.min_lng = min_lng;
        projector.max_lat = max_lat;

        let width_zoom =
            (max_lng - min_lng >= EPSILON).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom =
            (max_lat - min_lat >= EPSILON).then(|| (height - 2.0 * padding) / (max_lat - min_lat));
        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(zoom), None) | (None, Some(zoom)) => zoom,
            (None, None) => 0.0,
        };
        projector
    }

    pub fn project(&self, coordinates: Coordinates) -> Point {
        Point::new(
            (coordinates.lng - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coordinates.lat) * self.zoom + self.padding,
        )
    }
}

pub struct MapRenderer<'a> {
    catalogue: &'a TransportCatalogue,
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, settings: &'a RenderSettings) -> Self {
        MapRenderer {
            catalogue,
            settings,
        }
    }

    /// Route lines, then bus labels, then stop circles, then stop labels.
    pub fn render(&self) -> Document {
        let buses = self
            .catalogue
            .buses()
            .map(|(_, bus)| bus)
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect_vec();
        let stops = self
            .catalogue
            .served_stops()
            .map(|(_, stop)| stop)
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect_vec();

        let projector = SphereProjector::new(
            &stops.iter().map(|stop| stop.position).collect_vec(),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut doc = Document::new();
        for (i, bus) in buses.iter().enumerate() {
            self.add_route_line(&mut doc, &projector, bus, self.palette_color(i));
        }
        for (i, bus) in buses.iter().enumerate() {
            self.add_bus_labels(&mut doc, &projector, bus, self.palette_color(i));
        }
        for stop in &stops {
            let center = projector.project(stop.position);
            doc.add(Circle::new(center, self.settings.stop_radius).fill("white".into()));
        }
        for stop in &stops {
            self.add_stop_label(&mut doc, &projector, stop);
        }
        doc
    }

    /// Cycles through the palette; an empty palette paints nothing.
    fn palette_color(&self, i: usize) -> Color {
        let palette = &self.settings.color_palette;
        if palette.is_empty() {
            Color::None
        } else {
            palette[i % palette.len()].clone()
        }
    }

    fn position(&self, projector: &SphereProjector, stop: StopIdx) -> Point {
        projector.project(self.catalogue.stop(stop).position)
    }

    fn add_route_line(
        &self,
        doc: &mut Document,
        projector: &SphereProjector,
        bus: &Bus,
        color: Color,
    ) {
        let forth = bus.stops.iter();
        let back = bus.stops.iter().rev().skip(1);
        let stops: Box<dyn Iterator<Item = _>> = if bus.is_roundtrip {
            Box::new(forth)
        } else {
            Box::new(forth.chain(back))
        };
        doc.add(
            stops
                .map(|&stop| self.position(projector, stop))
                .collect::<Polyline>()
                .fill(Color::None)
                .stroke(color)
                .stroke_width(self.settings.line_width)
                .line_cap(StrokeLineCap::Round)
                .line_join(StrokeLineJoin::Round),
        );
    }

    fn add_bus_labels(
        &self,
        doc: &mut Document,
        projector: &SphereProjector,
        bus: &Bus,
        color: Color,
    ) {
        let (Some(&first), Some(&last)) = (bus.stops.first(), bus.stops.last()) else {
            return;
        };
        let mut ends = vec![first];
        if !bus.is_roundtrip && first != last {
            ends.push(last);
        }

        for stop in ends {
            let label = Text::new(self.position(projector, stop), bus.name.as_str())
                .offset(self.settings.bus_label_offset)
                .font_size(self.settings.bus_label_font_size)
                .font_family("Verdana")
                .font_weight("bold");
            doc.add(self.underlayer(label.clone()));
            doc.add(label.fill(color.clone()));
        }
    }

    fn add_stop_label(&self, doc: &mut Document, projector: &SphereProjector, stop: &Stop) {
        let label = Text::new(projector.project(stop.position), stop.name.as_str())
            .offset(self.settings.stop_label_offset)
            .font_size(self.settings.stop_label_font_size)
            .font_family("Verdana");
        doc.add(self.underlayer(label.clone()));
        doc.add(label.fill("black".into()));
    }

    fn underlayer(&self, text: Text) -> Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }
}
