//! A minimal SVG document model: circles, polylines and text with shared path
//! properties, rendered to a string.

use std::fmt::{self, Display, Write};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "ColorRepr")]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

/// Colours arrive as a name, `[r, g, b]` or `[r, g, b, opacity]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Named(name) => Color::Named(name),
            ColorRepr::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorRepr::Rgba(r, g, b, opacity) => Color::Rgba(r, g, b, opacity),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, opacity) => write!(f, "rgba({r},{g},{b},{opacity})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// Presentation attributes shared by all shapes. Unset attributes are not rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap: Option<StrokeLineCap>,
    pub line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    fn render(&self, out: &mut impl Write) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.line_cap {
            write!(out, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(out, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Builder methods for everything carrying [`PathProps`].
pub trait WithPathProps: Sized {
    fn props_mut(&mut self) -> &mut PathProps;

    fn fill(mut self, color: Color) -> Self {
        self.props_mut().fill = Some(color);
        self
    }

    fn stroke(mut self, color: Color) -> Self {
        self.props_mut().stroke = Some(color);
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.props_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.props_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: StrokeLineJoin) -> Self {
        self.props_mut().line_join = Some(join);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Circle {
            center,
            radius,
            props: PathProps::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    props: PathProps,
}

impl FromIterator<Point> for Polyline {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Polyline {
            points: iter.into_iter().collect(),
            props: PathProps::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
    props: PathProps,
}

impl Text {
    pub fn new(position: Point, data: impl Into<String>) -> Self {
        Text {
            position,
            data: data.into(),
            font_size: 1,
            ..Default::default()
        }
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }
}

macro_rules! impl_with_path_props {
    ($($t:ty),*) => {
        $(impl WithPathProps for $t {
            fn props_mut(&mut self) -> &mut PathProps {
                &mut self.props
            }
        })*
    };
}

impl_with_path_props!(Circle, Polyline, Text);

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Object {
    fn from(circle: Circle) -> Self {
        Object::Circle(circle)
    }
}

impl From<Polyline> for Object {
    fn from(polyline: Polyline) -> Self {
        Object::Polyline(polyline)
    }
}

impl From<Text> for Object {
    fn from(text: Text) -> Self {
        Object::Text(text)
    }
}

fn write_escaped(out: &mut impl Write, data: &str) -> fmt::Result {
    for c in data.chars() {
        match c {
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '&' => out.write_str("&amp;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

impl Object {
    fn render(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Object::Circle(circle) => {
                write!(
                    out,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                    circle.center.x, circle.center.y, circle.radius
                )?;
                circle.props.render(out)?;
                out.write_str("/>")
            }
            Object::Polyline(polyline) => {
                out.write_str("<polyline points=\"")?;
                for (i, point) in polyline.points.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    write!(out, "{},{}", point.x, point.y)?;
                }
                out.write_char('"')?;
                polyline.props.render(out)?;
                out.write_str("/>")
            }
            Object::Text(text) => {
                out.write_str("<text")?;
                text.props.render(out)?;
                write!(
                    out,
                    " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    text.position.x, text.position.y, text.offset.x, text.offset.y, text.font_size
                )?;
                if let Some(family) = &text.font_family {
                    write!(out, " font-family=\"{family}\"")?;
                }
                if let Some(weight) = &text.font_weight {
                    write!(out, " font-weight=\"{weight}\"")?;
                }
                out.write_char('>')?;
                write_escaped(out, &text.data)?;
                out.write_str("</text>")
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n")?;
        f.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n")?;
        for object in &self.objects {
            f.write_str("  ")?;
            object.render(f)?;
            f.write_char('\n')?;
        }
        f.write_str("</svg>")
    }
}
