//! SVG back-end.
//!
//! Shapes are collected as they are drawn and written out in one go by
//! [`SvgRenderer::finish`]. Circles stay `<circle>` elements; everything
//! else is a `<polygon>`.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::RenderError;
use crate::geometry::{Canvas, Circle, Point};
use crate::palette::Color;
use crate::render::Renderer;

#[derive(Debug, Clone)]
enum Element {
    Rect { width: f64, height: f64, color: Color },
    Polygon { points: String, color: Color },
    Circle { cx: f64, cy: f64, r: f64, color: Color },
}

/// Collects drawing calls and serializes them as an SVG document.
///
/// # Example
/// ```
/// use quadlens::geometry::{Canvas, Point};
/// use quadlens::palette::Color;
/// use quadlens::render::Renderer;
/// use quadlens::svg::SvgRenderer;
///
/// let canvas = Canvas::new(100.0, 100.0).unwrap();
/// let mut svg = SvgRenderer::new(&canvas);
/// svg.fill_polygon(
///     &[Point::new(10.0, 10.0), Point::new(90.0, 10.0), Point::new(50.0, 80.0)],
///     Color::rgb(255, 0, 0),
/// );
/// let doc = svg.finish("demo").unwrap();
/// assert!(doc.contains("<polygon"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl SvgRenderer {
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            width: canvas.width(),
            height: canvas.height(),
            elements: Vec::new(),
        }
    }

    /// Number of elements drawn so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Write the document.
    pub fn finish(&self, title: &str) -> Result<String, RenderError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(svg_err)?;

        let (w, h) = (fmt_num(self.width), fmt_num(self.height));
        let view_box = format!("0 0 {} {}", w, h);
        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
        root.push_attribute(("width", w.as_str()));
        root.push_attribute(("height", h.as_str()));
        root.push_attribute(("viewBox", view_box.as_str()));
        writer.write_event(Event::Start(root)).map_err(svg_err)?;

        writer.write_event(Event::Start(BytesStart::new("title"))).map_err(svg_err)?;
        writer.write_event(Event::Text(BytesText::new(title))).map_err(svg_err)?;
        writer.write_event(Event::End(BytesEnd::new("title"))).map_err(svg_err)?;

        for element in &self.elements {
            writer.write_event(Event::Empty(element_tag(element))).map_err(svg_err)?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg"))).map_err(svg_err)?;

        let mut doc = String::from_utf8(writer.into_inner()).map_err(svg_err)?;
        doc.push('\n');
        Ok(doc)
    }
}

impl Renderer for SvgRenderer {
    fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        if vertices.len() < 3 {
            return;
        }
        let points = vertices
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(Element::Polygon { points, color });
    }

    fn fill_circle(&mut self, circle: &Circle, color: Color) {
        self.elements.push(Element::Circle {
            cx: circle.center.x,
            cy: circle.center.y,
            r: circle.radius(),
            color,
        });
    }

    fn fill_background(&mut self, canvas: &Canvas, color: Color) {
        self.elements.push(Element::Rect { width: canvas.width(), height: canvas.height(), color });
    }
}

fn svg_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Svg(e.to_string())
}

fn element_tag(element: &Element) -> BytesStart<'static> {
    let (mut tag, color) = match element {
        Element::Rect { width, height, color } => {
            let mut tag = BytesStart::new("rect");
            tag.push_attribute(("width", fmt_num(*width).as_str()));
            tag.push_attribute(("height", fmt_num(*height).as_str()));
            (tag, color)
        }
        Element::Polygon { points, color } => {
            let mut tag = BytesStart::new("polygon");
            tag.push_attribute(("points", points.as_str()));
            (tag, color)
        }
        Element::Circle { cx, cy, r, color } => {
            let mut tag = BytesStart::new("circle");
            tag.push_attribute(("cx", fmt_num(*cx).as_str()));
            tag.push_attribute(("cy", fmt_num(*cy).as_str()));
            tag.push_attribute(("r", fmt_num(*r).as_str()));
            (tag, color)
        }
    };

    tag.push_attribute(("fill", color.to_hex().as_str()));
    if !color.is_opaque() {
        tag.push_attribute(("fill-opacity", format!("{:.3}", color.opacity()).as_str()));
    }
    tag
}

/// Two decimals, without trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
