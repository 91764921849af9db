//! Retained description of everything drawn for one render.
//!
//! A [`Scene`] is a plain value: layers of shapes drawn back to front,
//! gradient definitions, and invisible hit regions on top. Hosts either
//! serialize it to SVG with [`Scene::to_svg`] or ship it as JSON.

use crate::color::Rgb;
use crate::geometry::Rect;
use serde::Serialize;
use std::fmt::Write;

/// What a layer holds. Layers are always emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Axes,
    Legend,
    Background,
    Sparkline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    Alphabetic,
    Middle,
    Hanging,
}

impl Baseline {
    fn as_svg(self) -> &'static str {
        match self {
            Baseline::Alphabetic => "alphabetic",
            Baseline::Middle => "middle",
            Baseline::Hanging => "hanging",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Paint {
    Solid(Rgb),
    /// Reference to a [`Gradient`] by id.
    Gradient(String),
}

impl Paint {
    fn as_svg(&self) -> String {
        match self {
            Paint::Solid(color) => color.to_hex(),
            Paint::Gradient(id) => format!("url(#{id})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
}

/// Render path commands as an SVG `d` attribute.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(d, "M{},{}", num(x), num(y)),
            PathCommand::LineTo { x, y } => write!(d, "L{},{}", num(x), num(y)),
            PathCommand::CubicTo { x1, y1, x2, y2, x, y } => write!(
                d,
                "C{},{},{},{},{},{}",
                num(x1),
                num(y1),
                num(x2),
                num(y2),
                num(x),
                num(y)
            ),
        };
    }
    d
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Rect {
        rect: Rect,
        fill: Paint,
        stroke: Option<Rgb>,
    },
    Path {
        commands: Vec<PathCommand>,
        stroke: Rgb,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        baseline: Baseline,
        color: Rgb,
        font_size: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient in [0, 1].
    pub offset: f64,
    pub color: Rgb,
}

/// A linear gradient from `(x1, y1)` to `(x2, y2)` in the filled shape's
/// bounding-box units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: Vec<GradientStop>,
}

/// Invisible pointer target covering one non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitRegion {
    pub rect: Rect,
    /// Index into the cell slice that was rendered.
    pub cell_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub gradients: Vec<Gradient>,
    pub layers: Vec<Layer>,
    pub hit_regions: Vec<HitRegion>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            gradients: Vec::new(),
            layers: Vec::new(),
            hit_regions: Vec::new(),
        }
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Topmost hit region containing the point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&HitRegion> {
        self.hit_regions.iter().rev().find(|r| r.rect.contains(x, y))
    }

    pub fn shape_count(&self) -> usize {
        self.layers.iter().map(|l| l.shapes.len()).sum()
    }

    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = num(self.width),
            h = num(self.height)
        );

        if !self.gradients.is_empty() {
            svg.push_str("<defs>\n");
            for gradient in &self.gradients {
                let _ = writeln!(
                    svg,
                    r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    escape(&gradient.id),
                    num(gradient.x1),
                    num(gradient.y1),
                    num(gradient.x2),
                    num(gradient.y2)
                );
                for stop in &gradient.stops {
                    let _ = writeln!(
                        svg,
                        r#"<stop offset="{}" stop-color="{}"/>"#,
                        num(stop.offset),
                        stop.color
                    );
                }
                svg.push_str("</linearGradient>\n");
            }
            svg.push_str("</defs>\n");
        }

        for layer in &self.layers {
            let _ = writeln!(svg, r#"<g class="{}">"#, layer_class(layer.kind));
            for shape in &layer.shapes {
                write_shape(&mut svg, shape);
            }
            svg.push_str("</g>\n");
        }

        svg.push_str("<g class=\"hit\">\n");
        for region in &self.hit_regions {
            let _ = writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="transparent" pointer-events="all" data-cell="{}"/>"#,
                num(region.rect.x),
                num(region.rect.y),
                num(region.rect.width),
                num(region.rect.height),
                region.cell_index
            );
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

fn layer_class(kind: LayerKind) -> &'static str {
    match kind {
        LayerKind::Axes => "axes",
        LayerKind::Legend => "legend",
        LayerKind::Background => "background",
        LayerKind::Sparkline => "sparkline",
    }
}

fn write_shape(svg: &mut String, shape: &Shape) {
    let _ = match shape {
        Shape::Rect { rect, fill, stroke } => {
            let stroke = stroke
                .map(|c| format!(r#" stroke="{c}""#))
                .unwrap_or_default();
            writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                fill.as_svg(),
                stroke
            )
        }
        Shape::Path {
            commands,
            stroke,
            stroke_width,
        } => writeln!(
            svg,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            path_data(commands),
            stroke,
            num(*stroke_width)
        ),
        Shape::Text {
            x,
            y,
            content,
            anchor,
            baseline,
            color,
            font_size,
        } => writeln!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="{}" fill="{}" font-size="{}">{}</text>"#,
            num(*x),
            num(*y),
            anchor.as_svg(),
            baseline.as_svg(),
            color,
            num(*font_size),
            escape(content)
        ),
    };
}

/// Compact number formatting: two decimals, trailing zeros trimmed.
fn num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f64, index: usize) -> HitRegion {
        HitRegion {
            rect: Rect {
                x,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            cell_index: index,
        }
    }

    #[test]
    fn number_formatting() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(10.5), "10.5");
        assert_eq!(num(1.239), "1.24");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(f64::NAN), "0");
    }

    #[test]
    fn path_data_formats_commands() {
        let d = path_data(&[
            PathCommand::MoveTo { x: 0.0, y: 1.5 },
            PathCommand::CubicTo {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                x: 5.0,
                y: 6.0,
            },
            PathCommand::LineTo { x: 7.0, y: 8.0 },
        ]);
        assert_eq!(d, "M0,1.5C1,2,3,4,5,6L7,8");
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.hit_regions.push(region(0.0, 1));
        scene.hit_regions.push(region(5.0, 2));
        assert_eq!(scene.hit_test(7.0, 5.0).unwrap().cell_index, 2);
        assert_eq!(scene.hit_test(2.0, 5.0).unwrap().cell_index, 1);
        assert!(scene.hit_test(50.0, 50.0).is_none());
    }

    #[test]
    fn svg_escapes_text_and_orders_hit_layer_last() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.layers.push(Layer {
            kind: LayerKind::Axes,
            shapes: vec![Shape::Text {
                x: 1.0,
                y: 2.0,
                content: "<a & b>".into(),
                anchor: TextAnchor::Middle,
                baseline: Baseline::Middle,
                color: Rgb(0, 0, 0),
                font_size: 12.0,
            }],
        });
        scene.hit_regions.push(region(0.0, 0));
        let svg = scene.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("&lt;a &amp; b&gt;"));
        let axes = svg.find(r#"class="axes""#).unwrap();
        let hit = svg.find(r#"class="hit""#).unwrap();
        assert!(axes < hit);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn scene_serializes_to_json() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.layers.push(Layer {
            kind: LayerKind::Background,
            shapes: vec![Shape::Rect {
                rect: Rect::default(),
                fill: Paint::Solid(Rgb(1, 2, 3)),
                stroke: None,
            }],
        });
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["layers"][0]["kind"], "background");
        assert_eq!(json["layers"][0]["shapes"][0]["shape"], "rect");
        assert_eq!(json["layers"][0]["shapes"][0]["fill"]["value"], "#010203");
    }
}
