//! Scene construction for the temperature grid.
//!
//! [`render`] is a pure function of the cells, the layout, the view mode and
//! the style settings. Calling it twice with the same inputs yields equal
//! scenes, and each call builds a fresh scene, so redraws never accumulate.

use crate::color::{color_scale, SCALE_MAX, SCALE_MIN};
use crate::config::GridConfig;
use crate::geometry::Rect;
use crate::interaction::ViewMode;
use crate::layout::Layout;
use crate::scene::{
    Baseline, Gradient, GradientStop, HitRegion, Layer, LayerKind, Paint, PathCommand, Scene,
    Shape, TextAnchor,
};
use tg_data::{Cell, MONTHS};
use tg_utils::dates::month_name;

/// Id of the legend gradient definition.
pub const LEGEND_GRADIENT_ID: &str = "temperature-legend-gradient";

/// Temperatures labelled next to the legend bar.
pub const LEGEND_TICKS: [f64; 5] = [0.0, 10.0, 20.0, 30.0, 40.0];

const LABEL_GAP: f64 = 8.0;
const TICK_LENGTH: f64 = 4.0;
const GRADIENT_STOPS: usize = 11;

pub fn render(cells: &[Cell], layout: &Layout, mode: ViewMode, config: &GridConfig) -> Scene {
    let mut scene = Scene::new(layout.size.width, layout.size.height);

    scene.layers.push(Layer {
        kind: LayerKind::Axes,
        shapes: axes(layout, config),
    });

    let (gradient, legend_shapes) = legend(layout, config);
    scene.gradients.extend(gradient);
    scene.layers.push(Layer {
        kind: LayerKind::Legend,
        shapes: legend_shapes,
    });

    let mut backgrounds = Vec::new();
    let mut sparklines = Vec::new();
    if layout.has_area() {
        for (index, cell) in cells.iter().enumerate() {
            let Some(rect) = layout.cell_rect(cell.year, cell.month) else {
                continue;
            };
            let fill = match mode.value_of(cell) {
                Some(value) => color_scale(value),
                None => config.no_data_color,
            };
            backgrounds.push(Shape::Rect {
                rect,
                fill: Paint::Solid(fill),
                stroke: None,
            });

            if cell.is_empty() {
                continue;
            }
            sparklines.extend(sparkline_shapes(
                cell,
                rect.inset(config.sparkline_padding),
                config,
            ));
            scene.hit_regions.push(HitRegion {
                rect,
                cell_index: index,
            });
        }
    } else if !cells.is_empty() {
        log::debug!("layout has no area; skipping {} cells", cells.len());
    }

    scene.layers.push(Layer {
        kind: LayerKind::Background,
        shapes: backgrounds,
    });
    scene.layers.push(Layer {
        kind: LayerKind::Sparkline,
        shapes: sparklines,
    });
    scene
}

fn text(
    x: f64,
    y: f64,
    content: String,
    anchor: TextAnchor,
    baseline: Baseline,
    config: &GridConfig,
) -> Shape {
    Shape::Text {
        x,
        y,
        content,
        anchor,
        baseline,
        color: config.text_color,
        font_size: config.font_size,
    }
}

fn axes(layout: &Layout, config: &GridConfig) -> Vec<Shape> {
    if !layout.has_area() {
        return Vec::new();
    }
    let mut shapes = Vec::new();
    let label_y = layout.inner.y - LABEL_GAP;
    for &year in layout.x.domain() {
        if let Some(band) = layout.x_of_year(year) {
            shapes.push(text(
                band.center(),
                label_y,
                year.to_string(),
                TextAnchor::Middle,
                Baseline::Alphabetic,
                config,
            ));
        }
    }
    let label_x = layout.inner.x - LABEL_GAP;
    for month in MONTHS {
        if let (Some(band), Some(name)) = (layout.y_of_month(month), month_name(month)) {
            shapes.push(text(
                label_x,
                band.center(),
                name.to_string(),
                TextAnchor::End,
                Baseline::Middle,
                config,
            ));
        }
    }
    shapes
}

/// Position of a temperature along the legend bar, 40 °C at the top.
fn legend_y(bar: &Rect, celsius: f64) -> f64 {
    let t = (celsius - SCALE_MIN) / (SCALE_MAX - SCALE_MIN);
    bar.y + bar.height * (1.0 - t)
}

fn legend(layout: &Layout, config: &GridConfig) -> (Option<Gradient>, Vec<Shape>) {
    let bar = layout.legend.bar;
    if bar.is_empty() {
        return (None, Vec::new());
    }

    // bottom (y = 1) is the cold end
    let stops = (0..GRADIENT_STOPS)
        .map(|i| {
            let offset = i as f64 / (GRADIENT_STOPS - 1) as f64;
            GradientStop {
                offset,
                color: color_scale(SCALE_MIN + offset * (SCALE_MAX - SCALE_MIN)),
            }
        })
        .collect();
    let gradient = Gradient {
        id: LEGEND_GRADIENT_ID.to_string(),
        x1: 0.0,
        y1: 1.0,
        x2: 0.0,
        y2: 0.0,
        stops,
    };

    let mut shapes = vec![Shape::Rect {
        rect: bar,
        fill: Paint::Gradient(LEGEND_GRADIENT_ID.to_string()),
        stroke: None,
    }];

    let tick_x = bar.x + bar.width;
    for tick in LEGEND_TICKS {
        let y = legend_y(&bar, tick);
        shapes.push(Shape::Path {
            commands: vec![
                PathCommand::MoveTo { x: tick_x, y },
                PathCommand::LineTo {
                    x: tick_x + TICK_LENGTH,
                    y,
                },
            ],
            stroke: config.text_color,
            stroke_width: 1.0,
        });
        shapes.push(text(
            tick_x + TICK_LENGTH + 2.0,
            y,
            format!("{tick:.0}"),
            TextAnchor::Start,
            Baseline::Middle,
            config,
        ));
    }

    let center = bar.x + bar.width / 2.0;
    shapes.push(Shape::Text {
        x: center,
        y: bar.y - LABEL_GAP,
        content: format!("{SCALE_MAX:.0}°C"),
        anchor: TextAnchor::Middle,
        baseline: Baseline::Alphabetic,
        color: color_scale(SCALE_MAX),
        font_size: config.font_size,
    });
    shapes.push(Shape::Text {
        x: center,
        y: bar.y + bar.height + LABEL_GAP,
        content: format!("{SCALE_MIN:.0}°C"),
        anchor: TextAnchor::Middle,
        baseline: Baseline::Hanging,
        color: color_scale(SCALE_MIN),
        font_size: config.font_size,
    });

    (Some(gradient), shapes)
}

/// Points of one sparkline series inside `area`.
///
/// x follows sequence order (a lone point sits in the middle); y uses the
/// fixed 0-40 °C range so heights compare across cells, clamped to the box.
pub fn sparkline_points(values: &[f64], area: &Rect) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if n > 1 {
                area.x + area.width * i as f64 / (n - 1) as f64
            } else {
                area.x + area.width / 2.0
            };
            let t = ((value - SCALE_MIN) / (SCALE_MAX - SCALE_MIN)).clamp(0.0, 1.0);
            (x, area.y + area.height * (1.0 - t))
        })
        .collect()
}

/// Smooth path through the points (uniform Catmull-Rom as cubic Beziers).
pub fn smooth_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let Some(&(x0, y0)) = points.first() else {
        return Vec::new();
    };
    let mut commands = vec![PathCommand::MoveTo { x: x0, y: y0 }];
    if points.len() == 1 {
        commands.push(PathCommand::LineTo { x: x0, y: y0 });
        return commands;
    }
    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];
        commands.push(PathCommand::CubicTo {
            x1: p1.0 + (p2.0 - p0.0) / 6.0,
            y1: p1.1 + (p2.1 - p0.1) / 6.0,
            x2: p2.0 - (p3.0 - p1.0) / 6.0,
            y2: p2.1 - (p3.1 - p1.1) / 6.0,
            x: p2.0,
            y: p2.1,
        });
    }
    commands
}

fn sparkline_shapes(cell: &Cell, area: Rect, config: &GridConfig) -> Vec<Shape> {
    if area.is_empty() {
        return Vec::new();
    }
    let maxima: Vec<f64> = cell.days.iter().map(|d| d.max_temp).collect();
    let minima: Vec<f64> = cell.days.iter().map(|d| d.min_temp).collect();
    vec![
        Shape::Path {
            commands: smooth_path(&sparkline_points(&maxima, &area)),
            stroke: config.max_line_color,
            stroke_width: config.sparkline_stroke_width,
        },
        Shape::Path {
            commands: smooth_path(&sparkline_points(&minima, &area)),
            stroke: config.min_line_color,
            stroke_width: config.sparkline_stroke_width,
        },
    ]
}
