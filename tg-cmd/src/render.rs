//! Grid rendering, summaries and headless hover queries.

use crate::loader::{load_config, load_dataset};
use log::info;
use tg_data::{Dataset, MONTHS};
use tg_render::{Controller, GridConfig, Layout, Size, TooltipState, ViewMode};
use tg_utils::dates::month_name;
use tg_utils::format::format_temperature;

/// Render the grid for `input` and write it as SVG to `output`.
pub async fn run_render(
    input: &str,
    output: &str,
    size: Size,
    mode: ViewMode,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let dataset = load_dataset(input, &config).await?;
    let svg = render_svg(&dataset, &config, size, mode);
    tokio::fs::write(output, &svg).await?;
    info!(
        "Wrote {}x{} {} grid for {} years to {}",
        size.width,
        size.height,
        mode,
        dataset.years.len(),
        output
    );
    Ok(())
}

pub fn render_svg(dataset: &Dataset, config: &GridConfig, size: Size, mode: ViewMode) -> String {
    let layout = Layout::compute(size, &dataset.years, config);
    tg_render::render(&dataset.cells, &layout, mode, config).to_svg()
}

/// Print a year x month table of the mode's extremes.
pub async fn run_summary(
    input: &str,
    mode: ViewMode,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let dataset = load_dataset(input, &config).await?;
    print!("{}", summary_table(&dataset, mode));
    Ok(())
}

/// One row per month, one column per year, `N/A` for empty cells.
pub fn summary_table(dataset: &Dataset, mode: ViewMode) -> String {
    let mut out = format!("{:<5}", mode.label());
    for year in &dataset.years {
        out.push_str(&format!("{:>7}", year));
    }
    out.push('\n');

    for month in MONTHS {
        let name = month_name(month).map_or("?", |n| &n[..3]);
        out.push_str(&format!("{:<5}", name));
        for year in &dataset.years {
            let value = dataset.cell(*year, month).and_then(|c| mode.value_of(c));
            out.push_str(&format!("{:>7}", format_temperature(value)));
        }
        out.push('\n');
    }
    out
}

/// Print the tooltip a pointer at `(x, y)` would show.
pub async fn run_hover(
    input: &str,
    x: f64,
    y: f64,
    size: Size,
    mode: ViewMode,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let dataset = load_dataset(input, &config).await?;
    match hover_text(dataset, config, size, mode, x, y) {
        Some(text) => println!("{}", text),
        None => println!("no cell with data at ({}, {})", x, y),
    }
    Ok(())
}

/// Drive a headless controller to a point and report its tooltip.
pub fn hover_text(
    dataset: Dataset,
    config: GridConfig,
    size: Size,
    mode: ViewMode,
    x: f64,
    y: f64,
) -> Option<String> {
    let mut controller = Controller::new(config, TooltipState::default());
    controller.finish_loading(Ok(dataset));
    controller.set_size(size);
    if controller.mode() != mode {
        controller.toggle_mode();
    }
    controller.pointer_move(x, y);
    controller
        .presenter()
        .current
        .as_ref()
        .map(|info| format!("{}\n{}", info.title(), info.value_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "date,max_temperature,min_temperature\n\
                       2016-06-01,31.0,25.0\n\
                       2017-06-01,32.5,27.1\n\
                       2017-06-02,33.0,26.5\n";

    fn dataset() -> Dataset {
        Dataset::from_csv(CSV, 10).unwrap()
    }

    #[test]
    fn summary_lists_every_month() {
        let table = summary_table(&dataset(), ViewMode::Max);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].contains("2016") && lines[0].contains("2017"));
        assert!(lines[6].starts_with("Jun"));
        assert!(lines[6].contains("31.0") && lines[6].contains("33.0"));
        assert!(lines[1].starts_with("Jan"));
        assert!(lines[1].contains("N/A"));
    }

    #[test]
    fn summary_in_min_view() {
        let table = summary_table(&dataset(), ViewMode::Min);
        assert!(table.starts_with("min"));
        assert!(table.contains("26.5"));
        assert!(!table.contains("33.0"));
    }

    #[test]
    fn hover_reports_tooltip_for_cell_center() {
        let data = dataset();
        let config = GridConfig::default();
        let size = Size::new(900.0, 500.0);
        let layout = Layout::compute(size, &data.years, &config);
        let rect = layout.cell_rect(2017, 6).unwrap();
        let (x, y) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);

        let text = hover_text(data.clone(), config.clone(), size, ViewMode::Max, x, y).unwrap();
        assert_eq!(text, "2017-06\nmax: 33.0 °C");

        let text = hover_text(data, config, size, ViewMode::Min, x, y).unwrap();
        assert_eq!(text, "2017-06\nmin: 26.5 °C");
    }

    #[test]
    fn hover_outside_grid_is_none() {
        let size = Size::new(900.0, 500.0);
        assert!(hover_text(dataset(), GridConfig::default(), size, ViewMode::Max, 1.0, 1.0).is_none());
    }

    #[test]
    fn svg_output_is_a_document() {
        let svg = render_svg(
            &dataset(),
            &GridConfig::default(),
            Size::new(900.0, 500.0),
            ViewMode::Max,
        );
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[tokio::test]
    async fn render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("t.csv");
        let output = dir.path().join("grid.svg");
        std::fs::write(&input, CSV).unwrap();

        run_render(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            Size::new(640.0, 400.0),
            ViewMode::Min,
            None,
        )
        .await
        .unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("2017"));
    }
}
