//! Command implementations for the Thermogrid CLI.
//!
//! Provides subcommands for rendering a temperature grid to SVG, printing
//! a monthly summary and probing the hover tooltip at a point.

use clap::Subcommand;
use tg_render::{Size, ViewMode};

pub mod loader;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render the grid and write it as an SVG file
    Render {
        /// CSV path or http(s) URL; `.gz` inputs are decompressed
        #[arg(short = 'i', long)]
        input: String,

        /// Output path for the SVG document
        #[arg(short = 'o', long)]
        output: String,

        #[arg(long, default_value_t = 1000.0)]
        width: f64,

        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Which extreme drives cell color: max or min
        #[arg(short = 'm', long, default_value = "max")]
        mode: ViewMode,

        /// Optional JSON grid config
        #[arg(short = 'c', long)]
        config: Option<String>,
    },

    /// Print a month x year table of monthly extremes
    Summary {
        #[arg(short = 'i', long)]
        input: String,

        #[arg(short = 'm', long, default_value = "max")]
        mode: ViewMode,

        #[arg(short = 'c', long)]
        config: Option<String>,
    },

    /// Print the tooltip shown for a pointer position on the rendered grid
    Hover {
        #[arg(short = 'i', long)]
        input: String,

        #[arg(short = 'x', long)]
        x: f64,

        #[arg(short = 'y', long)]
        y: f64,

        #[arg(long, default_value_t = 1000.0)]
        width: f64,

        #[arg(long, default_value_t = 600.0)]
        height: f64,

        #[arg(short = 'm', long, default_value = "max")]
        mode: ViewMode,

        #[arg(short = 'c', long)]
        config: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            input,
            output,
            width,
            height,
            mode,
            config,
        } => {
            render::run_render(&input, &output, Size::new(width, height), mode, config.as_deref())
                .await
        }
        Command::Summary {
            input,
            mode,
            config,
        } => render::run_summary(&input, mode, config.as_deref()).await,
        Command::Hover {
            input,
            x,
            y,
            width,
            height,
            mode,
            config,
        } => {
            render::run_hover(
                &input,
                x,
                y,
                Size::new(width, height),
                mode,
                config.as_deref(),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn parses_render_arguments() {
        let cli = Cli::try_parse_from([
            "tg", "render", "-i", "t.csv", "-o", "out.svg", "--width", "800", "--mode", "min",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                input,
                output,
                width,
                height,
                mode,
                config,
            } => {
                assert_eq!(input, "t.csv");
                assert_eq!(output, "out.svg");
                assert_eq!(width, 800.0);
                assert_eq!(height, 600.0);
                assert_eq!(mode, ViewMode::Min);
                assert!(config.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        let parsed = Cli::try_parse_from(["tg", "summary", "-i", "t.csv", "--mode", "mean"]);
        assert!(parsed.is_err());
    }
}
