use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tetraview_common::ViewerConfig;
use tetraview_input::Key;
use tetraview_render::{DebugTextRenderer, Renderer, Scene};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tetraview-cli", about = "Headless tetraview tool")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override viewport width
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Override viewport height
    #[arg(long, global = true)]
    height: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Simulate frames and print their WVP matrices
    Frames {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "3")]
        count: u64,
        /// Keys to press before the first frame, in order
        #[arg(short, long, value_enum)]
        key: Vec<ArrowKey>,
        /// Cursor position to move to before the first frame, as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        mouse: Option<(i32, i32)>,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl From<ArrowKey> for Key {
    fn from(key: ArrowKey) -> Self {
        match key {
            ArrowKey::Up => Key::ArrowUp,
            ArrowKey::Down => Key::ArrowDown,
            ArrowKey::Left => Key::ArrowLeft,
            ArrowKey::Right => Key::ArrowRight,
        }
    }
}

impl Cli {
    fn viewer_config(&self) -> anyhow::Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y: {e}"))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.viewer_config()?;

    match cli.command {
        Commands::Info => {
            println!("tetraview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", tetraview_common::crate_info());
            println!("transform: {}", tetraview_transform::crate_info());
            println!("camera: {}", tetraview_camera::crate_info());
            println!("input: {}", tetraview_input::crate_info());
            println!("render: {}", tetraview_render::crate_info());
        }
        Commands::Frames { count, key, mouse } => {
            let mut scene = Scene::new(&config);
            if let Some((x, y)) = mouse {
                scene.on_mouse_move(x, y);
                tracing::debug!(edge = ?scene.camera().edge_pan(), "cursor placed");
            }
            for k in key {
                scene.handle_key(k.into());
            }

            let renderer = DebugTextRenderer::new();
            for _ in 0..count {
                let frame = scene.advance_frame();
                print!("{}", renderer.render(&frame));
            }
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("5,384"), Ok((5, 384)));
        assert_eq!(parse_point(" -3 , 10 "), Ok((-3, 10)));
        assert!(parse_point("5").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn size_overrides_apply_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tetraview-cli",
            "frames",
            "--width",
            "800",
            "--height",
            "600",
        ])
        .unwrap();
        let config = cli.viewer_config().unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);

        let scene = Scene::new(&config);
        assert_eq!(scene.camera().viewport().center().x, 400);
    }

    #[test]
    fn zero_size_override_is_rejected() {
        let cli = Cli::try_parse_from(["tetraview-cli", "--width", "0", "config"]).unwrap();
        assert!(cli.viewer_config().is_err());
    }

    #[test]
    fn cli_accepts_frame_options() {
        let cli = Cli::try_parse_from([
            "tetraview-cli",
            "frames",
            "--count",
            "2",
            "--key",
            "up",
            "--key",
            "left",
            "--mouse",
            "0,384",
        ])
        .unwrap();
        match cli.command {
            Commands::Frames { count, key, mouse } => {
                assert_eq!(count, 2);
                assert_eq!(key.len(), 2);
                assert_eq!(mouse, Some((0, 384)));
            }
            _ => panic!("expected frames command"),
        }
    }
}
