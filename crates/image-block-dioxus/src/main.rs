use std::env;
use std::process;

use anyhow::Context;
use dioxus::prelude::*;
use image_block_config::ToolConfig;
use image_block_dioxus::ui::App;
use image_block_dioxus::ui::components::ErrorScreen;

const USAGE: &str = "[config.toml|config.json] [block.json] [--read-only]";

struct Playground {
    config: ToolConfig,
    data: serde_json::Value,
    read_only: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("image-block playground starting up");

    if let Err(e) = load_playground() {
        let program_name = env::args()
            .next()
            .unwrap_or_else(|| "image-block-dioxus".to_string());
        eprintln!("Error: {e:#}");
        eprintln!("Usage: {program_name} {USAGE}");
        process::exit(1);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    match load_playground() {
        Ok(playground) => rsx! {
            App {
                config: playground.config,
                data: playground.data,
                read_only: playground.read_only,
            }
        },
        Err(e) => rsx! {
            ErrorScreen { title: "Cannot start playground", message: format!("{e:#}") }
        },
    }
}

/// Read the config and initial block data named on the command line
fn load_playground() -> anyhow::Result<Playground> {
    let args: Vec<String> = env::args().skip(1).collect();
    let read_only = args.iter().any(|a| a == "--read-only");
    let mut paths = args.iter().filter(|a| !a.starts_with("--"));

    let config = match paths.next() {
        Some(path) => ToolConfig::load_from_path(path)?
            .with_context(|| format!("Config file {path} not found"))?,
        None => ToolConfig::default(),
    };

    let data = match paths.next() {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read block data from {path}"))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Block data in {path} is not valid JSON"))?
        }
        None => serde_json::Value::Null,
    };

    if paths.next().is_some() {
        anyhow::bail!("Too many arguments");
    }

    Ok(Playground {
        config,
        data,
        read_only,
    })
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Image block playground")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
