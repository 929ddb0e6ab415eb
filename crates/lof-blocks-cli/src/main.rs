use anyhow::{Context, Result};
use lof_blocks_config::Settings;
use lof_blocks_engine::{
    BlockRenderer, EscapedNotation, LOF_KEYWORD, ParameterSet, block_to_html, locate_blocks,
};
use std::{env, fs, path::PathBuf, process};

/// Renders every `lof` block in `markdown` to an HTML fragment.
fn render_document(markdown: &str, defaults: &ParameterSet) -> Vec<String> {
    let renderer = BlockRenderer::new(EscapedNotation);

    locate_blocks(markdown, renderer.keyword())
        .iter()
        .map(|block| {
            let rendered = renderer.render(&block.body, Some(block.section()), defaults);
            format!(
                "<!-- {LOF_KEYWORD} block at line {} -->\n{}",
                block.header_line + 1,
                block_to_html(&rendered)
            )
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    let (markdown_path, config_path) = match args.len() {
        2 => (PathBuf::from(&args[1]), Settings::config_path()),
        3 => (PathBuf::from(&args[1]), PathBuf::from(&args[2])),
        _ => {
            eprintln!("Usage: {} <markdown-file> [config-file]", args[0]);
            process::exit(1);
        }
    };

    let settings = match Settings::load_from_path(&config_path) {
        Ok(Some(settings)) => {
            log::info!("Using settings from {}", config_path.display());
            settings
        }
        Ok(None) => {
            log::info!(
                "No settings at {}, using defaults",
                config_path.display()
            );
            Settings::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let markdown = fs::read_to_string(&markdown_path)
        .with_context(|| format!("Failed to read {}", markdown_path.display()))?;

    let fragments = render_document(&markdown, &settings.block_settings);
    if fragments.is_empty() {
        log::warn!("No {LOF_KEYWORD} blocks found in {}", markdown_path.display());
    }
    for fragment in fragments {
        println!("{fragment}");
    }

    Ok(())
}
