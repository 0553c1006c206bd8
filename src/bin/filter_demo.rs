use raster_filters::config::load_config;
use raster_filters::image::io::{load_raster, save_raster, write_json_file};
use raster_filters::image::PixelLayout;
use raster_filters::pipeline::{apply_chain, TimingBreakdown};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_raster(&config.input, config.premultiplied_alpha)?;
    let output = apply_chain(&image, &config.filters).map_err(|e| e.to_string())?;
    save_raster(&output.image, &config.output.image)?;

    println!(
        "Applied {} filter(s) to {} ({}x{}) in {:.3} ms",
        config.filters.len(),
        config.input.display(),
        image.width(),
        image.height(),
        output.timing.total_ms
    );
    for stage in &output.timing.stages {
        println!(
            "  [{}] {:<14} {:>9.3} ms",
            stage.step, stage.label, stage.elapsed_ms
        );
    }
    if let Some(slowest) = output.timing.slowest() {
        log::info!("slowest step: {} ({:.3} ms)", slowest.label, slowest.elapsed_ms);
    }
    println!("Saved result to {}", config.output.image.display());

    if let Some(path) = &config.output.report_json {
        let report = FilterRunSummary {
            input: config.input.clone(),
            width: image.width(),
            height: image.height(),
            layout: image.layout(),
            timing: output.timing,
        };
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: filter_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterRunSummary {
    input: PathBuf,
    width: usize,
    height: usize,
    layout: PixelLayout,
    timing: TimingBreakdown,
}
