//! Example: Print georeferencing and a sample row of a DTM GeoTIFF.
//!
//! Usage: cargo run --example raster_info -- <dtm.tif> [row]

use dtm_raster::{GeoTiffRaster, RasterSource};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <dtm.tif> [row]", args[0]);
        eprintln!("Example: {} momotombo_20m.tif 100", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let row: usize = args
        .get(2)
        .map(|s| s.parse().expect("Invalid row"))
        .unwrap_or(0);

    println!("Loading {}...", path);
    let start = Instant::now();

    let raster = match GeoTiffRaster::open(path) {
        Ok(raster) => raster,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded in {:.3}s", start.elapsed().as_secs_f64());

    let extent = raster.extent();
    println!("Rows: {}\tCols: {}", extent.rows, extent.cols);
    println!("Upper left corner: ({}, {})", extent.x_origin, extent.y_origin);
    println!("Pixel dimensions: ({}, {})", extent.pixel_width, extent.pixel_height);
    println!(
        "Range (W/E/S/N): -R{:.2}/{:.2}/{:.2}/{:.2}",
        extent.x_min(),
        extent.x_max(),
        extent.y_min(),
        extent.y_max()
    );
    if let Some(nodata) = raster.no_data_value() {
        println!("No-data value: {}", nodata);
    }

    match raster.read_row(1, row) {
        Ok(samples) => {
            let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            println!("Row {}: {} samples, min {:.2}, max {:.2}", row, samples.len(), min, max);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
