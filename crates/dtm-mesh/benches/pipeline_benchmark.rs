//! Performance benchmarks for the raster to mesh pipeline.
//!
//! ## Running the benchmarks
//!
//! ```bash
//! cargo bench -p dtm-mesh
//! ```
//!
//! ## Benchmarks included
//!
//! - `resample/N` - Resample an N x N target grid from a 1000 x 1000 raster
//! - `assemble/N` - Build the solid from an N x N elevation grid
//! - `build_mesh/N` - Full pipeline for an N x N target grid

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dtm_mesh::{
    assemble, build_mesh, linspace, resample, MeshConfig, NoProgress, PhysicalBlock, TargetRegion,
};
use dtm_raster::{GeoExtent, MemoryRaster, RasterSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const RASTER_SIZE: usize = 1000;

fn bench_raster() -> MemoryRaster {
    let extent = GeoExtent {
        x_origin: 500_000.0,
        y_origin: 4_200_000.0,
        pixel_width: 30.0,
        pixel_height: -30.0,
        rows: RASTER_SIZE,
        cols: RASTER_SIZE,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    MemoryRaster::from_fn(extent, |row, col| {
        // Gentle slope plus noise, like a real hillside
        (row + col) as f64 * 0.5 + rng.gen_range(0.0..5.0)
    })
}

/// Region 50 pixels in from each raster edge.
fn bench_region(raster: &MemoryRaster) -> TargetRegion {
    let extent = raster.extent();
    TargetRegion {
        x0: extent.x_min() + 1500.0,
        x1: extent.x_max() - 1500.0,
        y0: extent.y_min() + 1500.0,
        y1: extent.y_max() - 1500.0,
    }
}

fn bench_config(raster: &MemoryRaster, size: usize) -> MeshConfig {
    let span = (size - 1) as f64;
    MeshConfig {
        region: Some(bench_region(raster)),
        block: PhysicalBlock {
            x1: span,
            y1: span,
            ..Default::default()
        },
        band: 1,
    }
}

fn bench_resample(c: &mut Criterion) {
    let raster = bench_raster();
    let mut group = c.benchmark_group("resample");

    for size in [100usize, 250, 500].iter() {
        group.throughput(Throughput::Elements((*size * *size) as u64));

        let region = bench_region(&raster);
        let xs = linspace(region.x0, region.x1, *size);
        let ys = linspace(region.y0, region.y1, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let grid = resample(black_box(&raster), 1, &xs, &ys, &mut NoProgress)
                    .expect("Resample should succeed");
                black_box(grid)
            });
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let raster = bench_raster();
    let mut group = c.benchmark_group("assemble");

    for size in [100usize, 250, 500].iter() {
        group.throughput(Throughput::Elements((*size * *size) as u64));

        let region = bench_region(&raster);
        let grid = resample(
            &raster,
            1,
            &linspace(region.x0, region.x1, *size),
            &linspace(region.y0, region.y1, *size),
            &mut NoProgress,
        )
        .expect("Resample should succeed");
        let xs = linspace(0.0, (*size - 1) as f64, *size);
        let ys = xs.clone();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(assemble(black_box(&grid), &xs, &ys, &mut NoProgress)));
        });
    }

    group.finish();
}

fn bench_build_mesh(c: &mut Criterion) {
    let raster = bench_raster();
    let mut group = c.benchmark_group("build_mesh");
    group.sample_size(20); // Larger grids take a while per iteration

    for size in [100usize, 250, 500].iter() {
        group.throughput(Throughput::Elements((*size * *size) as u64));
        let config = bench_config(&raster, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let output = build_mesh(&raster, black_box(&config), &mut NoProgress)
                    .expect("Build should succeed");
                black_box(output.mesh.faces().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resample, bench_assemble, bench_build_mesh);
criterion_main!(benches);
