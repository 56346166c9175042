//! This binary crate provides a CLI utility for batch converting a directory
//! of images into signed distance fields, written out as colorized PNGs.
//! Each input is thresholded on luminance into a binary mask, run through
//! one of the engines in `sdf_field_renderer`, and saved next to its
//! siblings in the output directory.
//!
//! Parallelism works at file granularity: a fixed pool of worker threads
//! pulls paths off a shared channel and each render runs serially inside
//! its worker, which keeps the machine busy without oversubscribing it.
//!
//! ## Usage
//!
//! This tool will create `out_dir` if necessary and will write one
//! `<stem>_sdf.png` per input raster. **Any existing outputs with the same
//! name will be overwritten in place.**
//!
//! ```text
//! $ build_sdf_fields /path/to/image_dir /path/to/out_dir --engine linear
//! ```

use std::{
    fs::{create_dir_all, read_dir},
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
    time::Instant,
};

use clap::{command, Arg};
use raster_field_tools::{
    field_to_image, luminance, threshold_image, RasterFieldError,
};
use sdf_field_renderer::{Engine, SdfConfig};
use spmc::{channel, Receiver};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

static TOTAL_FIELDS_RENDERED: AtomicUsize = AtomicUsize::new(0);

fn render_one(
    path: &PathBuf,
    out_path: &PathBuf,
    threshold: f64,
    band: f64,
    config: &SdfConfig,
) -> Result<(), RasterFieldError> {
    let image = image::open(path)?.to_rgb8();
    let mask = threshold_image(&image, threshold, luminance)?;
    let field = mask.render_sdf(config)?;
    field_to_image(&field, band).save(out_path)?;
    Ok(())
}

fn worker(
    out_dir: PathBuf,
    threshold: f64,
    band: f64,
    engine: Engine,
    rx: Receiver<Option<(PathBuf, PathBuf)>>,
) {
    // Files are the unit of parallelism, so each render runs serially.
    let config = SdfConfig {
        engine,
        parallel: false,
        thread_count: 1,
        ..SdfConfig::default()
    };

    while let Ok(Some((path, stem))) = rx.recv() {
        println!("Processing {}", path.display());
        let out_path = out_dir.join(format!("{}_sdf.png", stem.display()));

        match render_one(&path, &out_path, threshold, band, &config) {
            Ok(()) => {
                TOTAL_FIELDS_RENDERED.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                println!("ERROR: Failed to render {}: {}", path.display(), e);
            }
        }
    }
}

fn main() {
    let matches = command!()
        .arg(Arg::new("IMAGE_DIR")
            .help("Sets the source directory to be scanned for images")
            .required(true)
            .index(1))
        .arg(Arg::new("OUT_DIR")
            .help("Sets the output directory in which the rendered fields will be placed (one <stem>_sdf.png per input image)")
            .required(true)
            .index(2))
        .arg(Arg::new("engine")
            .long("engine")
            .help("Distance field engine to use")
            .value_parser(["brute", "brushfire", "linear"])
            .default_value("linear"))
        .arg(Arg::new("threshold")
            .long("threshold")
            .help("Luminance threshold separating interior from exterior, in [0, 1]")
            .value_parser(clap::value_parser!(f64))
            .default_value("0.5"))
        .arg(Arg::new("band")
            .long("band")
            .help("Half-width of the boundary band highlighted in the blue channel")
            .value_parser(clap::value_parser!(f64))
            .default_value("0.71"))
        .get_matches();

    let image_dir = PathBuf::from(matches.get_one::<String>("IMAGE_DIR").unwrap());
    let out_dir = PathBuf::from(matches.get_one::<String>("OUT_DIR").unwrap());
    let engine = match matches.get_one::<String>("engine").unwrap().as_str() {
        "brute" => Engine::Brute,
        "brushfire" => Engine::Brushfire,
        _ => Engine::Linear,
    };
    let threshold = *matches.get_one::<f64>("threshold").unwrap();
    let band = *matches.get_one::<f64>("band").unwrap();

    create_dir_all(&out_dir).expect("Unable to create output directory");

    let (mut tx, rx) = channel();
    let num_threads = num_cpus::get();
    println!("Starting {} worker threads...", num_threads);

    let join_handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let out_dir = out_dir.clone();
            let rx = rx.clone();
            thread::spawn(move || worker(out_dir, threshold, band, engine, rx))
        })
        .collect();

    let render_start = Instant::now();

    for entry in read_dir(&image_dir).expect("Unable to open image directory") {
        if let Ok(dir_entry) = entry {
            let path = dir_entry.path();

            if let (Some(stem), Some(extension)) = (path.file_stem(), path.extension()) {
                if path.is_file()
                    && IMAGE_EXTENSIONS.contains(&extension.to_str().unwrap_or_default())
                {
                    tx.send(Some((path.clone(), PathBuf::from(stem))))
                        .expect("Unable to push job to thread worker");
                }
            }
        }
    }

    for _ in 0..num_threads {
        // Sentinel value to signal the end of the work pool for each thread
        tx.send(None)
            .expect("Unable to push completion job to thread worker");
    }

    for handle in join_handles {
        handle.join().unwrap();
    }

    let total_fields_rendered = TOTAL_FIELDS_RENDERED.load(Ordering::Relaxed);
    let render_duration = render_start.elapsed();

    println!(
        "Done. Rendered {} field(s) in {:?}",
        total_fields_rendered, render_duration
    );
}
