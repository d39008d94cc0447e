//! Prints the skewness and excess kurtosis of a fixed sample set.
//!
//! Set `RUST_LOG=debug` to see the log output.

use log::info;
use u_moments::{kurtosis, skewness};

const SAMPLES: [f64; 15] = [
    60.0, 80.0, 130.0, 110.0, 70.0, 2020.0, 20.0, 77.0, 98.0, 330.0, 220.0, 177.0, 323.0, 200.0,
    100.0,
];

fn main() {
    env_logger::init();

    info!("computing moments of {} samples", SAMPLES.len());
    let summary = u_moments::describe(&SAMPLES);
    info!(
        "mean={} std_dev={} skewed={} heavy_tailed={}",
        summary.mean,
        summary.std_dev,
        summary.is_skewed(),
        summary.is_heavy_tailed()
    );

    // 3.2733488310507317 9.189926557641753
    println!("{} {}", skewness(&SAMPLES), kurtosis(&SAMPLES));
}
