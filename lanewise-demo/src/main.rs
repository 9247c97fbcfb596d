//! Adds two sample vectors once on the SIMD kernel and prints the sum.
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see backend selection.

use std::process::ExitCode;

use lanewise_core::compute;
use lanewise_ops::{add_vectors, Result};

const SAMPLE_A: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const SAMPLE_B: [f32; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];

fn run() -> Result<Vec<f32>> {
    add_vectors(&SAMPLE_A, &SAMPLE_B)
}

fn main() -> ExitCode {
    env_logger::init();
    compute::log_caps();

    match run() {
        Ok(sum) => {
            println!("{:?} + {:?} = {:?}", SAMPLE_A, SAMPLE_B, sum);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("vector add failed: {e}");
            ExitCode::FAILURE
        }
    }
}
