use anyhow::Result;
use candle_core::utils::{cuda_is_available, metal_is_available};
use toy_classifiers::diagnostics::probe_accelerator;

fn main() -> Result<()> {
    env_logger::init();

    println!("CUDA available: {}", cuda_is_available());
    println!("Metal available: {}", metal_is_available());

    match probe_accelerator()? {
        Some(ones) => println!("Allocated on accelerator: {:?}", ones),
        None => println!("No accelerator device found."),
    }

    Ok(())
}
