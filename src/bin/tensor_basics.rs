use anyhow::Result;
use candle_core::{Device, Tensor};
use ndarray::array;
use toy_classifiers::diagnostics::{features_from_tensor, tensor_from_features};

fn main() -> Result<()> {
    env_logger::init();

    let device = Device::Cpu;

    // Tensor built straight from nested literals
    let data_tensor = Tensor::new(&[[2f32, 3.0], [6.0, 7.0]], &device)?;
    println!("candle tensor: {:?}", data_tensor);

    // The same values as an ndarray matrix
    let nd_data = array![[2.0f32, 3.0], [6.0, 7.0]];
    println!("ndarray matrix: {:?}", nd_data);

    // ndarray -> tensor -> ndarray round trip
    let nd_data_tensor = tensor_from_features(&nd_data, &device)?;
    println!("tensor from ndarray: {:?}", nd_data_tensor);

    let back = features_from_tensor(&nd_data_tensor)?;
    println!("ndarray from tensor: {:?}", back);

    Ok(())
}
