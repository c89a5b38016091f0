//! Accelerator probing and ndarray/tensor conversion helpers.
//!
//! These are setup diagnostics for the demo binaries: pick the best
//! available candle device, allocate a trivial tensor on an accelerator if
//! one exists, and move feature matrices between ndarray and candle.
use anyhow::Result;
use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::{DType, Device, Tensor};
use ndarray::Array2;

/// Returns the best available device based on the specified flags.
///
/// # Arguments
///
/// * `cpu` - A flag indicating whether to force the CPU device
///
/// # Returns
///
/// A `Result` containing the candle `Device`
pub fn device(cpu: bool) -> Result<Device> {
    if cpu {
        Ok(Device::Cpu)
    } else if cuda_is_available() {
        Ok(Device::new_cuda(0)?)
    } else if metal_is_available() {
        Ok(Device::new_metal(0)?)
    } else {
        log::info!("No accelerator device found, falling back to CPU");
        Ok(Device::Cpu)
    }
}

/// Probe for an accelerator and, if one exists, allocate a ones tensor on it.
///
/// Returns `None` when only the CPU is available. The returned tensor has
/// shape `(1,)` and dtype f32, enough to prove the device can allocate.
pub fn probe_accelerator() -> Result<Option<Tensor>> {
    let device = device(false)?;
    if device.is_cuda() || device.is_metal() {
        let ones = Tensor::ones(1, DType::F32, &device)?;
        Ok(Some(ones))
    } else {
        Ok(None)
    }
}

/// Copy a feature matrix into a 2D candle tensor on the given device.
pub fn tensor_from_features(x: &Array2<f32>, device: &Device) -> Result<Tensor> {
    let (rows, cols) = x.dim();
    let data: Vec<f32> = x.iter().copied().collect();
    Ok(Tensor::from_vec(data, (rows, cols), device)?)
}

/// Copy a 2D candle tensor back into an ndarray feature matrix.
pub fn features_from_tensor(tensor: &Tensor) -> Result<Array2<f32>> {
    let (rows, cols) = tensor.dims2()?;
    let data: Vec<f32> = tensor.to_vec2::<f32>()?.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_device_cpu() {
        let device = device(true).unwrap();
        println!("Device: {:?}", device);
        assert!(matches!(device, Device::Cpu));
    }

    #[test]
    fn test_tensor_round_trip() {
        let x = array![[2.0f32, 3.0], [6.0, 7.0]];
        let tensor = tensor_from_features(&x, &Device::Cpu).unwrap();
        assert_eq!(tensor.dims2().unwrap(), (2, 2));

        let back = features_from_tensor(&tensor).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_probe_accelerator_cpu_fallback() {
        // On machines without CUDA/Metal this is the None branch; with an
        // accelerator present the tensor must live on it.
        match probe_accelerator().unwrap() {
            Some(tensor) => assert!(!matches!(tensor.device(), Device::Cpu)),
            None => {
                assert!(!cuda_is_available());
                assert!(!metal_is_available());
            }
        }
    }
}
