use crate::api::{deflate_to_vec, inflate_to_vec};
use crate::deflate::Deflater;
use crate::error::{ConfigError, Error};
use crate::inflate::Inflater;
use crate::options::TransformOptions;
use rayon::prelude::*;

pub struct BatchInflater {
    inflater: Inflater,
}

impl BatchInflater {
    pub fn new(options: TransformOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            inflater: Inflater::new(options)?,
        })
    }

    pub fn inflate_batch(&self, inputs: &[&[u8]]) -> Vec<Vec<u8>> {
        inputs
            .par_iter()
            .map(|&input| inflate_to_vec(&self.inflater, input))
            .collect()
    }

    /// Inflates `inputs[i]` into `outputs[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the two slices differ in length.
    pub fn inflate_batch_into(&self, inputs: &[&[u8]], outputs: &mut [&mut [u8]]) -> Vec<usize> {
        assert_eq!(
            inputs.len(),
            outputs.len(),
            "every input needs exactly one destination"
        );
        inputs
            .par_iter()
            .zip(outputs.par_iter_mut())
            .map(|(&input, output)| self.inflater.inflate(input, output))
            .collect()
    }
}

pub struct BatchDeflater {
    deflater: Deflater,
}

impl BatchDeflater {
    pub fn new(options: TransformOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            deflater: Deflater::new(options)?,
        })
    }

    pub fn deflate_batch(&self, inputs: &[&[u8]]) -> Vec<Result<Vec<u8>, Error>> {
        inputs
            .par_iter()
            .map(|&input| deflate_to_vec(&self.deflater, input))
            .collect()
    }
}
