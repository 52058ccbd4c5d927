use crate::{
    error::Result,
    loss::mse::MseLoss,
    network::network::Network,
};

/// Runs one online pass over paired examples and returns the mean squared
/// error between each prediction and the example's first target.
///
/// Each example is staged, propagated forward and then backward before the
/// next one is touched.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
) -> Result<f64> {
    let mut loss = MseLoss::new();

    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        let prediction = network.evaluate(input, expected)?;
        loss.add(prediction, expected[0]);
    }

    Ok(loss.mean())
}
