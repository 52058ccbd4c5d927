//! Behaviour of forward and backward passes through the public API.

use rand::{rngs::StdRng, SeedableRng};
use trilayer_nn::network::{HIDDEN_LAYER, INPUT_LAYER, OUTPUT_LAYER};
use trilayer_nn::{ActivationFunction, Network, NetworkConfig};

const TOLERANCE: f64 = 1e-12;

fn floats_close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn fixed_network(activation: ActivationFunction, momentum: f64) -> Network {
    let cfg = NetworkConfig {
        activation,
        momentum,
        input_neurons: 2,
        hidden_neurons: 3,
        output_neurons: 1,
        ..NetworkConfig::default()
    };
    let mut net = Network::with_rng(&cfg, &mut StdRng::seed_from_u64(0));
    net.neurons[INPUT_LAYER][0].weights = vec![0.1, 0.4, -0.3];
    net.neurons[INPUT_LAYER][1].weights = vec![0.7, -0.2, 0.5];
    net.neurons[HIDDEN_LAYER][0].weights = vec![0.6];
    net.neurons[HIDDEN_LAYER][1].weights = vec![-0.8];
    net.neurons[HIDDEN_LAYER][2].weights = vec![0.9];
    net
}

/// Prediction computed by hand from the network's current weights.
fn manual_prediction(net: &Network, inputs: &[f64]) -> f64 {
    let f = |x: f64| net.activation.function(x);
    let hidden: Vec<f64> = (0..net.neurons[HIDDEN_LAYER].len())
        .map(|h| {
            let sum: f64 = inputs.iter().enumerate()
                .map(|(i, v)| v * net.neurons[INPUT_LAYER][i].weights[h])
                .sum();
            f(sum)
        })
        .collect();
    let out: f64 = hidden.iter().enumerate()
        .map(|(h, v)| v * net.neurons[HIDDEN_LAYER][h].weights[0])
        .sum();
    f(out)
}

#[test]
fn test_linear_chain_example() {
    let cfg = NetworkConfig {
        activation: ActivationFunction::Linear,
        input_neurons: 1,
        hidden_neurons: 1,
        output_neurons: 1,
        ..NetworkConfig::default()
    };
    let mut net = cfg.build_with_rng(&mut StdRng::seed_from_u64(5)).unwrap();
    net.neurons[INPUT_LAYER][0].weights = vec![0.5];
    net.neurons[HIDDEN_LAYER][0].weights = vec![1.0];
    net.neurons[INPUT_LAYER][0].value = 2.0;

    net.forward_propagation();

    assert_eq!(net.neurons[HIDDEN_LAYER][0].value, 1.0);
    assert_eq!(net.result, 1.0);
}

#[test]
fn test_forward_is_deterministic_for_fixed_weights() {
    let mut a = fixed_network(ActivationFunction::Sigmoid, 0.3);
    let mut b = a.clone();
    for net in [&mut a, &mut b] {
        net.set_inputs(&[0.25, -1.5]).unwrap();
        net.set_targets(&[0.8]).unwrap();
        net.forward_propagation();
    }
    assert_eq!(a.result.to_bits(), b.result.to_bits());
    for layer in 0..3 {
        for (x, y) in a.neurons[layer].iter().zip(&b.neurons[layer]) {
            assert_eq!(x.value.to_bits(), y.value.to_bits());
            assert_eq!(x.sum.to_bits(), y.sum.to_bits());
        }
    }

    // A second identical pass on the same instance reproduces the same values.
    let first = a.result;
    a.forward_propagation();
    assert_eq!(first.to_bits(), a.result.to_bits());
}

#[test]
fn test_target_prediction_swap() {
    let mut net = fixed_network(ActivationFunction::Sigmoid, 0.3);
    net.set_inputs(&[1.0, 0.0]).unwrap();
    net.neurons[OUTPUT_LAYER][0].value = 0.8;

    net.forward_propagation();

    assert_eq!(net.neurons[OUTPUT_LAYER][0].value, 0.8);
    let expected = manual_prediction(&net, &[1.0, 0.0]);
    assert!(floats_close(net.result, expected, TOLERANCE), "result {} vs {}", net.result, expected);
}

#[test]
fn test_sigmoid_outputs_are_bounded() {
    let mut net = fixed_network(ActivationFunction::Sigmoid, 0.3);
    // Every weighted sum stays well inside the range where f64 can tell sigmoid apart from 0 and 1.
    for inputs in [[3.0, -2.0], [0.0, 0.0], [-3.0, 7.5]] {
        net.set_inputs(&inputs).unwrap();
        net.forward_propagation();
        assert!(net.result > 0.0 && net.result < 1.0);
        assert!(net.neurons[HIDDEN_LAYER].iter().all(|n| n.value > 0.0 && n.value < 1.0));
    }
}

#[test]
fn test_sigmoid_saturates_on_huge_inputs() {
    let mut net = fixed_network(ActivationFunction::Sigmoid, 0.3);
    net.set_inputs(&[100.0, -100.0]).unwrap();
    net.set_targets(&[0.5]).unwrap();
    net.forward_propagation();

    // hidden neuron 1 sums to 0.4 * 100 + (-0.2) * (-100) = 60 and rounds to exactly 1
    assert_eq!(net.neurons[HIDDEN_LAYER][1].value, 1.0);
    assert!(net.neurons[HIDDEN_LAYER].iter().all(|n| (0.0..=1.0).contains(&n.value)));
    assert!((0.0..=1.0).contains(&net.result));

    net.backward_propagation();
    assert!(net.neurons.iter().flatten().flat_map(|n| &n.weights).all(|w| w.is_finite()));
}

#[test]
fn test_zero_momentum_ignores_previous_deltas() {
    let mut clean = fixed_network(ActivationFunction::Sigmoid, 0.0);
    let mut stale = clean.clone();
    for layer in [INPUT_LAYER, HIDDEN_LAYER] {
        for neuron in stale.neurons[layer].iter_mut() {
            neuron.weights_delta.iter_mut().for_each(|d| *d = 123.0);
        }
    }

    for net in [&mut clean, &mut stale] {
        net.set_inputs(&[0.5, 1.0]).unwrap();
        net.set_targets(&[1.0]).unwrap();
        net.forward_propagation();
        net.backward_propagation();
    }

    for layer in [INPUT_LAYER, HIDDEN_LAYER] {
        for (a, b) in clean.neurons[layer].iter().zip(&stale.neurons[layer]) {
            assert_eq!(a.weights, b.weights);
            assert_eq!(a.weights_delta, b.weights_delta);
        }
    }
}

#[test]
fn test_zero_momentum_matches_closed_form_update() {
    let mut net = fixed_network(ActivationFunction::Sigmoid, 0.0);
    net.set_inputs(&[0.5, 1.0]).unwrap();
    net.set_targets(&[1.0]).unwrap();
    net.forward_propagation();

    let act = net.activation;
    let output = &net.neurons[OUTPUT_LAYER][0];
    let weight_factor = act.derivative(output.sum) * (output.value - net.result);
    let hidden = net.neurons[HIDDEN_LAYER].clone();
    let inputs_before = net.neurons[INPUT_LAYER].clone();

    net.backward_propagation();

    for (row, before) in inputs_before.iter().enumerate() {
        for (h, hidden_neuron) in hidden.iter().enumerate() {
            let step = weight_factor * hidden_neuron.weights[0] * act.derivative(hidden_neuron.sum);
            let after = net.neurons[INPUT_LAYER][row].weights[h];
            assert!(floats_close(after, before.weights[h] + step, TOLERANCE));
            assert!(floats_close(net.neurons[INPUT_LAYER][row].weights_delta[h], step, TOLERANCE));
        }
    }
    for (h, before) in hidden.iter().enumerate() {
        let step = weight_factor * before.value;
        assert!(floats_close(net.neurons[HIDDEN_LAYER][h].weights[0], before.weights[0] + step, TOLERANCE));
    }
}

#[test]
fn test_backward_moves_prediction_towards_target() {
    let mut net = fixed_network(ActivationFunction::Sigmoid, 0.0);
    net.set_inputs(&[1.0, 1.0]).unwrap();
    net.set_targets(&[0.0]).unwrap();
    net.forward_propagation();
    let before = net.result;
    net.backward_propagation();
    net.forward_propagation();
    assert!(net.result < before);
}
