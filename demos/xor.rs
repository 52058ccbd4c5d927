use trilayer_nn::{ActivationFunction, Network, train_network};

fn main() {
    env_logger::init();

    let mut network = Network::new(800.0, 800.0, ActivationFunction::Sigmoid, 0.3, 2, 1, 3);

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let epochs = 5000;

    for epoch in 0..epochs {
        let loss = train_network(&mut network, &inputs, &expected_outputs)
            .expect("examples match the network shape");
        if epoch % 500 == 0 {
            println!("Epoch {epoch}: mse = {loss:.6}");
        }
    }

    for input in &inputs {
        network.set_inputs(input).expect("two inputs");
        network.forward_propagation();
        println!("Input: {:?} -> Output: {:.4}", input, network.prediction());
    }
}
