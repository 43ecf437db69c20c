// Fits a single dense layer to y = 3x0 - 2x1 + 0.5 with plain gradient descent.
// Run with `RUST_LOG=debug` to see the engine's pass summaries.

use neurograd_core::{Dense, Init, Module, NeuroGradError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeuroGradError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(0);
    let layer = Dense::with_init(2, 1, Init::Uniform { bound: 0.5 }, &mut rng)?;

    let samples: Vec<([f64; 2], f64)> = (0..8)
        .map(|i| {
            let x0 = i as f64 / 4.0 - 1.0;
            let x1 = (i % 3) as f64 - 1.0;
            ([x0, x1], 3.0 * x0 - 2.0 * x1 + 0.5)
        })
        .collect();

    let learning_rate = 0.02;
    for epoch in 0..300 {
        layer.zero_grad();
        let mut loss = Value::constant(0.0);
        for (inputs, target) in &samples {
            let pred = layer.forward(inputs)?.remove(0);
            loss = loss + (pred - *target).pow(2.0);
        }
        loss.backward()?;
        for param in layer.parameters() {
            param.set_value(param.value() - learning_rate * param.grad())?;
        }
        if epoch % 50 == 0 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.value());
        }
    }

    for (name, param) in layer.named_parameters() {
        println!("{} = {:.4}", name, param.value());
    }
    Ok(())
}
