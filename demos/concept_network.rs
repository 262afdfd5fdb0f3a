//! Builds a small concept network, evolves each node with a few gates,
//! measures one of them and prints the snapshot the narrative layer receives.
//!
//! Run with `RUST_LOG=qnode=debug` to see the engine's tracing output.

use qnode::{Circuit, Gate, Network, QnodeError, Simulator, format_complex};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QnodeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("--- qnode Example: Concept Network ---");

    let mut simulator = Simulator::seeded(42);
    let mut network = Network::new();

    let love = network.add_node("love");
    let doubt = network.add_node("doubt");
    let purpose = network.add_node("purpose");

    // Love: equal superposition, then a quarter-turn of phase.
    let circuit = Circuit::parse("H S")?;
    println!("\nCircuit for 'love':\n{}", circuit);
    network.apply_circuit(love, &circuit)?;

    // Doubt: flipped outright.
    network.apply_gate(doubt, Gate::PauliX)?;

    // Purpose: superposition with a T phase, then measured.
    network.apply_gate(purpose, Gate::Hadamard)?;
    network.apply_gate(purpose, Gate::PiOver4Phase)?;
    let measurement = network.measure_node(purpose, &mut simulator)?;
    println!("\n'purpose' {}", measurement);

    network.link(love, doubt, 0.35)?;
    network.link(love, purpose, 0.9)?;

    for node in network.nodes() {
        let state = node.state();
        println!(
            "{} '{}': alpha={} beta={}",
            node.id(),
            node.concept(),
            format_complex(state.alpha()),
            format_complex(state.beta())
        );
    }

    println!("\n{}", network.snapshot());

    // A fair coin from the engine's point of view.
    let plus = qnode::apply_gate(&qnode::QubitState::ZERO, Gate::Hadamard);
    println!("{}", simulator.sample(&plus, 1000)?);

    Ok(())
}
