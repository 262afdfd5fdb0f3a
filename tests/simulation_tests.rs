// tests/simulation_tests.rs

// Import necessary types from the qnode crate
use qnode::{
    CircuitBuilder, Gate, Outcome, QnodeError, QubitState, Simulator, apply_gate, apply_gate_by_name,
    bloch_coordinates, make, measure, probability_of_one,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const TEST_TOLERANCE: f64 = 1e-9;

fn hadamard_zero() -> QubitState {
    apply_gate(&QubitState::ZERO, Gate::Hadamard)
}

#[test]
fn test_hadamard_superposition_is_normalized() {
    let plus = hadamard_zero();
    assert!((probability_of_one(&plus) - 0.5).abs() < 1e-6);
    assert!((plus.norm_sqr() - 1.0).abs() < TEST_TOLERANCE);
}

#[test]
fn test_pauli_x_and_y_on_zero() {
    let x = apply_gate(&QubitState::ZERO, Gate::PauliX);
    assert!(x.alpha().re.abs() < TEST_TOLERANCE);
    assert!((x.beta().re - 1.0).abs() < TEST_TOLERANCE);

    let y = apply_gate(&QubitState::ZERO, Gate::PauliY);
    assert!(y.alpha().re.abs() < TEST_TOLERANCE);
    assert!((y.beta().im - 1.0).abs() < TEST_TOLERANCE);
}

#[test]
fn test_x_and_z_are_self_inverse_on_arbitrary_states() {
    let states = [
        QubitState::ZERO,
        QubitState::ONE,
        hadamard_zero(),
        QubitState::new(make(0.6, 0.0), make(0.0, 0.8)),
        QubitState::new(make(0.5, 0.5), make(-0.5, 0.5)),
    ];
    for state in states {
        for gate in [Gate::PauliX, Gate::PauliZ] {
            let twice = apply_gate(&apply_gate(&state, gate), gate);
            assert!(twice.approx_eq(&state, TEST_TOLERANCE), "{gate}{gate} changed {state}");
        }
    }
}

#[test]
fn test_measure_canonical_states_is_deterministic() -> Result<(), QnodeError> {
    let mut simulator = Simulator::new();
    for _ in 0..100 {
        let zero = simulator.measure(&QubitState::ZERO)?;
        assert_eq!(zero.outcome, Outcome::Zero);
        assert_eq!(zero.state, QubitState::ZERO);

        let one = simulator.measure(&QubitState::ONE)?;
        assert_eq!(one.outcome, Outcome::One);
        assert_eq!(one.state, QubitState::ONE);
    }
    Ok(())
}

#[test]
fn test_superposition_frequency_is_fair() -> Result<(), QnodeError> {
    let mut simulator = Simulator::seeded(0x5eed);
    let counts = simulator.sample(&hadamard_zero(), 1000)?;
    assert_eq!(counts.shots(), 1000);
    let freq = counts.frequency_of_one();
    assert!((0.4..=0.6).contains(&freq), "frequency of one was {}", freq);
    Ok(())
}

#[test]
fn test_superposition_frequency_with_injected_rng() {
    let plus = hadamard_zero();
    let mut rng = StdRng::seed_from_u64(17);
    let ones = (0..1000).filter(|_| measure(&plus, &mut rng).outcome == Outcome::One).count();
    assert!((400..=600).contains(&ones), "ones = {}", ones);
}

#[test]
fn test_measurement_collapses_to_canonical_state() -> Result<(), QnodeError> {
    let mut simulator = Simulator::seeded(11);
    for _ in 0..50 {
        let m = simulator.measure(&hadamard_zero())?;
        assert_eq!(m.state, m.outcome.collapsed_state());
        // Measuring the collapsed state again repeats the outcome.
        assert_eq!(simulator.measure(&m.state)?.outcome, m.outcome);
    }
    Ok(())
}

#[test]
fn test_bloch_poles_and_equator() {
    let zero = bloch_coordinates(&QubitState::ZERO);
    assert!((zero.z - 1.0).abs() < TEST_TOLERANCE && zero.x.abs() < TEST_TOLERANCE && zero.y.abs() < TEST_TOLERANCE);

    let one = bloch_coordinates(&QubitState::ONE);
    assert!((one.z + 1.0).abs() < TEST_TOLERANCE && one.x.abs() < TEST_TOLERANCE && one.y.abs() < TEST_TOLERANCE);

    let plus = bloch_coordinates(&hadamard_zero());
    assert!(plus.z.abs() < TEST_TOLERANCE);
    assert!((plus.x * plus.x + plus.y * plus.y - 1.0).abs() < TEST_TOLERANCE);
}

#[test]
fn test_hadamard_then_z_scenario() -> Result<(), QnodeError> {
    let circuit = CircuitBuilder::new().add_gate(Gate::Hadamard).build();
    let simulator = Simulator::seeded(1);
    let plus = simulator.run(&circuit, &QubitState::ZERO)?;
    let minus = apply_gate(&plus, Gate::PauliZ);

    // Phase gates do not change measurement probability.
    assert!((simulator.probability_of_one(&plus)? - 0.5).abs() < 1e-6);
    assert!((simulator.probability_of_one(&minus)? - 0.5).abs() < 1e-6);

    let before = simulator.bloch(&plus)?;
    let after = simulator.bloch(&minus)?;
    assert!(before.z.abs() < TEST_TOLERANCE && after.z.abs() < TEST_TOLERANCE);
    // Z rotates the point by π about the z axis.
    assert!((before.x + after.x).abs() < TEST_TOLERANCE);
    assert!((before.y + after.y).abs() < TEST_TOLERANCE);
    assert!(before.x > 0.5 && after.x < -0.5);
    Ok(())
}

#[test]
fn test_undefined_gate_name() {
    let result = apply_gate_by_name(&QubitState::ZERO, "ThisGateDoesNotExist");
    match result {
        Err(QnodeError::InvalidArgument { message }) => {
            assert!(message.contains("Gate 'ThisGateDoesNotExist' is not in the catalogue"), "Incorrect error message: {}", message);
        }
        other => panic!("Expected InvalidArgument error, got {:?}", other),
    }
}

#[test]
fn test_gate_names_round_trip_through_json() -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(&Gate::ALL)?;
    assert_eq!(json, r#"["H","X","Y","Z","S","T"]"#);
    let gates: Vec<Gate> = serde_json::from_str(&json)?;
    assert_eq!(gates, Gate::ALL.to_vec());
    assert!(serde_json::from_str::<Gate>(r#""CNOT""#).is_err());
    Ok(())
}
