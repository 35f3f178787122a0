//! Property-based tests for operator composition.

use proptest::prelude::*;
use quop_core::matrix::{approx_eq, identity};
use quop_core::{Simulator, Squaring, StandardGate};

fn self_inverse_gate() -> impl Strategy<Value = StandardGate> {
    prop_oneof![
        Just(StandardGate::X),
        Just(StandardGate::Y),
        Just(StandardGate::Z),
        Just(StandardGate::H),
        Just(StandardGate::Swap),
        Just(StandardGate::CX),
        Just(StandardGate::CCX),
    ]
}

/// A register width together with a gate and a block position that fits.
fn placed_gate() -> impl Strategy<Value = (usize, StandardGate, usize)> {
    (self_inverse_gate(), 0_usize..=3).prop_flat_map(|(gate, extra)| {
        let span = gate.num_qubits();
        let n = span + extra;
        (Just(n), Just(gate), 0..=(n - span))
    })
}

/// A control set and a distinct target inside an `n`-wire register.
fn multi_control_case() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    (2_usize..=5).prop_flat_map(|n| {
        (0..n).prop_flat_map(move |target| {
            let others: Vec<usize> = (0..n).filter(|&w| w != target).collect();
            (
                Just(n),
                Just(target),
                prop::sample::subsequence(others, 0..n),
            )
        })
    })
}

proptest! {
    /// Any self-inverse gate applied twice at the same wire restores the identity.
    #[test]
    fn test_self_inverse_twice_is_identity((n, gate, wire) in placed_gate()) {
        let mut sim = Simulator::new(n).unwrap();
        sim.apply_gate(gate, wire).unwrap();
        sim.apply_gate(gate, wire).unwrap();
        prop_assert!(approx_eq(sim.operator(), &identity(1 << n), 1e-10));
    }

    /// A multi-controlled flip is a logic circuit flipping exactly the target bit
    /// when all controls are set.
    #[test]
    fn test_multi_control_truth_table((n, target, controls) in multi_control_case()) {
        let mut sim = Simulator::new(n).unwrap();
        sim.multi_control(target, &controls).unwrap();
        prop_assert!(sim.is_logic());

        let mask: usize = controls.iter().map(|&c| 1_usize << c).sum();
        let table = sim.truth_table().unwrap();
        for (input, output) in table.iter() {
            let expected = if input & mask == mask { input ^ (1 << target) } else { input };
            prop_assert_eq!(output, expected);
        }
    }

    /// Real-valued rotations keep both squaring conventions inside [0, 1] and equal.
    #[test]
    fn test_real_rotations_probability_in_range(
        angles in prop::collection::vec(-6.3_f64..6.3, 1..6),
        input in 0_usize..8,
    ) {
        let mut sim = Simulator::new(3).unwrap();
        for (i, angle) in angles.iter().enumerate() {
            sim.ry(i % 3, *angle).unwrap();
            if i % 2 == 1 {
                sim.cnot(i % 2).unwrap();
            }
        }
        sim.set_input(input).unwrap();
        for wire in 0..3 {
            let p = sim.probability_one(wire).unwrap();
            let raw = sim.probability_one_with(wire, Squaring::Amplitude).unwrap();
            prop_assert!((-1e-4..=1.0 + 1e-4).contains(&p));
            prop_assert!((p - raw.re).abs() < 1e-4);
        }
    }
}

#[test]
fn test_amplitude_squaring_leaves_unit_interval_for_complex_phases() {
    // Y|0⟩ = i|1⟩, so the raw square is -1 while the magnitude is 1.
    let mut sim = Simulator::new(1).unwrap();
    sim.pauli_y(0).unwrap();
    assert!((sim.probability_one(0).unwrap() - 1.0).abs() < 1e-9);
    let raw = sim.probability_one_with(0, Squaring::Amplitude).unwrap();
    assert!((raw.re + 1.0).abs() < 1e-9);
}
