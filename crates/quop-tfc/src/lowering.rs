//! Replay a parsed netlist onto a simulator.

use quop_core::Simulator;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::ast::{GateLine, Netlist};
use crate::error::{TfcError, TfcResult};

/// Build a fresh simulator and apply every gate of `netlist` in order.
pub fn lower(netlist: &Netlist) -> TfcResult<Simulator> {
    let wires: FxHashMap<&str, usize> = netlist
        .wires
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), index))
        .collect();

    let mut sim = Simulator::new(netlist.num_wires())?;
    for gate in &netlist.gates {
        apply_gate_line(&mut sim, &wires, gate)?;
    }

    info!(
        wires = netlist.num_wires(),
        gates = netlist.gates.len(),
        "Loaded netlist"
    );
    Ok(sim)
}

fn apply_gate_line(
    sim: &mut Simulator,
    wires: &FxHashMap<&str, usize>,
    gate: &GateLine,
) -> TfcResult<()> {
    let resolve = |name: &str| {
        wires
            .get(name)
            .copied()
            .ok_or_else(|| TfcError::UndeclaredWire {
                line: gate.line,
                name: name.to_string(),
            })
    };

    let target = resolve(gate.target())?;
    let controls = gate
        .controls()
        .iter()
        .map(|name| resolve(name))
        .collect::<TfcResult<Vec<_>>>()?;

    debug!(line = gate.line, target_wire = target, ?controls, "Replaying gate");
    if controls.is_empty() {
        sim.pauli_x(target)?;
    } else {
        sim.multi_control(target, &controls)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use quop_core::SimError;

    #[test]
    fn test_not_gate() {
        let sim = lower(&parse(".v a\nt1 a\n").unwrap()).unwrap();
        let table = sim.truth_table().unwrap();
        assert_eq!(table.outputs(), &[1, 0]);
    }

    #[test]
    fn test_first_declared_wire_is_wire_zero() {
        // CNOT with control b (wire 1) and target a (wire 0).
        let sim = lower(&parse(".v a,b\nt2 b,a\n").unwrap()).unwrap();
        let table = sim.truth_table().unwrap();
        assert_eq!(table.outputs(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_undeclared_wire() {
        let err = lower(&parse(".v a,b\nt2 a,z\n").unwrap()).unwrap_err();
        assert!(matches!(err, TfcError::UndeclaredWire { line: 2, ref name } if name == "z"));
    }

    #[test]
    fn test_target_reused_as_control() {
        let err = lower(&parse(".v a,b\nt2 a,a\n").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            TfcError::Circuit(SimError::ControlOnTarget { wire: 0 })
        ));
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_empty_declaration_is_rejected_by_engine() {
        let err = lower(&parse(".v\n").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            TfcError::Circuit(SimError::InvalidQubitCount { got: 0, .. })
        ));
    }
}
