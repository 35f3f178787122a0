//! Loading netlists from disk and embedding them as modules.

use std::io::Write;

use quop_core::matrix::approx_eq;
use quop_core::{SimError, Simulator};
use quop_tfc::{LoadModule, TfcError, load, load_file};
use tempfile::NamedTempFile;

const FULL_ADDER: &str = "\
# 1-bit full adder: a, b, cin -> a, b, sum, cout
.v a,b,cin,cout
.i a,b,cin
.o sum,cout
.c 0
BEGIN
t3 a,b,cout
t2 a,b
t3 b,cin,cout
t2 b,cin
END
";

fn write_netlist(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_adder_truth_table() {
    let file = write_netlist(FULL_ADDER);
    let sim = load_file(file.path()).unwrap();
    assert_eq!(sim.num_qubits(), 4);
    assert!(sim.is_logic());

    let table = sim.truth_table().unwrap();
    for input in 0..8_usize {
        let (a, b, cin) = (input & 1, (input >> 1) & 1, (input >> 2) & 1);
        let output = table.output(input).unwrap();
        let sum = (output >> 2) & 1;
        let cout = (output >> 3) & 1;
        assert_eq!(sum + 2 * cout, a + b + cin, "input {input:03b}");
        assert_eq!(output & 1, a);
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.tfc");
    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, TfcError::FileAccess { .. }));
    assert!(!err.is_malformed());
    assert!(err.to_string().contains("absent.tfc"));
}

#[test]
fn test_module_matches_direct_replay() {
    let module = write_netlist(".v x,y\nt2 x,y\nt1 x\n");

    let mut embedded = Simulator::new(4).unwrap();
    embedded.hadamard(0).unwrap();
    embedded.load_module(module.path(), 2).unwrap();

    let mut direct = Simulator::new(4).unwrap();
    direct.hadamard(0).unwrap();
    direct.multi_control(3, &[2]).unwrap().pauli_x(2).unwrap();

    assert!(approx_eq(embedded.operator(), direct.operator(), 1e-12));
}

#[test]
fn test_module_overhanging_register() {
    let module = write_netlist(".v x,y,z\nt1 z\n");
    let mut sim = Simulator::new(4).unwrap();
    let before = sim.operator().clone();

    let err = sim.load_module(module.path(), 2).unwrap_err();
    assert!(matches!(
        err,
        TfcError::Circuit(SimError::IncompatibleOperator { .. })
    ));
    assert_eq!(sim.operator(), &before);

    let err = sim.load_module(module.path(), 4).unwrap_err();
    assert!(matches!(
        err,
        TfcError::Circuit(SimError::InvalidWire { wire: 4, .. })
    ));
}

#[test]
fn test_malformed_netlists() {
    let cases = [
        ("t1 a\n", "no declaration"),
        (".v a\n.v b\n", "second declaration"),
        (".v a\nt2 a\n", "operand count"),
        (".v a,b,c\nf3 a,b,c\n", "fredkin"),
        (".v a\nt1 b\n", "undeclared"),
        (".v a\nt1 a;\n", "undeclared punctuated name"),
    ];
    for (source, label) in cases {
        let err = load(source).unwrap_err();
        assert!(err.is_malformed(), "{label}: {err}");
    }
}

#[test]
fn test_ignored_directive_payloads_load() {
    let sources = [
        ".v a,b\n.c 0,-\nt1 a\n",
        ".version 1.0\n.v a,b\nt1 a\n",
        ".v a-1,b\nt1 a-1\n",
    ];
    for source in sources {
        let sim = load(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
        let table = sim.truth_table().unwrap();
        assert_eq!(table.outputs(), &[1, 0, 3, 2], "{source:?}");
    }
}
