//! Unit tests for the operation catalog.

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_global_catalog_has_everything() {
    let catalog = Catalog::global();
    assert_eq!(catalog.families(), Families::all());
    assert_eq!(catalog.opcodes().count(), Opcode::COUNT);
    assert!(core::ptr::eq(catalog, Catalog::global()));
}

#[test]
fn test_lookup_primary_and_alias() {
    let catalog = Catalog::global();
    assert_eq!(catalog.lookup("add"), Some(Opcode::Add));
    assert_eq!(catalog.lookup("+"), Some(Opcode::Add));
    assert_eq!(catalog.lookup("root2"), Some(Opcode::Sqrt));
    assert_eq!(catalog.lookup("pop"), Some(Opcode::Drop));
    assert_eq!(catalog.lookup("^"), Some(Opcode::Pow));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let catalog = Catalog::global();
    assert_eq!(catalog.lookup("ADD"), None);
    assert_eq!(catalog.lookup("Sin"), None);
}

#[test]
fn test_unknown_mnemonic() {
    let catalog = Catalog::global();
    assert_eq!(catalog.lookup("foo"), None);
    assert_eq!(catalog.lookup(""), None);
    // Push is produced by literals only.
    assert_eq!(catalog.lookup("push"), None);
}

#[test]
fn test_stack_family_is_always_registered() {
    let catalog = Catalog::new(Families::empty());
    assert_eq!(catalog.families(), Families::STACK);
    assert_eq!(
        catalog.opcodes().collect::<Vec<_>>(),
        vec![Opcode::Push, Opcode::Dup, Opcode::Drop, Opcode::Swap]
    );
    assert_eq!(catalog.lookup("swap"), Some(Opcode::Swap));
    assert_eq!(catalog.lookup("add"), None);
}

#[test]
fn test_disabled_family_is_invisible() {
    let catalog = Catalog::new(Families::BASIC | Families::LOGARITHM);

    assert_eq!(catalog.lookup("mul"), Some(Opcode::Mul));
    assert_eq!(catalog.lookup("log10"), Some(Opcode::Log10));
    assert_eq!(catalog.lookup("sin"), None);
    assert_eq!(catalog.lookup("sqrt"), None);

    assert_eq!(catalog.arity(Opcode::Mul), Some(Arity::new(2, 1)));
    assert_eq!(catalog.arity(Opcode::Sin), None);
    assert!(!catalog.contains(Opcode::Exp));
}

#[test]
fn test_arity_matches_opcode_table() {
    let catalog = Catalog::global();
    for op in Opcode::ALL {
        assert_eq!(catalog.arity(op), Some(op.arity()), "{:?}", op);
    }
}

#[test]
fn test_mnemonics_are_sorted_and_resolve() {
    let catalog = Catalog::new(Families::TRIGONOMETRIC);
    let names: Vec<_> = catalog.mnemonics().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["cos", "drop", "dup", "pop", "sin", "swap", "tan"]);

    for (name, op) in catalog.mnemonics() {
        assert_eq!(catalog.lookup(name), Some(op));
    }
}

#[test]
fn test_catalog_is_shareable_across_threads() {
    let catalog = Catalog::global();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || catalog.lookup("tanh")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(Opcode::Tanh));
    }
}
