//! The operation catalog: which opcodes exist in a deployment, how they are
//! spelled and what they do to the stack.

use hashbrown::HashMap;
use lazy_static::lazy_static;

use super::{Arity, Families, Opcode};

lazy_static! {
    /// Process-wide catalog with every family registered.
    static ref GLOBAL: Catalog = Catalog::new(Families::all());
}

/// Registry of the opcodes enabled for a deployment.
///
/// Built once from a [`Families`] selection and read-only afterwards, so a
/// single catalog can be shared by reference across threads. An opcode whose
/// family was not selected is unknown to every lookup: the compiler treats its
/// mnemonic like any other unrecognized token.
#[derive(Debug, Clone)]
pub struct Catalog {
    families: Families,
    enabled: [bool; Opcode::COUNT],
    by_mnemonic: HashMap<&'static str, Opcode>,
}

impl Catalog {
    /// Build a catalog registering the given families. `STACK` is always added.
    pub fn new(families: Families) -> Self {
        let families = families | Families::STACK;
        let mut enabled = [false; Opcode::COUNT];
        let mut by_mnemonic = HashMap::new();

        for op in Opcode::ALL {
            if !families.contains(op.family()) {
                continue;
            }
            enabled[op.index()] = true;
            for mnemonic in op.mnemonics() {
                let previous = by_mnemonic.insert(*mnemonic, op);
                debug_assert!(previous.is_none(), "duplicate mnemonic {:?}", mnemonic);
            }
        }

        tracing::debug!(
            families = ?families,
            opcodes = enabled.iter().filter(|e| **e).count(),
            "Built operation catalog"
        );

        Self {
            families,
            enabled,
            by_mnemonic,
        }
    }

    /// The shared catalog with every family registered.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Families registered in this catalog (always includes `STACK`).
    pub fn families(&self) -> Families {
        self.families
    }

    /// Resolve a mnemonic to its opcode. Case-sensitive.
    pub fn lookup(&self, mnemonic: &str) -> Option<Opcode> {
        self.by_mnemonic.get(mnemonic).copied()
    }

    /// Stack effect of `op`, or `None` if its family isn't registered.
    #[inline]
    pub fn arity(&self, op: Opcode) -> Option<Arity> {
        self.contains(op).then(|| op.arity())
    }

    #[inline]
    pub fn contains(&self, op: Opcode) -> bool {
        self.enabled[op.index()]
    }

    /// Enabled opcodes, in discriminant order.
    pub fn opcodes(&self) -> impl Iterator<Item = Opcode> + '_ {
        Opcode::ALL.into_iter().filter(|op| self.contains(*op))
    }

    /// Every accepted mnemonic with the opcode it resolves to, sorted by name.
    pub fn mnemonics(&self) -> impl Iterator<Item = (&'static str, Opcode)> {
        let mut entries: Vec<_> = self.by_mnemonic.iter().map(|(m, op)| (*m, *op)).collect();
        entries.sort_unstable_by_key(|(m, _)| *m);
        entries.into_iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Families::all())
    }
}
