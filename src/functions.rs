//! Function table: the fixed registry of CGP node functions.
//!
//! The order of [`FUNCTIONS`] defines the function-id space and must match
//! the chromosome producer exactly.

use thiserror::Error;

// ── Types ────────────────────────────────────────────────────────────────────

/// Numeric function identifier as it appears in a node record.
pub type FunctionId = u32;

/// One entry of the function table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    pub id: FunctionId,
    /// Producer-side name (e.g. `"b_and"`).
    pub name: &'static str,
    /// Number of node inputs consumed: 0, 1 or 2.
    pub arity: u8,
    /// Label shown inside the node body.
    pub symbol: &'static str,
}

/// Lookup of a function id outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown function id {id} (table has {count} functions)", count = FUNCTIONS.len())]
pub struct UnknownFunction {
    pub id: FunctionId,
}

// ── Table ────────────────────────────────────────────────────────────────────

const fn f(id: FunctionId, name: &'static str, arity: u8, symbol: &'static str) -> FunctionSpec {
    FunctionSpec {
        id,
        name,
        arity,
        symbol,
    }
}

pub static FUNCTIONS: [FunctionSpec; 16] = [
    f(0, "c255", 0, "255"),
    f(1, "identity", 1, "→A"),
    f(2, "inversion", 1, "INV"),
    f(3, "b_or", 2, "OR"),
    f(4, "b_not1or2", 2, "~A|B"),
    f(5, "b_and", 2, "AND"),
    f(6, "b_nand", 2, "NAND"),
    f(7, "b_xor", 2, "XOR"),
    f(8, "rshift1", 1, ">>1"),
    f(9, "rshift2", 1, ">>2"),
    f(10, "swap", 2, "SWP"),
    f(11, "add", 2, "+"),
    f(12, "add_sat", 2, "+S"),
    f(13, "avg", 2, "AVG"),
    f(14, "max", 2, "MAX"),
    f(15, "min", 2, "MIN"),
];

// ── Lookups ──────────────────────────────────────────────────────────────────

pub fn lookup(id: FunctionId) -> Result<&'static FunctionSpec, UnknownFunction> {
    usize::try_from(id)
        .ok()
        .and_then(|i| FUNCTIONS.get(i))
        .ok_or(UnknownFunction { id })
}

pub fn arity_of(id: FunctionId) -> Result<u8, UnknownFunction> {
    lookup(id).map(|spec| spec.arity)
}

pub fn symbol_of(id: FunctionId) -> Result<&'static str, UnknownFunction> {
    lookup(id).map(|spec| spec.symbol)
}

#[cfg(test)]
#[path = "../tests/rust/test_functions.rs"]
mod tests;
