//! Symbolic (BDD) representation of update functions.
//!
//! The exporter never reasons about the syntax of update functions directly. Instead, each
//! function is translated into a `Bdd` over the state variables of the network and then read
//! back as a disjunction of conjunctive clauses. This gives a canonical simplification: constant
//! functions always become `Const`, and every other function becomes a DNF over literals.

use biodivine_lib_bdd::{BddVariable, BddVariableSet};

/// **(internal)** Implementation of the `SymbolicContext`.
mod _impl_symbolic_context;
/// **(internal)** `FnUpdate` simplification and reconstruction from `Bdd`s.
mod _impl_fn_update_simplify;

/// Maps the variables of a `BooleanNetwork` to BDD variables.
///
/// The BDD variables are created in the same order as the network variables. They are named
/// `x0`, `x1`, ... by variable index, since network names may contain BDD operators.
#[derive(Clone)]
pub struct SymbolicContext {
    bdd: BddVariableSet,
    state_variables: Vec<BddVariable>,
}
