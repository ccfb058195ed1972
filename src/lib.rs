//! A library for exporting Boolean networks into the automata network (`.an`) format
//! of the Pint static analyser.
//!
//! The main entry point is [pint::import_boolean_network], which takes a [BooleanNetwork],
//! derives an "up" and a "down" transition guard for every variable, writes them into a fresh
//! `.an` file and hands the file to a [pint::ModelLoader]. If you only need the text,
//! [pint::write_automata_network] writes it into any `std::io::Write`.
//!
//! Networks can be built programmatically, or read from `.bnet` and `minibn` model strings
//! (see [BooleanNetwork::try_from_bnet] and [BooleanNetwork::try_from_minibn]).

use fxhash::FxHashMap;
use std::iter::Map;
use std::ops::Range;

pub mod pint;
pub mod symbolic;

/// **(internal)** `.bnet` model reader.
mod _bnet_parser;
/// **(internal)** Parser of Boolean expressions shared by all model readers.
mod _expression_parser;
/// **(internal)** Utility methods for `BooleanNetwork`.
mod _impl_boolean_network;
/// **(internal)** Utility methods for `FnUpdate`.
mod _impl_fn_update;
/// **(internal)** Utility methods for `Variable`, `VariableId` and `BinaryOp`.
mod _impl_variable;
/// **(internal)** `minibn` model reader.
mod _minibn_parser;

/// A type-safe index of a `Variable` inside a `BooleanNetwork`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VariableId(usize);

/// A variable of a `BooleanNetwork`.
///
/// Variable has a `name` and its value is either zero or one.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable {
    name: String,
}

/// Possible binary boolean operators that can appear in `FnUpdate`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Iff,
    Imp,
}

/// A boolean formula which references `Variable`s of the associated `BooleanNetwork`.
///
/// An update function specifies the evolution rules for one specific `Variable` of a
/// `BooleanNetwork`. Here, a `Var` is the "current state" symbol of the referenced variable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FnUpdate {
    Const(bool),
    Var(VariableId),
    Not(Box<FnUpdate>),
    Binary(BinaryOp, Box<FnUpdate>, Box<FnUpdate>),
}

/// A fully specified Boolean network: a set of named variables, each governed by exactly one
/// update function.
///
/// A variable without an explicitly given function is treated as a constant input, i.e. its
/// update function is the identity `x' = x`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BooleanNetwork {
    variables: Vec<Variable>,
    update_functions: Vec<FnUpdate>,
    variable_to_index: FxHashMap<String, VariableId>,
}

/// An iterator over all `VariableId`s of a `BooleanNetwork`.
pub type VariableIdIterator = Map<Range<usize>, fn(usize) -> VariableId>;
