use crate::BinaryOp;

/// **(internal)** Convert `FnUpdateTemp` back to Boolean expression string.
mod _display_fn_update_temp;
/// **(internal)** `FnUpdateTemp` parsing.
mod _from_string_for_fn_update_temp;
/// **(internal)** Implementation of `FnUpdateTemp`.
mod _impl_fn_update_temp;

/// **(internal)** A helper enum for representing a parsed `FnUpdate` that has not been
/// integrated into a `BooleanNetwork` yet (variables are still referenced by name).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum FnUpdateTemp {
    Const(bool),
    Var(String),
    Not(Box<FnUpdateTemp>),
    Binary(BinaryOp, Box<FnUpdateTemp>, Box<FnUpdateTemp>),
}
