use crate::pint::{Literal, LocalTransition};
use crate::{FnUpdate, VariableId};

impl Literal {
    pub fn new(variable: VariableId, value: bool) -> Literal {
        Literal { variable, value }
    }

    /// Extract a literal from an expression node.
    ///
    /// `!x` gives `(x, 0)` and `x` gives `(x, 1)`. Every other shape (constants, binary
    /// operators, double negations) is not a literal and results in an error.
    pub fn try_from_fn_update(function: &FnUpdate) -> Result<Literal, String> {
        match function {
            FnUpdate::Var(id) => Ok(Literal::new(*id, true)),
            FnUpdate::Not(inner) => match inner.as_ref() {
                FnUpdate::Var(id) => Ok(Literal::new(*id, false)),
                _ => Err(format!("Expected a literal, found `{:?}`.", function)),
            },
            FnUpdate::Const(_) | FnUpdate::Binary(..) => {
                Err(format!("Expected a literal, found `{:?}`.", function))
            }
        }
    }

    pub fn get_variable(&self) -> VariableId {
        self.variable
    }

    pub fn get_value(&self) -> bool {
        self.value
    }

    /// The local state of the automaton required by this literal (`0` or `1`).
    pub fn local_state(&self) -> u8 {
        u8::from(self.value)
    }
}

impl LocalTransition {
    /// The `0 -> 1` change of the given variable.
    pub fn up(variable: VariableId) -> LocalTransition {
        LocalTransition {
            variable,
            from: 0,
            to: 1,
        }
    }

    /// The `1 -> 0` change of the given variable.
    pub fn down(variable: VariableId) -> LocalTransition {
        LocalTransition {
            variable,
            from: 1,
            to: 0,
        }
    }

    pub fn get_variable(&self) -> VariableId {
        self.variable
    }

    pub fn get_from(&self) -> u8 {
        self.from
    }

    pub fn get_to(&self) -> u8 {
        self.to
    }
}
