use crate::_expression_parser::FnUpdateTemp;
use crate::_expression_parser::FnUpdateTemp::*;
use crate::{BooleanNetwork, FnUpdate};
use std::collections::HashSet;

impl FnUpdateTemp {
    /// Write all variables that appear in the function to the given set.
    pub fn dump_variables(&self, result: &mut HashSet<String>) {
        match self {
            Binary(_, l, r) => {
                l.dump_variables(result);
                r.dump_variables(result)
            }
            Not(inner) => inner.dump_variables(result),
            Var(name) => {
                result.insert(name.clone());
            }
            Const(_) => {}
        }
    }

    /// Safely build an actual update function using the variables of the given `BooleanNetwork`.
    ///
    /// Fail if the function references a variable that is not in the network.
    pub fn into_fn_update(self, bn: &BooleanNetwork) -> Result<Box<FnUpdate>, String> {
        Ok(Box::new(match self {
            Const(value) => FnUpdate::Const(value),
            Var(name) => {
                let id = bn
                    .find_variable(&name)
                    .ok_or_else(|| format!("Invalid update function. Unknown variable `{name}`."))?;
                FnUpdate::Var(id)
            }
            Not(inner) => FnUpdate::Not(inner.into_fn_update(bn)?),
            Binary(op, l, r) => FnUpdate::Binary(op, l.into_fn_update(bn)?, r.into_fn_update(bn)?),
        }))
    }
}
