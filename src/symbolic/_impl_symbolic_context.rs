use crate::symbolic::SymbolicContext;
use crate::{BinaryOp, BooleanNetwork, FnUpdate, VariableId};
use biodivine_lib_bdd::{Bdd, BddVariable, BddVariableSet, BddVariableSetBuilder};

impl SymbolicContext {
    /// Create a new `SymbolicContext` that is based on the given `BooleanNetwork`.
    ///
    /// The BDD variable of the `i`-th network variable is called `x{i}`, so network names
    /// are not restricted by the BDD name syntax.
    pub fn new(network: &BooleanNetwork) -> Result<SymbolicContext, String> {
        if network.num_vars() >= usize::from(u16::MAX) {
            return Err(format!(
                "The network is too large. {} symbolic variables needed, but {} available.",
                network.num_vars(),
                u16::MAX
            ));
        }

        let mut builder = BddVariableSetBuilder::new();
        let state_variables = network
            .variables()
            .map(|it| builder.make_variable(&format!("x{}", it.to_index())))
            .collect::<Vec<_>>();

        Ok(SymbolicContext {
            bdd: builder.build(),
            state_variables,
        })
    }

    /// Provides access to the raw `Bdd` context.
    pub fn bdd_variable_set(&self) -> &BddVariableSet {
        &self.bdd
    }

    /// Getter for variables encoding the state variables of the network.
    pub fn state_variables(&self) -> &Vec<BddVariable> {
        &self.state_variables
    }

    /// Get the `BddVariable` representing the network variable with the given `VariableId`.
    pub fn get_state_variable(&self, variable: VariableId) -> BddVariable {
        self.state_variables[variable.to_index()]
    }

    /// Create a constant true/false `Bdd`.
    pub fn mk_constant(&self, value: bool) -> Bdd {
        if value {
            self.bdd.mk_true()
        } else {
            self.bdd.mk_false()
        }
    }

    /// Create a `Bdd` that is true when given network variable is true.
    pub fn mk_state_variable_is_true(&self, variable: VariableId) -> Bdd {
        self.bdd.mk_var(self.get_state_variable(variable))
    }

    /// Create a `Bdd` that is true exactly when the given `FnUpdate` evaluates to true.
    pub fn mk_fn_update_true(&self, function: &FnUpdate) -> Bdd {
        match function {
            FnUpdate::Const(value) => self.mk_constant(*value),
            FnUpdate::Var(id) => self.mk_state_variable_is_true(*id),
            FnUpdate::Not(inner) => self.mk_fn_update_true(inner).not(),
            FnUpdate::Binary(op, left, right) => {
                let l = self.mk_fn_update_true(left);
                let r = self.mk_fn_update_true(right);
                match op {
                    BinaryOp::And => l.and(&r),
                    BinaryOp::Or => l.or(&r),
                    BinaryOp::Xor => l.xor(&r),
                    BinaryOp::Imp => l.imp(&r),
                    BinaryOp::Iff => l.iff(&r),
                }
            }
        }
    }
}
