use crate::FnUpdate::*;
use crate::_expression_parser::FnUpdateTemp;
use crate::{BinaryOp, BooleanNetwork, FnUpdate, VariableId};
use std::collections::{HashMap, HashSet};
use std::convert::TryFrom;

/// Constructor and destructor utility methods. These mainly avoid unnecessary boxing
/// and exhaustive pattern matching when not necessary.
impl FnUpdate {
    /// Create a `true` formula.
    pub fn mk_true() -> FnUpdate {
        Const(true)
    }

    /// Create a `false` formula.
    pub fn mk_false() -> FnUpdate {
        Const(false)
    }

    /// Create an `x` formula where `x` is a Boolean variable.
    pub fn mk_var(id: VariableId) -> FnUpdate {
        Var(id)
    }

    /// Create a `!phi` formula, where `phi` is an inner `FnUpdate`.
    pub fn mk_not(inner: FnUpdate) -> FnUpdate {
        Not(Box::new(inner))
    }

    /// Create a `phi 'op' psi` where `phi` and `psi` are arguments of `op` operator.
    pub fn mk_binary(op: BinaryOp, left: FnUpdate, right: FnUpdate) -> FnUpdate {
        Binary(op, Box::new(left), Box::new(right))
    }

    /// Negate this function.
    pub fn negation(self) -> FnUpdate {
        FnUpdate::mk_not(self)
    }

    /// Create a conjunction.
    pub fn and(self, other: FnUpdate) -> FnUpdate {
        FnUpdate::mk_binary(BinaryOp::And, self, other)
    }

    /// Create a disjunction.
    pub fn or(self, other: FnUpdate) -> FnUpdate {
        FnUpdate::mk_binary(BinaryOp::Or, self, other)
    }

    /// Create an exclusive or.
    pub fn xor(self, other: FnUpdate) -> FnUpdate {
        FnUpdate::mk_binary(BinaryOp::Xor, self, other)
    }

    /// Create an implication.
    pub fn implies(self, other: FnUpdate) -> FnUpdate {
        FnUpdate::mk_binary(BinaryOp::Imp, self, other)
    }

    /// Create an equivalence.
    pub fn iff(self, other: FnUpdate) -> FnUpdate {
        FnUpdate::mk_binary(BinaryOp::Iff, self, other)
    }

    /// If `Const`, return the value, otherwise return `None`.
    pub fn as_const(&self) -> Option<bool> {
        match self {
            Const(value) => Some(*value),
            _ => None,
        }
    }

    /// If `Var`, return the id, otherwise return `None`.
    pub fn as_var(&self) -> Option<VariableId> {
        match self {
            Var(value) => Some(*value),
            _ => None,
        }
    }

    /// If `Not`, return the inner function, otherwise return `None`.
    pub fn as_not(&self) -> Option<&FnUpdate> {
        match self {
            Not(inner) => Some(inner),
            _ => None,
        }
    }

    /// If `Binary`, return the operator and left/right formulas, otherwise return `None`.
    pub fn as_binary(&self) -> Option<(&FnUpdate, BinaryOp, &FnUpdate)> {
        match self {
            Binary(op, l, r) => Some((l, *op, r)),
            _ => None,
        }
    }
}

/// Other utility methods.
impl FnUpdate {
    /// Try to parse an update function from a string expression using the provided `network`
    /// as context.
    pub fn try_from_str(expression: &str, network: &BooleanNetwork) -> Result<FnUpdate, String> {
        let tmp = FnUpdateTemp::try_from(expression)?;
        let update = tmp.into_fn_update(network)?;
        Ok(*update)
    }

    /// Return a sorted vector of all variables that are actually used as inputs in this function.
    pub fn collect_arguments(&self) -> Vec<VariableId> {
        let mut args = HashSet::new();
        self.walk_postorder(&mut |it: &FnUpdate| {
            if let Var(id) = it {
                args.insert(*id);
            }
        });
        let mut result: Vec<VariableId> = args.into_iter().collect();
        result.sort();
        result
    }

    /// Returns true if this update function uses the given variable.
    pub fn contains_variable(&self, variable: VariableId) -> bool {
        let mut result = false;
        self.walk_postorder(&mut |it: &FnUpdate| {
            if let Var(id) = it {
                result = result || (*id == variable);
            }
        });
        result
    }

    /// Convert this update function to a string, taking names from the provided `BooleanNetwork`.
    pub fn to_string(&self, context: &BooleanNetwork) -> String {
        match self {
            Const(value) => value.to_string(),
            Var(id) => context.get_variable_name(*id).to_string(),
            Not(inner) => format!("!{}", inner.to_string(context)),
            Binary(op, l, r) => {
                format!("({} {} {})", l.to_string(context), op, r.to_string(context))
            }
        }
    }

    /// If possible, evaluate this function using the given network variable valuation.
    ///
    /// If the valuation is partial, the function can still be evaluated as long as the
    /// missing values cannot change the result (e.g. `a & b` with `a = false`). Otherwise,
    /// `None` is returned.
    pub fn evaluate(&self, values: &HashMap<VariableId, bool>) -> Option<bool> {
        match self {
            Const(value) => Some(*value),
            Var(id) => values.get(id).cloned(),
            Not(inner) => inner.evaluate(values).map(|it| !it),
            Binary(op, left, right) => {
                let left = left.evaluate(values);
                let right = right.evaluate(values);
                match op {
                    BinaryOp::And => match (left, right) {
                        (Some(false), _) | (_, Some(false)) => Some(false),
                        (Some(true), Some(true)) => Some(true),
                        _ => None,
                    },
                    BinaryOp::Or => match (left, right) {
                        (Some(true), _) | (_, Some(true)) => Some(true),
                        (Some(false), Some(false)) => Some(false),
                        _ => None,
                    },
                    BinaryOp::Iff => match (left, right) {
                        (Some(left), Some(right)) => Some(left == right),
                        _ => None,
                    },
                    BinaryOp::Xor => match (left, right) {
                        (Some(left), Some(right)) => Some(left != right),
                        _ => None,
                    },
                    BinaryOp::Imp => match (left, right) {
                        (Some(false), _) | (_, Some(true)) => Some(true),
                        (Some(true), Some(false)) => Some(false),
                        _ => None,
                    },
                }
            }
        }
    }

    /// Iterate through all nodes of the abstract syntax tree of this function in post-order.
    pub fn walk_postorder<F>(&self, action: &mut F)
    where
        F: FnMut(&FnUpdate),
    {
        match self {
            Const(_) | Var(_) => action(self),
            Not(inner) => {
                inner.walk_postorder(action);
                action(self);
            }
            Binary(_, left, right) => {
                left.walk_postorder(action);
                right.walk_postorder(action);
                action(self);
            }
        }
    }

    /// Create a copy of this [FnUpdate] with every occurrence of [VariableId] `var` substituted
    /// for [FnUpdate] `expression`.
    pub fn substitute_variable(&self, var: VariableId, expression: &FnUpdate) -> FnUpdate {
        match self {
            Const(_) => self.clone(),
            Var(id) => {
                if id == &var {
                    expression.clone()
                } else {
                    self.clone()
                }
            }
            Not(inner) => {
                let inner = inner.substitute_variable(var, expression);
                FnUpdate::mk_not(inner)
            }
            Binary(op, left, right) => {
                let left = left.substitute_variable(var, expression);
                let right = right.substitute_variable(var, expression);
                FnUpdate::mk_binary(*op, left, right)
            }
        }
    }

    /// Shorthand for substituting a Boolean constant for `var`.
    pub fn restrict(&self, var: VariableId, value: bool) -> FnUpdate {
        self.substitute_variable(var, &Const(value))
    }

    /// Split this function into the operands of its top-level chain of `op` operators.
    ///
    /// For example, `(a & b) & !c` is split by `And` into `[a, b, !c]`. A function that is not
    /// an `op` node is returned as a single operand.
    pub fn split_by(&self, op: BinaryOp) -> Vec<&FnUpdate> {
        fn r_split<'a>(function: &'a FnUpdate, op: BinaryOp, result: &mut Vec<&'a FnUpdate>) {
            match function {
                Binary(it, left, right) if *it == op => {
                    r_split(left, op, result);
                    r_split(right, op, result);
                }
                _ => result.push(function),
            }
        }
        let mut result = Vec::new();
        r_split(self, op, &mut result);
        result
    }

    /// True if this function is a variable or a negated variable.
    pub fn is_literal(&self) -> bool {
        match self {
            Var(_) => true,
            Not(inner) => matches!(**inner, Var(_)),
            _ => false,
        }
    }
}
