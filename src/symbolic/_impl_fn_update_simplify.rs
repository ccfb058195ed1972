use crate::symbolic::SymbolicContext;
use crate::{FnUpdate, VariableId};
use biodivine_lib_bdd::{Bdd, BddPartialValuation, BddVariable};
use std::collections::HashMap;

impl FnUpdate {
    /// Build an update function from a `Bdd` created by the given `SymbolicContext`.
    ///
    /// Constant `Bdd`s become `Const`. Otherwise, the result is a disjunction of conjunctive
    /// clauses, one clause per satisfying path of the `Bdd`, each clause being a conjunction
    /// of literals ordered as the network variables. This is far from minimal, but it is
    /// deterministic and every clause is directly usable as a transition condition.
    pub fn build_from_bdd(context: &SymbolicContext, bdd: &Bdd) -> FnUpdate {
        if bdd.is_true() {
            return FnUpdate::mk_true();
        }
        if bdd.is_false() {
            return FnUpdate::mk_false();
        }

        let state_variables: HashMap<BddVariable, VariableId> = context
            .state_variables()
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, VariableId::from_index(i)))
            .collect();

        fn build_clause(
            map: &HashMap<BddVariable, VariableId>,
            clause: BddPartialValuation,
        ) -> Option<FnUpdate> {
            clause
                .to_values()
                .into_iter()
                .map(|(var, value)| {
                    let literal = FnUpdate::mk_var(map[&var]);
                    if value {
                        literal
                    } else {
                        literal.negation()
                    }
                })
                .reduce(|clause, literal| clause.and(literal))
        }

        // Because the BDD isn't constant, there is at least one clause and each clause
        // has at least one literal.
        bdd.sat_clauses()
            .filter_map(|clause| build_clause(&state_variables, clause))
            .reduce(|result, clause| result.or(clause))
            .unwrap_or_else(FnUpdate::mk_false)
    }

    /// Simplify this function into a canonical form: `Const` if the function is a tautology
    /// or a contradiction, otherwise a DNF (see [FnUpdate::build_from_bdd]).
    pub fn simplify(&self, context: &SymbolicContext) -> FnUpdate {
        let bdd = context.mk_fn_update_true(self);
        FnUpdate::build_from_bdd(context, &bdd)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::SymbolicContext;
    use crate::{BinaryOp, BooleanNetwork, FnUpdate};
    use biodivine_lib_bdd::bdd;
    use std::collections::HashMap;

    fn network() -> BooleanNetwork {
        BooleanNetwork::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap()
    }

    #[test]
    pub fn test_symbolic_instantiation() {
        let bn = network();
        let ctx = SymbolicContext::new(&bn).unwrap();
        let vars = ctx.bdd_variable_set();
        let a = bn.find_variable("a").unwrap();
        let b = bn.find_variable("b").unwrap();

        let var_a = FnUpdate::mk_var(a);
        let var_b = FnUpdate::mk_var(b);

        let bdd = bdd!(vars, "x0");
        assert_eq!(var_a, FnUpdate::build_from_bdd(&ctx, &bdd));

        let bdd = bdd!(vars, "x0" & "x1");
        assert_eq!(
            var_a.clone().and(var_b.clone()),
            FnUpdate::build_from_bdd(&ctx, &bdd)
        );

        let bdd = bdd!(vars, "x0" <=> "x1");
        let rebuilt = FnUpdate::build_from_bdd(&ctx, &bdd);
        assert_eq!(bdd, ctx.mk_fn_update_true(&rebuilt));
        let clauses = rebuilt.split_by(BinaryOp::Or);
        assert_eq!(2, clauses.len());
        for clause in clauses {
            let literals = clause.split_by(BinaryOp::And);
            assert_eq!(2, literals.len());
            assert!(literals.iter().all(|it| it.is_literal()));
        }
    }

    #[test]
    pub fn simplify_constants() {
        let bn = network();
        let ctx = SymbolicContext::new(&bn).unwrap();

        let tautology = FnUpdate::try_from_str("a | !a", &bn).unwrap();
        assert_eq!(FnUpdate::mk_true(), tautology.simplify(&ctx));

        let contradiction = FnUpdate::try_from_str("(a => b) & a & !b", &bn).unwrap();
        assert_eq!(FnUpdate::mk_false(), contradiction.simplify(&ctx));

        let absorbed = FnUpdate::try_from_str("!!c & (c | b)", &bn).unwrap();
        let c = bn.find_variable("c").unwrap();
        assert_eq!(FnUpdate::mk_var(c), absorbed.simplify(&ctx));
    }

    #[test]
    pub fn simplify_preserves_semantics() {
        let bn = network();
        let ctx = SymbolicContext::new(&bn).unwrap();
        let function = FnUpdate::try_from_str("(a ^ b) => (c <=> !a)", &bn).unwrap();
        let simplified = function.simplify(&ctx);
        let variables = bn.variables().collect::<Vec<_>>();
        for mask in 0..8u32 {
            let valuation = variables
                .iter()
                .enumerate()
                .map(|(i, v)| (*v, (mask >> i) & 1 == 1))
                .collect::<HashMap<_, _>>();
            assert_eq!(function.evaluate(&valuation), simplified.evaluate(&valuation));
        }
    }
}
