use crate::pint::{AnWriteError, Literal, LocalTransition, TransitionWriter};
use crate::{BinaryOp, BooleanNetwork, FnUpdate, VariableId};
use std::io::Write;

impl<'a, W, P> TransitionWriter<'a, W, P>
where
    W: Write,
    P: Fn(&str) -> String + ?Sized,
{
    pub fn new(network: &'a BooleanNetwork, protect: &'a P, out: W) -> Self {
        TransitionWriter {
            network,
            protect,
            out,
        }
    }

    /// Write a single raw line.
    pub fn write_line(&mut self, line: &str) -> Result<(), AnWriteError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Declare the automaton of `variable` with local states `0` and `1`.
    pub fn declare_variable(&mut self, variable: VariableId) -> Result<(), AnWriteError> {
        let line = format!("{} [0, 1]", self.name(variable));
        self.write_line(&line)
    }

    /// Write the transitions which perform all `changes` at once whenever `guard` holds.
    ///
    /// The guard must be `Const` or a DNF (a disjunction of conjunctions of literals), as
    /// produced by `FnUpdate::simplify`. A `false` guard writes nothing, a `true` guard
    /// writes one unconditional transition, and otherwise one transition is written for
    /// every clause of the guard.
    pub fn make_transitions(
        &mut self,
        changes: &[LocalTransition],
        guard: &FnUpdate,
    ) -> Result<(), AnWriteError> {
        if changes.is_empty() {
            return Err(AnWriteError::Expression(
                "A transition must change at least one automaton.".to_string(),
            ));
        }
        let transition = self.format_changes(changes);
        match guard.as_const() {
            Some(false) => Ok(()),
            Some(true) => self.write_line(&transition),
            None => {
                // Nothing is written unless every clause is valid.
                let lines = guard
                    .split_by(BinaryOp::Or)
                    .into_iter()
                    .map(|clause| {
                        self.format_clause(clause)
                            .map(|conditions| format!("{} when {}", transition, conditions))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                for line in lines {
                    self.write_line(&line)?;
                }
                Ok(())
            }
        }
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W, AnWriteError> {
        self.out.flush()?;
        Ok(self.out)
    }

    /// **(internal)** Protected name of a network variable.
    fn name(&self, variable: VariableId) -> String {
        (self.protect)(self.network.get_variable_name(variable).as_str())
    }

    /// **(internal)** `a 0 -> 1` for one change, `{ a 0 -> 1 ; b 1 -> 0 }` for more.
    fn format_changes(&self, changes: &[LocalTransition]) -> String {
        let changes = changes
            .iter()
            .map(|it| {
                format!(
                    "{} {} -> {}",
                    self.name(it.get_variable()),
                    it.get_from(),
                    it.get_to()
                )
            })
            .collect::<Vec<_>>();
        if changes.len() == 1 {
            changes[0].clone()
        } else {
            format!("{{ {} }}", changes.join(" ; "))
        }
    }

    /// **(internal)** `a=1 and b=0` for a conjunctive clause `a & !b`.
    fn format_clause(&self, clause: &FnUpdate) -> Result<String, AnWriteError> {
        let mut conditions = Vec::new();
        for literal in clause.split_by(BinaryOp::And) {
            let literal = Literal::try_from_fn_update(literal)?;
            conditions.push(format!(
                "{}={}",
                self.name(literal.get_variable()),
                literal.local_state()
            ));
        }
        Ok(conditions.join(" and "))
    }
}
