use crate::BinaryOp::*;
use crate::{BinaryOp, Variable, VariableId};
use std::fmt::{Display, Error, Formatter};

impl Variable {
    /// Human-readable name of this variable.
    pub fn get_name(&self) -> &String {
        &self.name
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name)
    }
}

impl VariableId {
    /// Construct a variable id from its raw index.
    ///
    /// There is no check that the index is valid in any particular network.
    pub fn from_index(index: usize) -> VariableId {
        VariableId(index)
    }

    /// The raw index of this variable.
    pub fn to_index(self) -> usize {
        self.0
    }
}

impl From<VariableId> for usize {
    fn from(value: VariableId) -> Self {
        value.0
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "BnVariable({})", self.0)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let symbol = match self {
            And => "&",
            Or => "|",
            Xor => "^",
            Imp => "=>",
            Iff => "<=>",
        };
        write!(f, "{}", symbol)
    }
}
