use crate::_expression_parser::FnUpdateTemp;
use crate::_expression_parser::FnUpdateTemp::*;
use std::fmt::{Display, Error, Formatter};

impl Display for FnUpdateTemp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Const(value) => write!(f, "{value}"),
            Var(name) => write!(f, "{name}"),
            Not(inner) => write!(f, "!{inner}"),
            Binary(op, l, r) => write!(f, "({l} {op} {r})"),
        }
    }
}
