//! Export of `BooleanNetwork`s into Pint automata networks (`.an`).
//!
//! Every Boolean variable `a` becomes an automaton with local states `0` and `1`
//! (declared as `a [0, 1]`). Its update function `fa` gives rise to two families of local
//! transitions:
//!
//!  - `a 0 -> 1` guarded by `fa[a := false]`,
//!  - `a 1 -> 0` guarded by `!fa[a := true]`.
//!
//! Both guards are simplified into a DNF, and every clause becomes one `when` condition.
//!
//! The file handling and model loading are collaborators supplied by the caller:
//! an [OutputFiles] allocator decides where the `.an` file lives, a name-protection function
//! decides how names are escaped (usually [pint_protect]), and a [ModelLoader] turns the
//! finished file into whatever model object the caller works with.

use crate::{BooleanNetwork, VariableId};
use std::io;
use std::path::{Path, PathBuf};

/// **(internal)** Derivation of transition guards and the export entry points.
mod _impl_export;
/// **(internal)** `AnWriteError` and `ExportError`.
mod _impl_export_error;
/// **(internal)** Conversion of expression nodes into literals.
mod _impl_literal;
/// **(internal)** `ModelLoader` for plain functions.
mod _impl_model_loader;
/// **(internal)** Escaping of names in the `.an` grammar.
mod _impl_protect;
/// **(internal)** The default `OutputFiles` implementation.
mod _impl_session_files;
/// **(internal)** Writing of `.an` declarations and transitions.
mod _impl_transition_writer;

pub use _impl_export::{
    import_boolean_network, to_automata_network_string, transition_guards,
    write_automata_network,
};
pub use _impl_protect::pint_protect;

/// A variable together with its polarity: `value == false` is the negated literal `!x`
/// (local state `0`), `value == true` is the plain literal `x` (local state `1`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    variable: VariableId,
    value: bool,
}

/// A change of one automaton from a local state to another.
///
/// For Boolean networks, only `(a, 0, 1)` and `(a, 1, 0)` are ever produced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LocalTransition {
    variable: VariableId,
    from: u8,
    to: u8,
}

/// Writes `.an` statements into an underlying `std::io::Write`, using the names of the
/// given network passed through a name-protection function.
pub struct TransitionWriter<'a, W, P>
where
    W: io::Write,
    P: Fn(&str) -> String + ?Sized,
{
    network: &'a BooleanNetwork,
    protect: &'a P,
    out: W,
}

/// An error raised while producing the `.an` text.
#[derive(Debug)]
pub enum AnWriteError {
    /// An expression does not have the shape required by the `.an` grammar
    /// (e.g. a guard that is not in DNF).
    Expression(String),
    /// Writing into the output failed.
    Io(io::Error),
}

/// An error raised by [import_boolean_network]. The error of the model loader is kept
/// as it was returned.
#[derive(Debug)]
pub enum ExportError<E> {
    Write(AnWriteError),
    Load(E),
}

/// Allocates paths of new output files.
pub trait OutputFiles {
    /// Return a path of a new output file with the given extension (without the dot).
    ///
    /// The path must not be handed out again by the same allocator.
    fn new_output_file(&mut self, extension: &str) -> io::Result<PathBuf>;
}

/// Turns a finished `.an` file into a model object.
pub trait ModelLoader {
    type Model;
    type Error;

    fn load(&self, path: &Path) -> Result<Self::Model, Self::Error>;
}

/// Allocates numbered files (`<prefix>-<n>.<extension>`) inside one directory.
///
/// The directory is created on first use. Allocated files are created empty (so that two
/// allocators sharing a directory never hand out the same path), and are never deleted.
#[derive(Clone, Debug)]
pub struct SessionFiles {
    directory: PathBuf,
    prefix: String,
    counter: usize,
}
