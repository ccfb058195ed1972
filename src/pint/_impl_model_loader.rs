use crate::pint::ModelLoader;
use std::path::Path;

/// Any function from a path to a model is a loader.
impl<F, M, E> ModelLoader for F
where
    F: Fn(&Path) -> Result<M, E>,
{
    type Model = M;
    type Error = E;

    fn load(&self, path: &Path) -> Result<M, E> {
        self(path)
    }
}
