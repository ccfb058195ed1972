use crate::pint::{OutputFiles, SessionFiles};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

impl SessionFiles {
    /// Allocate files inside the given `directory`.
    pub fn new<D: Into<PathBuf>>(directory: D) -> SessionFiles {
        SessionFiles {
            directory: directory.into(),
            prefix: "output".to_string(),
            counter: 0,
        }
    }

    /// Use a custom file name prefix instead of `output`.
    pub fn with_prefix(mut self, prefix: &str) -> SessionFiles {
        self.prefix = prefix.to_string();
        self
    }

    /// The directory in which the files are allocated.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl OutputFiles for SessionFiles {
    fn new_output_file(&mut self, extension: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;
        loop {
            self.counter += 1;
            let name = format!("{}-{}.{}", self.prefix, self.counter, extension);
            let path = self.directory.join(name);
            // `create_new` fails if the file exists, which reserves the path atomically.
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => {
                    debug!("Allocated output file {}.", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
