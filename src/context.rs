use std::path::PathBuf;

/// Run-wide settings passed to the packager
#[derive(Clone)]
pub struct Context {
    /// Report every archived entry
    pub verbose: bool,

    /// Directory that inclusion paths and a relative output path resolve against
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }
}
