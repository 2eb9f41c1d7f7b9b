/// Settings for a single encode or decode.
///
/// ```
/// use runez::Options;
/// let options = Options::new().diagnostics(true);
/// assert!(options.diagnostics_enabled());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    diagnostics: bool,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    /// Log the symbol table and index assignments at debug level while coding.
    /// The archive bytes are the same either way.
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn diagnostics_enabled(&self) -> bool {
        self.diagnostics
    }
}
