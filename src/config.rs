/// Which algorithm turns a regex into the automaton a [`Pattern`] runs.
///
/// [`Pattern`]: crate::Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Construction {
    /// Thompson's construction; the NFA is simulated directly
    Thompson,
    /// Thompson's construction followed by subset construction
    #[default]
    Subset,
    /// Direct DFA construction from the augmented syntax tree
    Direct,
}

/// Options for building a [`Pattern`](crate::Pattern).
///
/// ```
/// use abre::{Config, Construction};
///
/// let config = Config::new()
///     .construction(Construction::Direct)
///     .size_limit(Some(64));
/// assert_eq!(config.get_construction(), Construction::Direct);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    construction: Construction,
    size_limit: Option<usize>,
    validate: bool,
}

impl Config {
    pub fn new() -> Config {
        Config {
            construction: Construction::default(),
            size_limit: None,
            validate: true,
        }
    }

    pub fn construction(mut self, construction: Construction) -> Config {
        self.construction = construction;
        self
    }

    /// Upper bound on the number of automaton states (and syntax tree
    /// positions for direct construction). `None` means unbounded.
    pub fn size_limit(mut self, limit: Option<usize>) -> Config {
        self.size_limit = limit;
        self
    }

    /// Whether regexes are checked against the symbol whitelist and the
    /// forbidden pairs before construction. Enabled by default.
    pub fn validate(mut self, yes: bool) -> Config {
        self.validate = yes;
        self
    }

    pub fn get_construction(&self) -> Construction {
        self.construction
    }

    pub fn get_size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    pub fn get_validate(&self) -> bool {
        self.validate
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
