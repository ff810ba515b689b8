/// What a single invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Lay out a phrase given verbatim
    Phrase(String),

    /// Lay out one built-in example; 1-based, negative counts from the end
    Example(i64),

    /// Lay out every built-in example
    All,

    /// Print usage and exit
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// Print phrases only, skip grid generation.
    pub dry: bool,
}

impl CliArgs {
    pub fn new(command: CliCommand) -> Self {
        Self {
            command,
            dry: false,
        }
    }
}
