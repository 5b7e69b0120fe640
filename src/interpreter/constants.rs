// Constants for the tape interpreter

/// Deepest loop nesting accepted while recording a loop.
/// One more loop begin than this aborts the session.
pub const MAX_NESTED_LOOPS: usize = 1000;

/// Prompt shown when the read primitive asks for a value.
pub const READ_PROMPT: &str = "Your input: ";

/// Prompt shown by the interactive session.
pub const SESSION_PROMPT: &str = "sb> ";
