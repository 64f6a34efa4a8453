/// Prompt printed before every line read by the interactive shell.
pub const DEFAULT_SHELL_PROMPT: &str = "tabula> ";

/// Lines that end an interactive shell session, compared case-insensitively.
pub const SHELL_EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Keyword of the command that prints one table.
pub const PRINT_COMMAND: &str = "print";

/// Keyword of the command that lists the known tables.
pub const TABLES_COMMAND: &str = "tables";
