/// Source location helpers.
///
/// Tokens, AST nodes and errors carry byte offsets into the source. This module
/// turns those offsets back into the line and column numbers people expect to
/// see in a diagnostic.
pub mod source;
