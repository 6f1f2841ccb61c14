/// Runtime values.
///
/// Defines the `Value` enum, its kind tags and the coercions operations use to
/// obtain the type they need.
pub mod core;
/// Output sinks.
///
/// Defines the `Output` trait that built-ins write through, with a stdout
/// implementation and an in-memory buffer.
pub mod output;
