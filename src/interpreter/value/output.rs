use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// A destination for text written by built-in functions.
///
/// The evaluator never writes to the process streams directly; every
/// observable side effect goes through the `Output` stored in the
/// [`Context`](crate::interpreter::evaluator::core::Context).
pub trait Output {
    /// Writes `text` verbatim.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the text cannot be written.
    fn write_str(&mut self, text: &str) -> io::Result<()>;
}

/// Writes to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardOutput;

impl Output for StandardOutput {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// Collects output in memory.
///
/// Clones share the same buffer, so a host can keep one handle for inspection
/// while the interpreter owns the other.
///
/// # Example
/// ```
/// use seta::interpreter::value::output::{BufferOutput, Output};
///
/// let buffer = BufferOutput::new();
/// let mut sink = buffer.clone();
///
/// sink.write_str("hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferOutput {
    buffer: Rc<RefCell<String>>,
}

impl BufferOutput {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Output for BufferOutput {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buffer.borrow_mut().push_str(text);
        Ok(())
    }
}
