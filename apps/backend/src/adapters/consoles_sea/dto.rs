//! Write DTOs for the console adapter.

#[derive(Debug, Clone)]
pub struct ConsoleCreate {
    pub name: String,
}

impl ConsoleCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
