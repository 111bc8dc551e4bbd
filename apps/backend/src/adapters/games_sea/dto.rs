//! Write DTOs for the game adapter.

#[derive(Debug, Clone)]
pub struct GameCreate {
    pub title: String,
    pub console_id: i64,
}

impl GameCreate {
    pub fn new(title: impl Into<String>, console_id: i64) -> Self {
        Self {
            title: title.into(),
            console_id,
        }
    }
}
