use serde::{Deserialize, Serialize};

/// A registered student. `index` is the natural key of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub index: String,
    pub name: String,
}

impl Student {
    pub fn new(index: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive substring match on index or name.
    /// An empty query matches every student.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.index.to_lowercase().contains(&q) || self.name.to_lowercase().contains(&q)
    }
}
