use serde::Serialize;

/// Aggregated presence of one student across the whole log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub index: String,
    pub name: String,
    pub present: u32,
    pub total: u32,
    pub percentage: Option<f64>,
}

impl StudentSummary {
    pub fn new(index: &str, name: &str) -> Self {
        Self {
            index: index.to_string(),
            name: name.to_string(),
            present: 0,
            total: 0,
            percentage: None,
        }
    }

    pub(crate) fn recompute(&mut self) {
        self.percentage = if self.total > 0 {
            Some(self.present as f64 / self.total as f64 * 100.0)
        } else {
            None
        };
    }
}

/// Per-student summary in order of first appearance in the log.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Summary {
    pub students: Vec<StudentSummary>,
}

impl Summary {
    pub fn get(&self, index: &str) -> Option<&StudentSummary> {
        self.students.iter().find(|s| s.index == index)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentSummary> {
        self.students.iter()
    }
}
