use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub due_date: Option<String>,
    pub estimated_hours: Option<f64>,
    pub importance: Option<f64>,
    pub dependencies: Vec<String>,
}

/// Raw form field state, exactly as typed. Coercion into a [`Task`]
/// happens once, on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    pub title: String,
    pub due_date: String,
    pub estimated_hours: String,
    pub importance: String,
    pub dependencies: String,
}

impl FormDraft {
    pub fn into_task(self, id: String) -> Task {
        let due_date = if self.due_date.is_empty() {
            None
        } else {
            Some(self.due_date)
        };

        Task {
            id,
            title: self.title.trim().to_string(),
            due_date,
            estimated_hours: parse_optional_number(&self.estimated_hours),
            importance: parse_optional_number(&self.importance),
            dependencies: split_dependencies(&self.dependencies),
        }
    }
}

// Empty means "not provided"; unparseable input is treated the same way,
// matching the lenient backend serializer.
fn parse_optional_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok().filter(|value: &f64| value.is_finite())
}

fn split_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
