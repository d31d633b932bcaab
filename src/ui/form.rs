//! Named text inputs with reset-to-initial.

/// A set of named text fields.
///
/// Unknown field names are ignored by the mutating methods and read as "".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    initial: Vec<(String, String)>,
    values: Vec<(String, String)>,
}

impl FormState {
    pub fn new(fields: &[(&str, &str)]) -> Self {
        let initial: Vec<(String, String)> = fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self {
            values: initial.clone(),
            initial,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.slot_mut(name) {
            *slot = value.into();
        }
    }

    pub fn push_char(&mut self, name: &str, ch: char) {
        if let Some(slot) = self.slot_mut(name) {
            slot.push(ch);
        }
    }

    pub fn pop_char(&mut self, name: &str) {
        if let Some(slot) = self.slot_mut(name) {
            slot.pop();
        }
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        self.values
            .iter_mut()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}
