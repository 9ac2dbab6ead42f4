/// Interaction statuses an element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementStatus {
    Highlighted,
    Selected,
}

/// Shared, read-mostly interaction state for one data layer: ordered lists of
/// element ids per status. Lists never hold duplicates and every operation is
/// idempotent, so repeated interaction events are safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    highlighted: Vec<String>,
    selected: Vec<String>,
}

impl ElementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self, status: ElementStatus) -> &[String] {
        match status {
            ElementStatus::Highlighted => &self.highlighted,
            ElementStatus::Selected => &self.selected,
        }
    }

    pub fn has(&self, status: ElementStatus, element_id: &str) -> bool {
        self.ids(status).iter().any(|id| id == element_id)
    }

    /// Grant or revoke a status for one element.
    pub fn set(&mut self, status: ElementStatus, element_id: &str, active: bool) {
        let list = self.list_mut(status);
        let position = list.iter().position(|id| id == element_id);
        match (active, position) {
            (true, None) => list.push(element_id.to_string()),
            (false, Some(idx)) => {
                list.remove(idx);
            }
            _ => {}
        }
    }

    /// Grant a status to one element and revoke it everywhere else.
    pub fn set_exclusive(&mut self, status: ElementStatus, element_id: &str) {
        let list = self.list_mut(status);
        list.clear();
        list.push(element_id.to_string());
    }

    /// Flip a status for one element, returning the new value.
    pub fn toggle(&mut self, status: ElementStatus, element_id: &str) -> bool {
        let active = !self.has(status, element_id);
        self.set(status, element_id, active);
        active
    }

    pub fn clear(&mut self, status: ElementStatus) {
        self.list_mut(status).clear();
    }

    fn list_mut(&mut self, status: ElementStatus) -> &mut Vec<String> {
        match status {
            ElementStatus::Highlighted => &mut self.highlighted,
            ElementStatus::Selected => &mut self.selected,
        }
    }
}
