/// A dense, 0-indexed rank list of ids.
///
/// Panels use one of these for their vertical stacking order (`y_index`) and
/// each panel uses another for the paint order of its data layers
/// (`z_index`). Ranks are always exactly the permutation `0..len()`; render
/// order is ascending rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedIds {
    ids: Vec<String>,
}

impl OrderedIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id at the requested rank and return the rank it received.
    ///
    /// `None` appends. A non-negative rank is clamped to `[0, len]`; ids at
    /// or above it shift up by one. A negative rank counts back from the end
    /// of the current list, bottoming out at 0.
    pub fn insert(&mut self, id: impl Into<String>, requested: Option<i64>) -> usize {
        let len = self.ids.len();
        let index = match requested {
            None => len,
            Some(p) if p >= 0 => (p as usize).min(len),
            Some(p) => {
                let resolved = len as i64 + p;
                resolved.max(0) as usize
            }
        };
        self.ids.insert(index, id.into());
        index
    }

    /// Remove an id, shifting later ids down by one. Returns the rank it
    /// held, or `None` if the id was not present.
    pub fn remove(&mut self, id: &str) -> Option<usize> {
        let index = self.index_of(id)?;
        self.ids.remove(index);
        Some(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|existing| existing == id)
    }

    /// Ids in ascending rank order, which is exactly paint order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
