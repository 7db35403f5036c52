use std::collections::BTreeMap;

/// Equipment known to the shop floor, keyed by control number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCatalog {
    names: BTreeMap<String, String>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Human-readable name, or the id itself for unknown equipment.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        match self.names.get(id) {
            Some(name) if !name.trim().is_empty() => name,
            _ => id,
        }
    }

    /// Known ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (id, name) in iter {
            catalog.insert(id, name);
        }
        catalog
    }
}
