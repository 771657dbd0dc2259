use std::collections::HashMap;

/// A bidirectional string-to-id interner, one per dictionary kind
/// (word/category names, feature names). Grounded in the same
/// two-map-in-lockstep idea as a `BidiMap`, specialised for the
/// "intern a string, get a stable small id back" access pattern that
/// the composition engine and grammar loader both need.
#[derive(Debug, Default, Clone)]
pub struct Dict {
    to_id: HashMap<String, u32>,
    to_name: Vec<String>,
}

impl Dict {
    pub fn new() -> Self {
        Dict {
            to_id: HashMap::new(),
            to_name: Vec::new(),
        }
    }

    /// Interns `name`, returning its id. Repeated calls with the same
    /// name return the same id.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.to_id.get(name) {
            return id;
        }
        let id = self.to_name.len() as u32;
        self.to_name.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        id
    }

    /// Looks up an id without interning; used when a caller only wants
    /// to know whether a name has already been seen.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.to_id.get(name).copied()
    }

    pub fn name(&self, id: u32) -> &str {
        self.to_name
            .get(id as usize)
            .map(String::as_str)
            .unwrap_or("<?>")
    }

    pub fn len(&self) -> usize {
        self.to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_name.is_empty()
    }
}

/// Dictionary of category/word names (mirrors cdec's `TD`).
pub type SymbolTable = Dict;
/// Dictionary of feature names (mirrors cdec's `FD`).
pub type FeatureTable = Dict;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut d = Dict::new();
        let a = d.intern("NP");
        let b = d.intern("VP");
        let a2 = d.intern("NP");
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(d.name(a), "NP");
        assert_eq!(d.name(b), "VP");
    }
}
