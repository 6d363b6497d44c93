//! Small keyed cache for derived option lists served to pickers.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

/// Cache key for the company picker options aggregate. Invalidated whenever
/// the set of companies or their tags changes (create, update, merge).
pub const COMPANY_OPTIONS_KEY: &str = "company_options";

#[derive(Default)]
pub struct OptionsCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl OptionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    pub fn put(&self, key: &str, value: Value) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value);
    }

    pub fn invalidate(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_get_invalidate_round_trip() {
        let cache = OptionsCache::new();
        assert!(cache.get(COMPANY_OPTIONS_KEY).is_none());
        cache.put(COMPANY_OPTIONS_KEY, json!([{"id": "1"}]));
        assert_eq!(cache.get(COMPANY_OPTIONS_KEY), Some(json!([{"id": "1"}])));
        cache.invalidate(COMPANY_OPTIONS_KEY);
        assert!(cache.get(COMPANY_OPTIONS_KEY).is_none());
    }

    #[test]
    fn invalidating_a_missing_key_is_a_no_op() {
        let cache = OptionsCache::new();
        cache.invalidate("nothing");
        assert!(cache.get("nothing").is_none());
    }
}
