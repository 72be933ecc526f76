use serde_json::Map;
use serde_json::Value;

/// Ordered-alternatives field resolution: the first candidate key holding a
/// non-null value wins.
pub fn first_of<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key).filter(|v| !v.is_null()))
}
