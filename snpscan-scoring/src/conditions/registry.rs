use anyhow::Result;

use super::{Condition, Mthfr, Neuropsych, Spondyloarthritis};
use crate::consts::{MTHFR_KEY, NEUROPSYCH_KEY, SPONDYLOARTHRITIS_KEY};

pub type ConditionConstructor = fn() -> Box<dyn Condition>;

/// Every condition snpscan knows, by registry key.
pub const REGISTRY: [(&str, ConditionConstructor); 3] = [
    (MTHFR_KEY, Mthfr::create),
    (NEUROPSYCH_KEY, Neuropsych::create),
    (SPONDYLOARTHRITIS_KEY, Spondyloarthritis::create),
];

///
/// Create the condition registered under `key` (case-insensitive).
///
pub fn condition_from_key(key: &str) -> Result<Box<dyn Condition>> {
    let key = key.trim().to_lowercase();
    match REGISTRY.iter().find(|(k, _)| *k == key) {
        Some((_, create)) => Ok(create()),
        None => anyhow::bail!(
            "Unknown condition: {}. Available conditions: {}",
            key,
            available_keys().join(", ")
        ),
    }
}

pub fn available_keys() -> Vec<&'static str> {
    REGISTRY.iter().map(|(k, _)| *k).collect()
}

pub fn available_conditions() -> Vec<Box<dyn Condition>> {
    REGISTRY.iter().map(|(_, create)| create()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("mthfr", "MTHFR")]
    #[case("Spondyloarthritis", "Spondyloarthritis")]
    #[case(" NEUROPSYCH ", "Neuropsychiatric disorders")]
    fn test_condition_from_key(#[case] key: &str, #[case] name: &str) {
        let condition = condition_from_key(key).unwrap();
        assert_eq!(condition.name(), name);
    }

    #[rstest]
    fn test_unknown_condition_lists_keys() {
        let err = condition_from_key("asthma").err().unwrap();
        let message = err.to_string();
        assert!(message.contains("asthma"));
        assert!(message.contains("mthfr, neuropsych, spondyloarthritis"));
    }

    #[rstest]
    fn test_registry_keys_match_conditions() {
        for condition in available_conditions() {
            assert_eq!(
                condition_from_key(condition.key()).unwrap().key(),
                condition.key()
            );
        }
    }
}
