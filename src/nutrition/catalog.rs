//! Recognized food labels
//!
//! The recognizer emits a small, fixed set of labels. Each one is pinned to a
//! single catalog description; anything else is not looked up at all.

/// Label -> catalog description
const CATALOG: &[(&str, &str)] = &[
    ("egg", "Egg, whole, boiled or poached"),
    ("rice", "Rice, cooked, NFS"),
    ("banana", "Banana, raw"),
];

/// Catalog description for a recognized label (exact, case-sensitive)
pub fn description_for(object_name: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(label, _)| *label == object_name)
        .map(|(_, description)| *description)
}

/// All recognized labels, in catalog order
pub fn recognized_foods() -> Vec<&'static str> {
    CATALOG.iter().map(|(label, _)| *label).collect()
}
