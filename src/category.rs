//! # Description
//! - map the raw label of a run to the group it belongs to
//! - the groups are a small ordered set, the last one is the fallback
//!   for labels that carry no known marker

use serde::{Deserialize, Serialize};

/// index into the ordered category list of a classifier
pub type CategoryId = usize;

pub trait Classifier {
    /// all categories in their fixed output order
    fn categories(&self) -> &[String];
    /// total: every label maps to exactly one category
    fn classify(&self, label: &str) -> CategoryId;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySettings {
    pub name: String,
    pub markers: Vec<String>,
}

/// # Description
/// case-insensitive substring matching
/// * the first category with a marker contained in the label wins
/// * labels without any marker go to the default category
///
/// # Example
/// ```
/// use amdahl_predict::category::{Classifier, MarkerClassifier};
/// let classifier = MarkerClassifier::accelerator_split();
/// assert_eq!(classifier.categories(), &["gpu".to_string(), "cpu".to_string()]);
/// assert_eq!(classifier.classify("GPU4"), 0);
/// assert_eq!(classifier.classify("node7"), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MarkerClassifier {
    names: Vec<String>,
    markers: Vec<Vec<String>>,
}

impl MarkerClassifier {
    pub fn new(categories: &[CategorySettings], default_category: &str) -> Self {
        let mut names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
        names.push(default_category.to_string());
        let markers = categories
            .iter()
            .map(|c| c.markers.iter().map(|m| m.to_lowercase()).collect())
            .collect();
        MarkerClassifier { names, markers }
    }

    /// `gpu` labelled runs against everything else
    pub fn accelerator_split() -> Self {
        Self::new(
            &[CategorySettings {
                name: "gpu".into(),
                markers: vec!["gpu".into()],
            }],
            "cpu",
        )
    }

    /// every run in one group
    pub fn single(name: &str) -> Self {
        Self::new(&[], name)
    }

    pub fn default_id(&self) -> CategoryId {
        self.names.len() - 1
    }
}

impl Classifier for MarkerClassifier {
    fn categories(&self) -> &[String] {
        &self.names
    }

    fn classify(&self, label: &str) -> CategoryId {
        let label = label.to_lowercase();
        self.markers
            .iter()
            .position(|markers| markers.iter().any(|m| label.contains(m.as_str())))
            .unwrap_or_else(|| self.default_id())
    }
}
