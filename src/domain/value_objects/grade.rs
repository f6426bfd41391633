//! Grade order value object
//!
//! A validated, strict total order of grade names. The LAST element is
//! the base (lowest) grade, the one the base value anchors. All other
//! grades sit above it in listing order, highest first.

use serde::{Deserialize, Serialize};

use crate::error::{CompaError, CompaResult};

/// Ordered list of grade names, highest grade first, base grade last.
///
/// Invariants (enforced at construction):
/// - at least one grade
/// - no empty names
/// - no duplicate names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GradeOrder(Vec<String>);

impl GradeOrder {
    /// Create a validated grade order from names, highest first.
    pub fn new(names: Vec<String>) -> CompaResult<Self> {
        if names.is_empty() {
            return Err(CompaError::validation("grade order must not be empty"));
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CompaError::validation(format!(
                    "grade name at position {} is empty",
                    i
                )));
            }
            if names[..i].contains(name) {
                return Err(CompaError::validation(format!(
                    "duplicate grade '{}' in grade order",
                    name
                )));
            }
        }
        Ok(Self(names))
    }

    /// All grade names, highest first.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// The base (lowest) grade, the last element of the order.
    pub fn base(&self) -> &str {
        self.0
            .last()
            .expect("grade order is never empty by construction")
    }

    /// Number of grades.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collection types.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `name` is a known grade.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|g| g == name)
    }

    /// Walk from the base grade upward (reverse listing order).
    ///
    /// This is the direction the vertical chain is computed in: the
    /// first yielded grade anchors the base value, each following grade
    /// applies its own vertical step.
    pub fn walk_up(&self) -> impl Iterator<Item = &str> {
        self.0.iter().rev().map(|s| s.as_str())
    }
}

impl TryFrom<Vec<String>> for GradeOrder {
    type Error = CompaError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        GradeOrder::new(names)
    }
}

impl From<GradeOrder> for Vec<String> {
    fn from(order: GradeOrder) -> Self {
        order.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> GradeOrder {
        GradeOrder::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn base_is_last_element() {
        let order = order(&["Director", "Manager", "Specialist"]);
        assert_eq!(order.base(), "Specialist");
    }

    #[test]
    fn walk_up_starts_at_base() {
        let order = order(&["Director", "Manager", "Specialist"]);
        let walked: Vec<_> = order.walk_up().collect();
        assert_eq!(walked, vec!["Specialist", "Manager", "Director"]);
    }

    #[test]
    fn single_grade_is_valid() {
        let order = order(&["Staff"]);
        assert_eq!(order.base(), "Staff");
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn empty_order_rejected() {
        let err = GradeOrder::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn duplicate_grade_rejected() {
        let err = GradeOrder::new(vec![
            "Manager".to_string(),
            "Specialist".to_string(),
            "Manager".to_string(),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate grade 'Manager'"));
    }

    #[test]
    fn blank_name_rejected() {
        let err = GradeOrder::new(vec!["Manager".to_string(), "  ".to_string()]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn serde_roundtrip_as_plain_list() {
        let order = order(&["Director", "Specialist"]);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"["Director","Specialist"]"#);
        let parsed: GradeOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn serde_rejects_invalid_order() {
        let result: Result<GradeOrder, _> = serde_json::from_str(r#"["A","A"]"#);
        assert!(result.is_err());
    }
}
