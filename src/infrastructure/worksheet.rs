//! Worksheet persistence
//!
//! The working rate input model, the one draft being edited between
//! invocations, lives in a small JSON file next to the scenario
//! store. It is plain caller-side state, not a scenario: nothing in it
//! is versioned or shared until it is saved as a draft.

use std::fs;
use std::path::Path;

use crate::domain::entities::RateInputModel;
use crate::error::{CompaError, CompaResult};

/// Load the working model from `path`.
pub fn load_worksheet(path: &Path) -> CompaResult<RateInputModel> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompaError::validation(format!(
                "no worksheet at {}; run `compa init` first",
                path.display()
            ))
        } else {
            CompaError::Io(e)
        }
    })?;
    let model = serde_json::from_str(&content)?;
    Ok(model)
}

/// Write the working model to `path`, creating parent directories.
pub fn save_worksheet(path: &Path, model: &RateInputModel) -> CompaResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(model)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GradeOrder;
    use tempfile::tempdir;

    fn model() -> RateInputModel {
        let order = GradeOrder::new(vec!["Manager".to_string(), "Specialist".to_string()]).unwrap();
        let mut model = RateInputModel::new(order);
        model.set_base_value(Some(1000.0)).unwrap();
        model
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".compa").join("worksheet.json");

        save_worksheet(&path, &model()).unwrap();
        let loaded = load_worksheet(&path).unwrap();
        assert_eq!(loaded, model());
    }

    #[test]
    fn missing_worksheet_names_the_fix() {
        let dir = tempdir().unwrap();
        let err = load_worksheet(&dir.path().join("worksheet.json")).unwrap_err();
        assert!(err.to_string().contains("compa init"));
    }
}
