use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Ordered list of supported model identifiers
///
/// Built once at startup and shared read-only; clones share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    models: Arc<[String]>,
}

impl ModelCatalog {
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: models.into_iter().map(Into::into).collect(),
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }
}

impl Serialize for ModelCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Listing<'a> {
            models: &'a [String],
        }

        Listing { models: &self.models }.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_models_object() {
        let catalog = ModelCatalog::new(["gemini-2.5-flash", "gemini-2.5-pro"]);
        assert_eq!(
            serde_json::to_value(&catalog).unwrap(),
            serde_json::json!({"models": ["gemini-2.5-flash", "gemini-2.5-pro"]})
        );
    }

    #[test]
    fn preserves_order() {
        let catalog = ModelCatalog::new(["b", "a", "c"]);
        assert_eq!(catalog.models(), ["b", "a", "c"]);
    }
}
