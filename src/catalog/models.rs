use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(id: i64, name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
