use serde::{Deserialize, Serialize};

/// One record of the people listing.
///
/// The upstream API leaves name parts `null` for some records, so every
/// field tolerates absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub elixirs: Vec<Elixir>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elixir {
    pub id: String,
    pub name: Option<String>,
}

impl Person {
    /// `"first last"`, trimmed when either part is missing.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}
