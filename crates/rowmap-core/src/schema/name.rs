use heck::ToSnakeCase;

/// A model name and the words it splits into.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    /// The name as declared.
    pub ident: String,

    /// Lowercase words, `UserProfile` -> `["user", "profile"]`
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self {
            ident: src.to_string(),
            parts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.ident
    }

    /// Default table name.
    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}
