use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: i64,
    pub titre: String,
    pub auteur: String,
    pub categorie: String,
    pub isbn: String,
    pub date_creation: Option<String>,
    pub date_modification: Option<String>,
}

impl Book {
    /// Case-insensitive match on title, author or category.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.titre.to_lowercase().contains(&needle)
            || self.auteur.to_lowercase().contains(&needle)
            || self.categorie.to_lowercase().contains(&needle)
    }
}

/// Create/update payload for `/api/books`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct BookInput {
    pub titre: String,
    pub auteur: String,
    pub categorie: String,
    pub isbn: String,
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            titre: book.titre.clone(),
            auteur: book.auteur.clone(),
            categorie: book.categorie.clone(),
            isbn: book.isbn.clone(),
        }
    }
}

/// Criteria for `/api/books/search`. Empty fields are left out of the query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct BookSearch {
    pub titre: Option<String>,
    pub auteur: Option<String>,
    pub categorie: Option<String>,
}

impl BookSearch {
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("titre", self.titre.as_deref()),
            ("auteur", self.auteur.as_deref()),
            ("categorie", self.categorie.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}
