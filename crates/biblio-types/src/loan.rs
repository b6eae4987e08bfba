use serde::{Deserialize, Serialize};

/// Loan status as computed by the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    #[serde(rename = "ACTIF")]
    Active,
    #[serde(rename = "RETOURNE")]
    Returned,
    #[serde(rename = "EN_RETARD")]
    Overdue,
}

impl LoanStatus {
    /// Whether the book is still out of the library.
    pub fn is_open(&self) -> bool {
        matches!(self, LoanStatus::Active | LoanStatus::Overdue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "ACTIF",
            LoanStatus::Returned => "RETOURNE",
            LoanStatus::Overdue => "EN_RETARD",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub utilisateur_id: i64,
    pub livre_id: i64,
    #[serde(default)]
    pub date_emprunt: Option<String>,
    #[serde(default)]
    pub date_retour_prevue: Option<String>,
    #[serde(default)]
    pub date_retour_effective: Option<String>,
    pub statut: LoanStatus,
    #[serde(default)]
    pub date_creation: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub utilisateur_id: i64,
    pub livre_id: i64,
}
