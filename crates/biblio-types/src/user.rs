use serde::{Deserialize, Serialize};

use crate::Role;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub adresse: String,
    pub telephone: String,
    pub role: Role,
    pub date_inscription: Option<String>,
}

/// Partial update for `PUT /api/users/:id`; absent fields are not sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mot_de_passe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserUpdate {
    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_only_update_sends_a_single_field() {
        let body = serde_json::to_string(&UserUpdate::role(Role::Admin)).unwrap();
        assert_eq!(body, r#"{"role":"ADMIN"}"#);
    }
}
