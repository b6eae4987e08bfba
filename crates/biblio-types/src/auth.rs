use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// The authenticated identity held by the client.
///
/// A session is always complete: the backend returns every field on a
/// successful login or registration, and the client replaces it wholesale.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn from_auth(response: AuthResponse) -> Self {
        Self {
            id: response.user_id,
            nom: response.nom,
            email: response.email,
            role: response.role,
            token: response.token,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }
}

/// Body returned by `/api/users/login` and `/api/users/register`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default = "bearer_type")]
    pub token_type: String,
    pub user_id: i64,
    pub email: String,
    pub nom: String,
    pub role: Role,
}

fn bearer_type() -> String {
    "Bearer".into()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub mot_de_passe: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub nom: String,
    pub email: String,
    pub adresse: String,
    pub telephone: String,
    pub mot_de_passe: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_maps_to_session() {
        let raw = r#"{"token":"abc","type":"Bearer","userId":7,"email":"a@b.ma","nom":"Amal","role":"ADMIN"}"#;
        let response: AuthResponse = serde_json::from_str(raw).unwrap();
        let session = Session::from_auth(response);

        assert_eq!(session.id, 7);
        assert_eq!(session.token, "abc");
        assert!(session.is_admin());
    }

    #[test]
    fn role_uses_backend_spelling() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
        assert_eq!(serde_json::from_str::<Role>(r#""USER""#).unwrap(), Role::User);
        assert!(serde_json::from_str::<Role>(r#""ROOT""#).is_err());
    }

    #[test]
    fn login_request_uses_camel_case() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.ma".into(),
            mot_de_passe: "secret".into(),
        })
        .unwrap();
        assert_eq!(body["motDePasse"], "secret");
    }
}
