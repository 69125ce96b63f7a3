use serde::{Deserialize, Serialize};

/// Raw auth form values as the page submits them. Missing fields default to
/// empty so validation, not deserialization, decides what is wrong.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Which variant of the auth form is being submitted. The name field is only
/// required for signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthFormMode {
    Login,
    Signup,
}

/// Field-scoped validation messages. An empty set means the form is valid.
/// Recomputed wholesale on every validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthFormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuthFormErrors {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        [&self.email, &self.password, &self.name]
            .iter()
            .filter(|field| field.is_some())
            .count()
    }
}
