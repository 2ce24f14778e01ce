use serde::Deserialize;

/// Posted by both the register and the login forms.
#[derive(Deserialize, Debug)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}
