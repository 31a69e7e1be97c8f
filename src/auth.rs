//! Credential verification
//!
//! Login handlers only see [`CredentialVerifier`]; the configured
//! plaintext pairs are one implementation of it.

use crate::config::AuthConfig;

/// Which panel a login request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realm {
    Admin,
    Employee,
}

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, realm: Realm, username: &str, password: &str) -> bool;
}

/// Username/password pairs taken from the `[auth]` config section
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    admin: (String, String),
    employee: (String, String),
}

impl StaticCredentials {
    pub fn from_config(auth: &AuthConfig) -> Self {
        Self {
            admin: (auth.admin_username.clone(), auth.admin_password.clone()),
            employee: (
                auth.employee_username.clone(),
                auth.employee_password.clone(),
            ),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, realm: Realm, username: &str, password: &str) -> bool {
        let (expected_user, expected_pass) = match realm {
            Realm::Admin => &self.admin,
            Realm::Employee => &self.employee,
        };
        username == expected_user && password == expected_pass
    }
}
