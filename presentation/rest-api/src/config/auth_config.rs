use std::env;

use anyhow::Context;
use business::domain::shared::value_objects::{StoreAdmins, UserId};

/// Bearer token verification settings.
///
/// Environment variables:
/// - AUTH_CERTS_URL: JSON map `kid -> PEM certificate` of the identity provider (required)
/// - AUTH_ISSUER: expected `iss` claim (required)
/// - AUTH_AUDIENCE: expected `aud` claim (required)
/// - STORE_ADMINS: comma-separated user ids allowed to manage the catalog and payments
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub certs_url: String,
    pub issuer: String,
    pub audience: String,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            certs_url: env::var("AUTH_CERTS_URL").context("AUTH_CERTS_URL must be set")?,
            issuer: env::var("AUTH_ISSUER").context("AUTH_ISSUER must be set")?,
            audience: env::var("AUTH_AUDIENCE").context("AUTH_AUDIENCE must be set")?,
        })
    }
}

pub fn admins_from_env() -> StoreAdmins {
    parse_admins(&env::var("STORE_ADMINS").unwrap_or_default())
}

fn parse_admins(raw: &str) -> StoreAdmins {
    StoreAdmins::new(
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(UserId::new),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_comma_separated_admins() {
        let admins = parse_admins(" alice , bob,,");

        assert!(admins.contains(&UserId::new("alice")));
        assert!(admins.contains(&UserId::new("bob")));
        assert!(!admins.contains(&UserId::new("")));
    }

    #[test]
    fn should_have_no_admins_when_unset() {
        let admins = parse_admins("");

        assert!(!admins.contains(&UserId::new("anyone")));
    }
}
