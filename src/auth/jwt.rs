use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::models::{Claims, TokenType};

/// Decodes and validates (signature, expiry) an HS256 token.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

/// Like [`verify_token`], but refresh tokens are refused.
pub fn verify_access_token(token: &str, secret: &str) -> Result<Claims, String> {
    let claims = verify_token(token, secret)?;
    if claims.token_type != TokenType::Access {
        return Err("Refresh tokens cannot be used for API access".to_string());
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::role::Role;
    use crate::test_support::{SECRET, token};

    #[test]
    fn access_tokens_verify() {
        let claims = verify_access_token(&token(Role::Hr, TokenType::Access), SECRET).unwrap();
        assert_eq!(claims.role, Role::Hr.id());
        assert_eq!(claims.sub, "tester");
    }

    #[test]
    fn refresh_tokens_and_bad_secrets_are_rejected() {
        let refresh = token(Role::Admin, TokenType::Refresh);
        assert!(verify_token(&refresh, SECRET).is_ok());
        assert!(verify_access_token(&refresh, SECRET).is_err());

        let access = token(Role::Admin, TokenType::Access);
        assert!(verify_access_token(&access, "other-secret").is_err());
        assert!(verify_access_token("not-a-jwt", SECRET).is_err());
    }
}
