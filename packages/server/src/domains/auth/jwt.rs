use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long an admin session lasts
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Claims carried by an admin token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin email
    pub sub: String,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    /// Unique per token
    pub jti: String,
}

impl Claims {
    fn issue(subject: &str, is_admin: bool, issuer: &str) -> Self {
        let issued_at = Utc::now();
        Self {
            sub: subject.to_string(),
            is_admin,
            exp: (issued_at + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
            iat: issued_at.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signs and checks HS256 admin tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: String) -> Self {
        let secret = secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer,
        }
    }

    pub fn create_token(&self, subject: &str, is_admin: bool) -> Result<String> {
        let claims = Claims::issue(subject, is_admin, &self.issuer);
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Claims of a well-signed, unexpired token from this issuer
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "gywan".to_string());

        let token = service.create_token("admin@gywan.org", true).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin@gywan.org");
        assert!(claims.is_admin);
        assert_eq!(claims.iss, "gywan");
    }

    #[test]
    fn test_invalid_token() {
        let service = JwtService::new("test_secret_key", "gywan".to_string());
        assert!(service.verify_token("invalid_token").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1", "gywan".to_string());
        let service2 = JwtService::new("secret2", "gywan".to_string());

        let token = service1.create_token("admin@gywan.org", true).unwrap();

        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer() {
        let service1 = JwtService::new("secret", "someone-else".to_string());
        let service2 = JwtService::new("secret", "gywan".to_string());

        let token = service1.create_token("admin@gywan.org", true).unwrap();

        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn test_expiry_is_24_hours() {
        let service = JwtService::new("test_secret_key", "gywan".to_string());
        let token = service.create_token("admin@gywan.org", false).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let expires_in = claims.exp - Utc::now().timestamp();
        assert!(expires_in > (TOKEN_LIFETIME_HOURS - 1) * 3600);
        assert!(expires_in <= TOKEN_LIFETIME_HOURS * 3600);
    }
}
