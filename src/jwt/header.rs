use serde::{Deserialize, Serialize};

/// Algorithm identifier for HMAC with SHA-256.
pub const DEFAULT_ALGORITHM: &str = "HS256";

/// Format marker carried in the `typ` header field.
pub const TOKEN_TYPE: &str = "JWT";

/// Token header. Serialized as `{"alg":..,"typ":..}` in that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    pub fn new(alg: impl Into<String>, typ: impl Into<String>) -> Self {
        Header {
            alg: alg.into(),
            typ: typ.into(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Header::new(DEFAULT_ALGORITHM, TOKEN_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        let header = Header::default();
        assert_eq!(header.alg, "HS256");
        assert_eq!(header.typ, "JWT");
    }

    #[test]
    fn test_field_order_is_fixed() {
        let json = serde_json::to_string(&Header::default()).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }
}
