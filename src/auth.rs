use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::{LedgerpadError, Result};

// Fixed classroom credential set, stored as sha256 digests of the
// passwords handed out with the exercise sheets. Real authentication is an
// explicit non-goal; the gate only keeps student workspaces apart.
const CREDENTIALS: &[(&str, &str)] = &[
    ("erblin.tolaj", "4555dadd624a7fe5e2a29780e59b3a26c3eb60dfa70932a1b3cd82ada3313d52"),
    ("melvin.haueter", "f127d9de67fd35b6af7e2736135b9ee8359a990e56d6fabe5573cffea8d1401b"),
    ("michel.glaubauf", "c0215a165cc797cf4bf94fababee3b7d0267a1dc8a1755d8635a82e353a41402"),
];

pub fn known_user(username: &str) -> bool {
    CREDENTIALS.iter().any(|(user, _)| *user == username)
}

/// Check a password against the fixed credential table. The password buffer
/// is wiped regardless of outcome.
pub fn verify(username: &str, password: &mut String) -> Result<()> {
    let expected = CREDENTIALS
        .iter()
        .find(|(user, _)| *user == username)
        .map(|(_, digest)| *digest);

    let digest = hex::encode(Sha256::digest(password.as_bytes()));
    password.zeroize();

    match expected {
        Some(want) if want == digest => Ok(()),
        Some(_) => Err(LedgerpadError::InvalidInput("invalid password".to_string())),
        None => Err(LedgerpadError::InvalidInput(format!(
            "unknown username '{username}' — this account is not allowed"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_users() {
        assert!(known_user("erblin.tolaj"));
        assert!(known_user("melvin.haueter"));
        assert!(!known_user("somebody.else"));
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let mut pw = "wms_uwi_erblin".to_string();
        assert!(verify("erblin.tolaj", &mut pw).is_ok());
        assert!(pw.is_empty(), "password buffer should be wiped");
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let mut pw = "nope".to_string();
        let err = verify("erblin.tolaj", &mut pw).unwrap_err();
        assert!(err.to_string().contains("invalid password"));
        assert!(pw.is_empty());
    }

    #[test]
    fn test_verify_rejects_unknown_user() {
        let mut pw = "wms_uwi_erblin".to_string();
        let err = verify("nobody", &mut pw).unwrap_err();
        assert!(err.to_string().contains("unknown username"));
    }
}
