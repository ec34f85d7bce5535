//! Login shell: credential presence check, captcha, session marker.
//!
//! There is no authentication service behind this; any non-empty
//! username and password pass, exactly like the original console. What
//! the login buys is the captcha gate and a session marker recording
//! who is "logged in" on this machine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::captcha::Captcha;
use crate::store::PersistenceError;
use crate::utils::{now_iso, session_path};

/// Why a login attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginDenied {
    /// Username or password left empty.
    EmptyCredentials,
    /// Captcha answer did not match.
    BadCaptcha,
}

/// Session marker persisted in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub logged_in_at: String,
}

/// Presence-only credential check plus captcha verification.
pub fn validate_login(
    username: &str,
    password: &str,
    captcha: &Captcha,
    answer: &str,
) -> Result<(), LoginDenied> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(LoginDenied::EmptyCredentials);
    }
    if !captcha.check(answer) {
        return Err(LoginDenied::BadCaptcha);
    }
    Ok(())
}

/// Record a successful login.
pub fn write_session(data_dir: &Path, username: &str) -> Result<Session, PersistenceError> {
    fs::create_dir_all(data_dir)?;
    let session = Session {
        username: username.trim().to_string(),
        logged_in_at: now_iso(),
    };
    let content = serde_json::to_string_pretty(&session)?;
    fs::write(session_path(data_dir), content)?;
    Ok(session)
}

/// The current session, if any.
pub fn read_session(data_dir: &Path) -> Result<Option<Session>, PersistenceError> {
    let path = session_path(data_dir);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Drop the session marker. Missing marker is not an error.
pub fn clear_session(data_dir: &Path) -> Result<(), PersistenceError> {
    let path = session_path(data_dir);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_captcha() -> Captcha {
        // deterministic challenge for the checks below
        let mut rng = StdRng::seed_from_u64(1);
        Captcha::generate(&mut rng)
    }

    fn solve(captcha: &Captcha) -> String {
        for candidate in 0..=400_u32 {
            if captcha.check(&candidate.to_string()) {
                return candidate.to_string();
            }
        }
        unreachable!("captcha answers are bounded");
    }

    #[test]
    fn test_validate_requires_credentials() {
        let captcha = fixed_captcha();
        let answer = solve(&captcha);
        assert_eq!(
            validate_login("", "secret", &captcha, &answer),
            Err(LoginDenied::EmptyCredentials)
        );
        assert_eq!(
            validate_login("admin", "", &captcha, &answer),
            Err(LoginDenied::EmptyCredentials)
        );
    }

    #[test]
    fn test_validate_checks_captcha() {
        let captcha = fixed_captcha();
        assert_eq!(
            validate_login("admin", "secret", &captcha, "999999"),
            Err(LoginDenied::BadCaptcha)
        );
        let answer = solve(&captcha);
        assert_eq!(validate_login("admin", "secret", &captcha, &answer), Ok(()));
    }

    #[test]
    fn test_session_round_trip_and_logout() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_session(dir.path()).unwrap().is_none());

        let session = write_session(dir.path(), " admin ").unwrap();
        assert_eq!(session.username, "admin");

        let back = read_session(dir.path()).unwrap().unwrap();
        assert_eq!(back, session);

        clear_session(dir.path()).unwrap();
        clear_session(dir.path()).unwrap();
        assert!(read_session(dir.path()).unwrap().is_none());
    }
}
