use std::io::BufRead;

use anyhow::{Result, bail};
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;

/// Sha256 hex digest, as stored in the config's credential table.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compare a username/password pair against the credential table.
pub fn verify(auth: &AuthConfig, username: &str, password: &str) -> bool {
    auth.users
        .get(username)
        .is_some_and(|stored| stored.eq_ignore_ascii_case(&password_digest(password)))
}

/// Gate in front of the session store: when auth is enabled, consume a
/// username line and a password line from `input` before any run state
/// exists. Disabled auth is a no-op.
pub fn gate(auth: &AuthConfig, input: &mut impl BufRead) -> Result<()> {
    if !auth.enabled {
        return Ok(());
    }

    let mut username = String::new();
    input.read_line(&mut username)?;
    let mut password = String::new();
    input.read_line(&mut password)?;

    if verify(auth, username.trim(), password.trim()) {
        Ok(())
    } else {
        bail!("authentication failed for user '{}'", username.trim());
    }
}
