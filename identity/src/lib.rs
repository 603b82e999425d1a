//! Resolves the current account's human-readable name.
//!
//! The resolver reads the process's real uid, fetches the matching passwd
//! record, and reduces its GECOS field to the full name the way `finger(1)`
//! presents it. The native `getpwuid_r` path is tried first; when it reports
//! no entry at all (common under static linking, where NSS modules cannot be
//! loaded), the host's `getent(1)` answers instead.

use moonpaper_types::AuthorName;

#[cfg(unix)]
mod gecos;
#[cfg(unix)]
mod getent;
#[cfg(unix)]
mod passwd;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("account database lookup failed")]
    Lookup(#[from] std::io::Error),
    #[error("no passwd entry for uid {uid}")]
    NoSuchUser { uid: u32 },
    #[error("no full name recorded for login `{login}`")]
    NoFullName { login: String },
    #[error("`{utility}` exited with {status}")]
    UtilityFailed {
        utility: &'static str,
        status: std::process::ExitStatus,
    },
    #[error("malformed passwd record for uid {uid}")]
    MalformedRecord { uid: u32 },
    #[error("user identity is only resolvable on unix hosts")]
    Unsupported,
}

/// Resolves the invoking user's full name from the account database.
///
/// # Errors
///
/// Fails when the uid has no passwd entry, when the entry records no full
/// name, or when the lookup itself cannot be performed.
#[cfg(unix)]
pub fn resolve() -> Result<AuthorName, IdentityError> {
    // SAFETY: getuid never fails and touches no memory.
    let uid = unsafe { libc::getuid() };
    let user = match passwd::lookup_uid(uid)? {
        Some(user) => user,
        None => {
            tracing::debug!(uid, "no native passwd entry, querying getent");
            getent::query(uid)?
        }
    };
    tracing::debug!(login = %user.login, "resolved passwd entry");
    let Some(name) = gecos::full_name(&user.gecos, &user.login) else {
        return Err(IdentityError::NoFullName { login: user.login });
    };
    AuthorName::new(name).map_err(|_| IdentityError::NoFullName { login: user.login })
}

#[cfg(not(unix))]
pub fn resolve() -> Result<AuthorName, IdentityError> {
    Err(IdentityError::Unsupported)
}
