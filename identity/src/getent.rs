//! Fallback lookup through the external `getent(1)` utility.
//!
//! A statically linked binary cannot consult NSS modules (LDAP, sssd, NIS)
//! from `getpwuid_r`, but the host's own getent can. The fallback runs only
//! when the native call reports no entry at all; lookup errors surface
//! directly instead of being retried here.

use std::process::{Command, Output};

use crate::IdentityError;
use crate::passwd::PasswdUser;

const GETENT: &str = "getent";

/// Exit status getent uses for "key not present in the database".
const GETENT_KEY_NOT_FOUND: i32 = 2;

pub(crate) fn query(uid: libc::uid_t) -> Result<PasswdUser, IdentityError> {
    let output = Command::new(GETENT)
        .arg("passwd")
        .arg(uid.to_string())
        .output()?;
    user_from_output(uid, &output)
}

fn user_from_output(uid: libc::uid_t, output: &Output) -> Result<PasswdUser, IdentityError> {
    if !output.status.success() {
        if output.status.code() == Some(GETENT_KEY_NOT_FOUND) {
            return Err(IdentityError::NoSuchUser { uid });
        }
        return Err(IdentityError::UtilityFailed {
            utility: GETENT,
            status: output.status,
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next().unwrap_or("");
    parse_passwd_line(line).ok_or(IdentityError::MalformedRecord { uid })
}

/// Parses one seven-field passwd line (`login:pw:uid:gid:gecos:home:shell`).
fn parse_passwd_line(line: &str) -> Option<PasswdUser> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() < 7 {
        return None;
    }
    Some(PasswdUser {
        login: fields[0].to_string(),
        gecos: fields[4].to_string(),
    })
}
