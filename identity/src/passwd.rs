//! Native account-database lookup through `getpwuid_r(3)`.

use std::ffi::CStr;
use std::io;

/// One account record, reduced to the fields the resolver consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PasswdUser {
    pub(crate) login: String,
    pub(crate) gecos: String,
}

/// Buffer size when sysconf offers no guidance.
const FALLBACK_BUF_LEN: usize = 1024;

/// Hard cap for the ERANGE retry loop.
const MAX_BUF_LEN: usize = 1 << 20;

/// Looks up a uid in the account database.
///
/// Returns `Ok(None)` when the database has no entry for the uid. That is
/// distinct from a lookup error: a missing entry is expected under static
/// linking or in minimal containers, and it is what engages the getent
/// fallback.
pub(crate) fn lookup_uid(uid: libc::uid_t) -> io::Result<Option<PasswdUser>> {
    let mut buf_len = suggested_buf_len();
    loop {
        let mut buf = vec![0_u8; buf_len];
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: pwd and result are valid for writes, and buf outlives the
        // record strings getpwuid_r makes pwd's fields point into.
        let errno = unsafe {
            libc::getpwuid_r(
                uid,
                &mut pwd,
                buf.as_mut_ptr().cast::<libc::c_char>(),
                buf.len(),
                &mut result,
            )
        };

        if errno == libc::ERANGE {
            // Record too large for the buffer; retry bigger, bounded.
            if buf_len >= MAX_BUF_LEN {
                return Err(io::Error::from_raw_os_error(libc::ERANGE));
            }
            buf_len *= 2;
            continue;
        }
        if errno != 0 {
            return Err(io::Error::from_raw_os_error(errno));
        }
        if result.is_null() {
            return Ok(None);
        }

        // SAFETY: result is non-null, so pwd is initialized and its string
        // fields point at NUL-terminated data inside buf, still alive here.
        let login = unsafe { string_field(pwd.pw_name) };
        let gecos = unsafe { string_field(pwd.pw_gecos) };
        return Ok(Some(PasswdUser { login, gecos }));
    }
}

/// # Safety
///
/// `ptr` must be null or point at a NUL-terminated string that outlives the
/// call.
unsafe fn string_field(ptr: *const libc::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null per the check above; NUL-terminated per contract.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

fn suggested_buf_len() -> usize {
    // SAFETY: sysconf reads a configuration constant; no memory involved.
    let len = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    usize::try_from(len)
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(FALLBACK_BUF_LEN)
}

#[cfg(test)]
mod tests {
    use super::lookup_uid;

    #[test]
    fn lookup_of_current_uid_does_not_error() {
        // Minimal hosts may have no entry for the running uid; Ok(None) is a
        // valid outcome there. Only an io error is wrong.
        // SAFETY: getuid cannot fail and touches no memory.
        let uid = unsafe { libc::getuid() };
        let looked_up = lookup_uid(uid).expect("account database lookup");
        if let Some(user) = looked_up {
            assert!(!user.login.is_empty());
        }
    }

    #[test]
    fn lookup_of_improbable_uid_does_not_error() {
        // 4294967294 is (uid_t)-2, the conventional hole below the sentinel.
        // Exercises the no-entry path on effectively every host.
        let _ = lookup_uid(4_294_967_294).expect("lookup must not error");
    }
}
