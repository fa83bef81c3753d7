use crate::error::SetupError;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Checks that `path` is an existing directory the current user can write to.
///
/// Runs synchronously on the caller's thread; it never writes to `path`.
pub fn verify_destination(path: &Path) -> Result<(), SetupError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SetupError::DestinationMissing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(SetupError::DestinationUnreadable {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(SetupError::DestinationNotDirectory(path.to_path_buf()));
    }

    match can_write(path, &metadata) {
        Ok(true) => Ok(()),
        Ok(false) => Err(SetupError::DestinationReadOnly(path.to_path_buf())),
        Err(e) => Err(SetupError::DestinationUnreadable {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Asks the kernel whether the effective user may write to `path`.
#[cfg(unix)]
fn can_write(path: &Path, _metadata: &std::fs::Metadata) -> io::Result<bool> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e))?;

    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    let rc = unsafe {
        libc::faccessat(libc::AT_FDCWD, c_path.as_ptr(), libc::W_OK, libc::AT_EACCESS)
    };
    if rc == 0 {
        return Ok(true);
    }

    let err = io::Error::last_os_error();
    match err.raw_os_error() {
        Some(libc::EACCES) | Some(libc::EPERM) | Some(libc::EROFS) => Ok(false),
        _ => Err(err),
    }
}

#[cfg(not(unix))]
fn can_write(_path: &Path, metadata: &std::fs::Metadata) -> io::Result<bool> {
    Ok(!metadata.permissions().readonly())
}

/// Whether the process runs with root privileges, which bypass mode bits.
#[cfg(unix)]
pub fn is_privileged() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}
