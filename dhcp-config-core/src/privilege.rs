//! Protected-path classification for configuration writes.
//!
//! The core never escalates privileges itself. It only decides, before any
//! bytes touch the disk, whether a destination belongs to the operating
//! system's protected configuration area; callers route such writes through
//! an external elevated-write helper.

use std::path::Path;

#[cfg(unix)]
const UNIX_PROTECTED_PREFIXES: &[&str] = &["/etc/", "/usr/local/etc/", "/var/"];

/// Whether writing to `path` needs elevated privileges on this platform.
pub fn requires_elevation(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref().to_string_lossy();
    if path.is_empty() {
        return false;
    }
    requires_elevation_str(&path)
}

#[cfg(unix)]
fn requires_elevation_str(path: &str) -> bool {
    UNIX_PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

#[cfg(windows)]
fn requires_elevation_str(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    if let Some(program_data) = std::env::var_os("PROGRAMDATA") {
        let program_data = program_data.to_string_lossy().to_ascii_lowercase();
        if !program_data.is_empty() && lower.starts_with(&program_data) {
            return true;
        }
    }
    lower.starts_with(r"c:\program files") || lower.starts_with(r"c:\windows")
}

#[cfg(not(any(unix, windows)))]
fn requires_elevation_str(_path: &str) -> bool {
    false
}

#[cfg(all(test, unix))]
mod tests {
    use super::requires_elevation;

    #[test]
    fn system_config_areas_are_protected() {
        assert!(requires_elevation("/etc/simple-dhcpd/simple-dhcpd.conf"));
        assert!(requires_elevation("/usr/local/etc/simple-dhcpd/x.conf"));
        assert!(requires_elevation("/var/lib/simple-dhcpd/leases.json"));
    }

    #[test]
    fn user_paths_are_not_protected() {
        assert!(!requires_elevation("/home/user/dhcpd.json"));
        assert!(!requires_elevation("/tmp/scratch.conf"));
        assert!(!requires_elevation("relative/path.conf"));
        assert!(!requires_elevation(""));
    }

    #[test]
    fn prefix_match_requires_the_separator() {
        // `/etcetera` is not `/etc/`.
        assert!(!requires_elevation("/etcetera/x.conf"));
        assert!(!requires_elevation("/etc"));
    }
}
