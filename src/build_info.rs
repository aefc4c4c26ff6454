//! Build metadata
//!
//! `build.rs` exports a running build counter and a UTC compile time; both
//! are read here at compile time and surfaced in the startup banner and the
//! status endpoint.

use serde::Serialize;

pub const BUILD_NUMBER: u64 = match option_env!("MACROCALC_BUILD_NUMBER") {
    Some(raw) => match digits_to_u64(raw) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// UTC compile time, `"unknown"` when built without `build.rs`
pub const BUILD_TIMESTAMP: &str = match option_env!("MACROCALC_BUILD_TIMESTAMP") {
    Some(raw) => raw,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// `str::parse` is not const.
const fn digits_to_u64(raw: &str) -> Option<u64> {
    let digits = raw.as_bytes();
    if digits.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    let mut idx = 0;
    while idx < digits.len() {
        let d = digits[idx];
        if !d.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (d - b'0') as u64;
        idx += 1;
    }
    Some(value)
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// One-line identifier, e.g. `macrocalc 1.0.0 (build 12, 2026-10-18T09:00:00Z)`
    pub fn label(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Write the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("-----------------------------------------------");
    eprintln!("  {}", info.description);
    eprintln!("  {}", info.label());
    eprintln!("-----------------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_to_u64() {
        assert_eq!(digits_to_u64("42"), Some(42));
        assert_eq!(digits_to_u64("0"), Some(0));
        assert_eq!(digits_to_u64(""), None);
        assert_eq!(digits_to_u64("12a"), None);
    }

    #[test]
    fn test_label() {
        let info = BuildInfo {
            name: "macrocalc",
            version: "1.0.0",
            build_number: 12,
            build_timestamp: "2026-10-18T09:00:00Z",
            description: "",
        };
        assert_eq!(info.label(), "macrocalc 1.0.0 (build 12, 2026-10-18T09:00:00Z)");
        assert_eq!(BuildInfo::current().name, "macrocalc");
    }
}
