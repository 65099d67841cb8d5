//! Display-name heuristics for Conda interpreters.
//!
//! `conda info --json` is inconsistent across releases: older versions only
//! expose a `sys.version` banner, newer ones split the same facts into
//! `conda_version`, `python_version` and `platform`. [`display_name`] builds a
//! label from whichever subset is present.

use crate::info::CondaInfo;
use crate::interpreter::InterpreterInfo;

/// Vendor name shown for every Conda interpreter
pub const CONDA_DISPLAY_NAME: &str = "Anaconda";

/// Vendor tag stored on every record this crate produces
pub const CONDA_COMPANY_NAME: &str = "Continuum Analytics, Inc.";

const BITNESS_64_MARKERS: [&str; 3] = ["64", "x86", "x86_64"];
const BITNESS_32_MARKERS: [&str; 3] = ["32", "i686", "i386"];

/// Base display name for the installation described by `info`.
///
/// Produces e.g. `Anaconda 4.3.21 (64 bit, 3.6.1)`. Falls back to the
/// `sys.version` banner when no structured field is available.
pub fn display_name(info: &CondaInfo) -> String {
    let python_version = display_version(&info.python_version);
    let bitness = bitness_display_name(&info.platform);
    let bitness_and_version = [bitness.as_str(), python_version.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if info.conda_version.is_empty() && python_version.is_empty() && bitness_and_version.is_empty()
    {
        return display_name_from_sys_version(&info.sys_version);
    }

    let bracketed = if bitness_and_version.is_empty() {
        String::new()
    } else {
        format!("({bitness_and_version})")
    };

    [CONDA_DISPLAY_NAME, info.conda_version.as_str(), bracketed.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Display name for a named environment: `"<base> (<env dir name>)"`.
pub fn environment_display_name(base: &str, env_name: &str) -> String {
    format!("{base} ({env_name})")
}

/// Truncate a Python version to at most three numeric segments.
///
/// `3.6.1.final.0` → `3.6.1`, `3.6.1.2` → `3.6.1`. Segments that mix
/// digits and letters are dropped, so `3.7.0rc1` → `3.7`.
pub fn display_version(python_version: &str) -> String {
    python_version
        .split('.')
        .filter(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()))
        .take(3)
        .collect::<Vec<_>>()
        .join(".")
}

/// Map a Conda platform string (`linux-64`, `win-32`) to a bitness label.
///
/// Unrecognised platforms pass through unchanged.
pub fn bitness_display_name(platform: &str) -> String {
    if BITNESS_64_MARKERS.iter().any(|m| platform.contains(m)) {
        "64 bit".to_string()
    } else if BITNESS_32_MARKERS.iter().any(|m| platform.contains(m)) {
        "32 bit".to_string()
    } else {
        platform.to_string()
    }
}

/// Extract the distribution label from a `sys.version` banner.
///
/// `3.6.1 |Anaconda 4.4.0 (64-bit)| (default, ...)` → `Anaconda 4.4.0 (64-bit)`.
pub fn display_name_from_sys_version(sys_version: &str) -> String {
    let segments: Vec<&str> = sys_version.split('|').map(str::trim).collect();
    match segments.get(1) {
        Some(label) if label.contains("conda") => (*label).to_string(),
        _ => CONDA_DISPLAY_NAME.to_string(),
    }
}

/// Whether an interpreter reported by a lookup provider belongs to Conda.
pub fn is_conda_environment(interpreter: &InterpreterInfo) -> bool {
    let display = interpreter
        .display_name
        .as_deref()
        .unwrap_or_default()
        .to_uppercase();
    let company = interpreter
        .company_display_name
        .as_deref()
        .unwrap_or_default()
        .to_uppercase();
    display.contains("ANACONDA") || company.contains("CONTINUUM")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.6.1.2", "3.6.1")]
    #[case("3.6.1.final.0", "3.6.1")]
    #[case("3.6", "3.6")]
    #[case("3.7.0rc1", "3.7")]
    #[case("", "")]
    fn test_display_version(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(display_version(input), expected);
    }

    #[rstest]
    #[case("linux-64", "64 bit")]
    #[case("win-64", "64 bit")]
    #[case("osx-32", "32 bit")]
    #[case("linux-i686", "32 bit")]
    #[case("noarch", "noarch")]
    #[case("", "")]
    fn test_bitness_display_name(#[case] platform: &str, #[case] expected: &str) {
        assert_eq!(bitness_display_name(platform), expected);
    }

    #[rstest]
    #[case(
        "3.6.1 |Anaconda 4.4.0 (64-bit)| (default, May 11 2017, 13:25:24) [MSC v.1900 64 bit (AMD64)]",
        "Anaconda 4.4.0 (64-bit)"
    )]
    #[case(
        "3.6.2 |Anaconda, Inc.| (default, Sep 21 2017, 18:29:43)",
        "Anaconda, Inc."
    )]
    #[case("3.6.1 |Continuum Analytics, Inc.| (default)", "Anaconda")]
    #[case("3.6.1 (default, May 11 2017)", "Anaconda")]
    #[case("", "Anaconda")]
    fn test_display_name_from_sys_version(#[case] sys_version: &str, #[case] expected: &str) {
        assert_eq!(display_name_from_sys_version(sys_version), expected);
    }

    #[test]
    fn test_display_name_structured_fields() {
        let info = CondaInfo {
            conda_version: "4.3.21".to_string(),
            python_version: "3.6.1.final.0".to_string(),
            platform: "linux-64".to_string(),
            ..Default::default()
        };
        assert_eq!(display_name(&info), "Anaconda 4.3.21 (64 bit, 3.6.1)");
    }

    #[test]
    fn test_display_name_conda_version_only() {
        let info = CondaInfo {
            conda_version: "4.3.21".to_string(),
            ..Default::default()
        };
        assert_eq!(display_name(&info), "Anaconda 4.3.21");
    }

    #[test]
    fn test_display_name_platform_passthrough() {
        let info = CondaInfo {
            platform: "noarch".to_string(),
            ..Default::default()
        };
        assert_eq!(display_name(&info), "Anaconda (noarch)");
    }

    #[test]
    fn test_display_name_falls_back_to_sys_version() {
        let info = CondaInfo {
            sys_version: "3.6.1 |Anaconda 4.4.0 (64-bit)| (default, ...)".to_string(),
            ..Default::default()
        };
        assert_eq!(display_name(&info), "Anaconda 4.4.0 (64-bit)");
    }

    #[test]
    fn test_display_name_empty_info() {
        assert_eq!(display_name(&CondaInfo::default()), CONDA_DISPLAY_NAME);
    }

    #[test]
    fn test_environment_display_name() {
        assert_eq!(environment_display_name("Anaconda", "myenv"), "Anaconda (myenv)");
    }

    #[rstest]
    #[case(Some("Anaconda 4.4.0 (64-bit)"), None, true)]
    #[case(Some("anaconda"), None, true)]
    #[case(None, Some("Continuum Analytics, Inc."), true)]
    #[case(Some("Python 3.11 (64-bit)"), Some("Python Software Foundation"), false)]
    #[case(None, None, false)]
    fn test_is_conda_environment(
        #[case] display: Option<&str>,
        #[case] company: Option<&str>,
        #[case] expected: bool,
    ) {
        let mut info = InterpreterInfo::new("/usr/bin/python");
        info.display_name = display.map(String::from);
        info.company_display_name = company.map(String::from);
        assert_eq!(is_conda_environment(&info), expected);
    }
}
