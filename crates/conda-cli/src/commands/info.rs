//! Info command

use colored::Colorize;
use conda_discovery::display::display_name;
use conda_discovery::{CondaEnvService, CondaInfo};
use tracing::debug;

use crate::error::Result;

/// Print a summary of `conda info --json`
///
/// Output that cannot be parsed gets the same notice as no output at all.
pub async fn run_info(service: &CondaEnvService, json: bool) -> Result<()> {
    let conda = service.conda_file().await;
    let info = match service.fetch_info(&conda).await {
        Ok(info) => info,
        Err(e) => {
            debug!(conda = %conda.display(), error = %e, "Cannot read conda info");
            None
        }
    };

    let Some(info) = info else {
        println!(
            "{} {} printed nothing usable.",
            "No Conda information:".yellow(),
            conda.display()
        );
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for line in summary(&info) {
            println!("{line}");
        }
    }

    Ok(())
}

fn summary(info: &CondaInfo) -> Vec<String> {
    let or_unknown = |s: &str| {
        if s.is_empty() {
            "unknown".to_string()
        } else {
            s.to_string()
        }
    };

    let mut lines = vec![
        format!("{:<16} {}", "Name:", display_name(info)),
        format!("{:<16} {}", "Conda version:", or_unknown(&info.conda_version)),
        format!("{:<16} {}", "Python version:", or_unknown(&info.python_version)),
        format!("{:<16} {}", "Platform:", or_unknown(&info.platform)),
        format!("{:<16} {}", "Root prefix:", or_unknown(&info.default_prefix)),
        "Environments:".to_string(),
    ];
    if info.envs.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(info.envs.iter().map(|env| format!("  {env}")));
    lines
}
