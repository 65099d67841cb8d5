//! List command

use colored::Colorize;
use conda_discovery::{CondaEnvService, InterpreterRecord};

use crate::error::Result;

/// Run discovery and print the interpreters found
pub async fn run_list(service: &CondaEnvService, json: bool) -> Result<()> {
    let interpreters = service.get_interpreters().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&interpreters)?);
        return Ok(());
    }

    if interpreters.is_empty() {
        println!("{}", "No Conda interpreters found.".yellow());
        return Ok(());
    }

    println!("{}", "Conda Interpreters".bold());
    println!();
    for record in &interpreters {
        println!("{}", format_record(record));
    }
    println!();
    println!("{} {}", "Total:".dimmed(), interpreters.len());

    Ok(())
}

fn format_record(record: &InterpreterRecord) -> String {
    format!(
        "  {}\n    {}",
        record.display_name.green(),
        record.path.display().to_string().dimmed()
    )
}
