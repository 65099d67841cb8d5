//! Locate command

use conda_discovery::CondaEnvService;

use crate::error::Result;

/// Print the conda binary discovery would run
pub async fn run_locate(service: &CondaEnvService) -> Result<()> {
    let conda = service.conda_file().await;
    println!("{}", conda.display());
    Ok(())
}
