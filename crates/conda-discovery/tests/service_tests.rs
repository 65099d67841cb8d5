//! End-to-end tests for CondaEnvService with fake collaborators

use std::path::{Path, PathBuf};
use std::sync::Arc;

use conda_discovery::{
    CondaEnvService, DiscoveryConfig, InterpreterInfo, InterpreterLookup, Platform, StaticLookup,
};
use conda_test_utils::{CondaTree, FakeFileSystem, FakeProcessRunner};
use pretty_assertions::assert_eq;

const INFO: &str = r#"{
    "conda_version": "4.3.21",
    "default_prefix": "/opt/conda",
    "envs": ["/opt/conda/envs/foo"],
    "platform": "linux-64",
    "python_version": "3.6.1.final.0"
}"#;

fn config() -> DiscoveryConfig {
    DiscoveryConfig {
        platform: Some(Platform::Unix),
        ..Default::default()
    }
}

fn python(root: &str) -> PathBuf {
    Platform::Unix.python_path(Path::new(root))
}

#[tokio::test]
async fn test_get_interpreters_uses_located_binary() {
    let runner = Arc::new(FakeProcessRunner::with_stdout(INFO));
    let fs = Arc::new(FakeFileSystem::with_paths([
        PathBuf::from("/opt/conda/bin/conda"),
        python("/opt/conda"),
        python("/opt/conda/envs/foo"),
    ]));
    let lookup: Arc<dyn InterpreterLookup> = Arc::new(StaticLookup::new(vec![
        InterpreterInfo::new("/opt/conda/bin/python")
            .with_display_name("Anaconda 4.4.0 (64-bit)")
            .with_version("3.6.1"),
    ]));

    let service = CondaEnvService::with_collaborators(&config(), runner.clone(), fs, Some(lookup));
    let records = service.get_interpreters().await;

    assert_eq!(runner.calls()[0].0, PathBuf::from("/opt/conda/bin/conda"));
    let names: Vec<&str> = records.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Anaconda 4.3.21 (64 bit, 3.6.1) (foo)",
            "Anaconda 4.3.21 (64 bit, 3.6.1)"
        ]
    );
}

#[tokio::test]
async fn test_get_interpreters_without_conda_is_empty() {
    let service = CondaEnvService::with_collaborators(
        &config(),
        Arc::new(FakeProcessRunner::not_found()),
        Arc::new(FakeFileSystem::new()),
        None,
    );

    assert!(service.get_interpreters().await.is_empty());
    assert_eq!(service.conda_file().await, PathBuf::from("conda"));
}

#[tokio::test]
async fn test_fetch_info_exposes_descriptor() {
    let service = CondaEnvService::with_collaborators(
        &config(),
        Arc::new(FakeProcessRunner::with_stdout(INFO)),
        Arc::new(FakeFileSystem::new()),
        None,
    );

    let conda = service.conda_file().await;
    let info = service.fetch_info(&conda).await.unwrap().unwrap();
    assert_eq!(info.default_prefix, "/opt/conda");
    assert_eq!(info.envs, vec!["/opt/conda/envs/foo".to_string()]);
}

#[tokio::test]
async fn test_service_from_config_with_missing_conda_path() {
    let config = config().with_conda_path("/definitely/not/a/real/conda");
    let service = CondaEnvService::new(&config);

    assert_eq!(
        service.conda_file().await,
        PathBuf::from("/definitely/not/a/real/conda")
    );
    assert!(service.get_interpreters().await.is_empty());
}

#[tokio::test]
async fn test_service_from_config_uses_configured_interpreters() {
    let tree = CondaTree::new();
    let launcher = tree.install_launcher();
    let config = DiscoveryConfig {
        interpreters: vec![
            InterpreterInfo::new(tree.python_path(tree.root()))
                .with_display_name("Anaconda 4.4.0 (64-bit)")
                .with_version("3.6.1"),
        ],
        ..Default::default()
    };

    let service = CondaEnvService::new(&config);

    assert_eq!(service.conda_file().await, launcher);
}

#[tokio::test]
async fn test_service_from_config_without_interpreters_uses_fallback() {
    let service = CondaEnvService::new(&DiscoveryConfig::default());
    assert_eq!(service.conda_file().await, PathBuf::from("conda"));
}
