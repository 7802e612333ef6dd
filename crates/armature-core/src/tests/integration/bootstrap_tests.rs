#![cfg(test)]

use std::error::Error as StdError;

use super::common::{Deployment, TYPES_JSON};
use crate::component::{ComponentDependency, DescriptorRegistry, InstantiationStrategy};
use crate::config::BootstrapConfig;
use crate::kernel::bootstrap::ComponentLoader;
use crate::kernel::constants::DEFAULT_HINT;
use crate::kernel::error::ErrorKind;

fn deployment() -> Deployment {
    let deployment = Deployment::new();
    deployment.add_library("core", &["app.ConsoleLogger", "app.DiskStore"]);
    deployment.add_library("extra", &["app.MemoryStore", "app.Indexer", "app.Utility"]);
    deployment.write("types.json", TYPES_JSON);
    deployment
}

#[test]
fn test_bootstrap_from_json_config() {
    let deployment = deployment();
    let config_path = deployment.write(
        "armature.json",
        r#"{ "search_path": ["lib/core", "lib/extra"], "type_tables": ["types.json"] }"#,
    );

    let config = BootstrapConfig::load(&config_path).unwrap();
    let loader = ComponentLoader::from_config(&config).unwrap();
    let mut registry = DescriptorRegistry::new();
    let report = loader.initialize(&mut registry).unwrap();

    assert_eq!(report.implementations, 5);
    assert_eq!(report.skipped, vec!["app.Utility"]);
    // ConsoleLogger: Logger; DiskStore: Store; MemoryStore: Store; Indexer: Service + Logger
    assert_eq!(report.descriptors, 5);
    assert_eq!(registry.len(), 5);

    let disk = registry.get("app.Store", "disk").expect("DiskStore registered");
    assert_eq!(disk.implementation(), "app.DiskStore");
    assert_eq!(disk.dependencies(), &[ComponentDependency::new("app.Logger", DEFAULT_HINT)]);

    let memory = registry.get("app.Store", "memory").expect("MemoryStore registered");
    assert_eq!(memory.instantiation_strategy(), InstantiationStrategy::PerLookup);

    let stores: Vec<&str> = registry
        .descriptors_for_role("app.Store")
        .iter()
        .map(|d| d.implementation())
        .collect();
    assert_eq!(stores, vec!["app.DiskStore", "app.MemoryStore"]);

    let indexer_service = registry.get("app.Service", "indexer").unwrap();
    let indexer_logger = registry.get("app.Logger", "indexer").unwrap();
    assert_eq!(indexer_service.dependencies(), indexer_logger.dependencies());
    assert_eq!(
        indexer_service.dependencies(),
        &[
            ComponentDependency::new("app.Store", "disk"),
            ComponentDependency::new("app.Store", "memory"),
            ComponentDependency::new("app.Logger", DEFAULT_HINT),
        ]
    );
    assert!(registry.descriptors_for_role("app.Lifecycle").is_empty());
}

#[cfg(feature = "toml-config")]
#[test]
fn test_bootstrap_from_toml_config_with_trimmed_lines() {
    let deployment = Deployment::new();
    deployment.add_library("core", &["# stores", "  app.MemoryStore  ", "", "app.ConsoleLogger"]);
    deployment.write("types.json", TYPES_JSON);
    let config_path = deployment.write(
        "armature.toml",
        "search_path = [\"lib/core\"]\ntype_tables = [\"types.json\"]\nline_policy = \"trimmed\"\ndefault_hint = \"primary\"\n",
    );

    let loader = ComponentLoader::from_config(&BootstrapConfig::load(&config_path).unwrap()).unwrap();
    let mut registry = DescriptorRegistry::new();
    let report = loader.initialize(&mut registry).unwrap();

    assert_eq!(report.implementations, 2);
    assert!(registry.get("app.Store", "memory").is_some());
    assert!(registry.get("app.Logger", "primary").is_some());
}

#[test]
fn test_verbatim_blank_line_aborts_bootstrap() {
    let deployment = Deployment::new();
    deployment.add_library("core", &["app.ConsoleLogger", "", "app.MemoryStore"]);
    deployment.write("types.json", TYPES_JSON);
    let config_path = deployment.write(
        "armature.json",
        r#"{ "search_path": ["lib/core"], "type_tables": ["types.json"] }"#,
    );

    let loader = ComponentLoader::from_config(&BootstrapConfig::load(&config_path).unwrap()).unwrap();
    let mut registry = DescriptorRegistry::new();
    let err = loader.initialize(&mut registry).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeLoad);
    assert!(err.source().is_some());
    assert!(registry.is_empty());
}
