use probeforge::config::{ConfigManager, ConfigSection, OptimizerConfig};
use probeforge::providers::EncodingMethod;
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("probeforge-{}-{}.toml", name, std::process::id()))
}

#[test]
fn test_defaults_load_without_file() {
    let manager = ConfigManager::load(None).unwrap();
    let config = manager.get();
    assert_eq!(config.optimizer.population_size, 20);
    assert_eq!(config.optimizer.mutation_rate, 0.1);
    assert_eq!(config.optimizer.crossover_rate, 0.7);
    assert_eq!(config.orchestrator.optimizer_generations, 3);
    assert_eq!(config.orchestrator.encoding_method, None);
}

#[test]
fn test_file_overrides_defaults() {
    let path = temp_config_path("layering");
    std::fs::write(
        &path,
        r#"
[optimizer]
population_size = 12
crossover_rate = 0.5

[orchestrator]
encoding_method = "rot13"
"#,
    )
    .unwrap();

    let manager = ConfigManager::load(Some(path.as_path()));
    std::fs::remove_file(&path).unwrap();

    let manager = manager.unwrap();
    assert_eq!(manager.get().optimizer.population_size, 12);
    assert_eq!(manager.get().optimizer.crossover_rate, 0.5);
    assert_eq!(manager.get().optimizer.mutation_rate, 0.1);
    assert_eq!(manager.get().orchestrator.encoding_method, Some(EncodingMethod::Rot13));
}

#[test]
fn test_invalid_file_rejected() {
    let path = temp_config_path("invalid");
    std::fs::write(&path, "[optimizer]\nmutation_rate = 4.0\n").unwrap();

    let result = ConfigManager::load(Some(path.as_path()));
    std::fs::remove_file(&path).unwrap();

    assert!(result.is_err());
}

#[test]
fn test_save_round_trips_through_load() {
    let path = temp_config_path("save");
    let mut manager = ConfigManager::new();
    manager
        .update(|c| {
            c.optimizer.generations = 9;
            c.orchestrator.seed = Some(11);
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.get(), manager.get());
}

#[test]
fn test_update_rejects_invalid_change() {
    let mut manager = ConfigManager::new();
    let result = manager.update(|c| c.optimizer.population_size = 0);
    assert!(result.is_err());
    assert_eq!(manager.get().optimizer.population_size, 20);
    assert_eq!(OptimizerConfig::section_name(), "optimizer");
}
