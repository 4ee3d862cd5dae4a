#[cfg(test)]
mod tests {
    use dash::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_ADDRESS_BOOK_FILE, DEFAULT_TASK_LIST_FILE};
    use dash::libs::data_storage::DataStorage;
    use dash::storage::StorageManager;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home so tests never touch real data.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"task_list_file": "todo.json"}"#).unwrap();
        assert_eq!(config.task_list_file, "todo.json");
        assert_eq!(config.address_book_file, DEFAULT_ADDRESS_BOOK_FILE);
        assert!(config.load_sample_data);
    }

    // The environment is process-wide, so everything that depends on it runs in one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // Without a file, read() returns the defaults
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.task_list_file, DEFAULT_TASK_LIST_FILE);

        let config = Config {
            address_book_file: "people.json".to_string(),
            task_list_file: "todo.json".to_string(),
            load_sample_data: false,
        };
        config.save().unwrap();
        assert!(DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());
        assert_eq!(Config::read().unwrap(), config);

        // Storage follows the saved configuration
        let model = StorageManager::new().unwrap().load().unwrap();
        assert!(model.address_book().is_empty());
        assert!(model.task_list().is_empty());
    }
}
