use figment::Jail;
use granary::config::Config;
use std::path::PathBuf;

#[test]
fn extracts_required_settings_and_applies_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("DB_HOST", "db.internal");
        jail.set_env("DB_USER", "etl");
        jail.set_env("DB_PASSWORD", "secret");
        jail.set_env("DB_NAME", "warehouse");

        let cfg = Config::from_env().expect("extraction failed with all required vars set");

        assert_eq!(cfg.db_host, "db.internal");
        assert_eq!(cfg.db_user, "etl");
        assert_eq!(cfg.db_password, "secret");
        assert_eq!(cfg.db_name, "warehouse");

        assert_eq!(cfg.db_port, 3306);
        assert_eq!(cfg.data_dir, PathBuf::from("./data"));
        assert_eq!(cfg.table_name, "sales");
        assert_eq!(cfg.chunk_size, 1000);
        assert_eq!(cfg.log_dir, PathBuf::from("."));
        assert_eq!(cfg.loglevel, "info");
        assert!(!cfg.exclude_validation);
        assert!(!cfg.only_validation);

        Ok(())
    });
}

#[test]
fn environment_overrides_replace_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("DB_HOST", "db.internal");
        jail.set_env("DB_USER", "etl");
        jail.set_env("DB_PASSWORD", "secret");
        jail.set_env("DB_NAME", "warehouse");
        jail.set_env("DB_PORT", "3307");
        jail.set_env("DATA_DIR", "./incoming");
        jail.set_env("TABLE_NAME", "sales_stage");
        jail.set_env("CHUNK_SIZE", "250");
        jail.set_env("LOG_DIR", "./logs");
        jail.set_env("LOGLEVEL", "debug");
        jail.set_env("EXCLUDE_VALIDATION", "true");

        let cfg = Config::from_env().expect("extraction failed with overrides set");

        assert_eq!(cfg.db_port, 3307);
        assert_eq!(cfg.data_dir, PathBuf::from("./incoming"));
        assert_eq!(cfg.table_name, "sales_stage");
        assert_eq!(cfg.chunk_size, 250);
        assert_eq!(cfg.log_dir, PathBuf::from("./logs"));
        assert_eq!(cfg.loglevel, "debug");
        assert!(cfg.exclude_validation);
        assert!(!cfg.only_validation);

        Ok(())
    });
}

#[test]
fn numeric_looking_credentials_stay_strings() {
    Jail::expect_with(|jail| {
        jail.set_env("DB_HOST", "10.0.0.5");
        jail.set_env("DB_USER", "4242");
        jail.set_env("DB_PASSWORD", "123456");
        jail.set_env("DB_NAME", "warehouse");
        jail.set_env("ONLY_VALIDATION", "1");

        let cfg = Config::from_env().expect("extraction failed with numeric-looking values");

        assert_eq!(cfg.db_host, "10.0.0.5");
        assert_eq!(cfg.db_user, "4242");
        assert_eq!(cfg.db_password, "123456");
        assert!(cfg.only_validation);

        Ok(())
    });
}

#[test]
fn missing_database_variable_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("DB_HOST", "db.internal");
        jail.set_env("DB_USER", "etl");
        jail.set_env("DB_PASSWORD", "secret");

        let err = Config::from_env().expect_err("extraction succeeded without DB_NAME");
        assert!(
            err.to_string().contains("db_name"),
            "error does not name the missing variable: {err}"
        );

        Ok(())
    });
}
