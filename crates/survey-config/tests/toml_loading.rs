//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use survey_config::SurveyConfig;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_pin_color = "system_orange"

[journal]
enabled = false
file = "site.jsonl"

[calendar]
utc_offset_minutes = -300
"#,
        )?;

        let config: SurveyConfig = Figment::from(Serialized::defaults(SurveyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_pin_color, "system_orange");
        assert!(!config.journal.enabled);
        assert_eq!(config.journal.file, "site.jsonl");
        assert_eq!(config.calendar.utc_offset_minutes, Some(-300));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[journal]
file = "other.jsonl"
"#,
        )?;

        let config: SurveyConfig = Figment::from(Serialized::defaults(SurveyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.journal.enabled);
        assert_eq!(config.journal.file, "other.jsonl");
        assert_eq!(config.general.default_pin_color, "system_blue");
        Ok(())
    });
}

#[test]
fn project_config_is_read_from_state_dir() {
    Jail::expect_with(|jail| {
        jail.create_dir(".survey")?;
        jail.create_file(
            ".survey/config.toml",
            r#"
[general]
default_pin_color = "system_green"
"#,
        )?;

        let config = SurveyConfig::load_for(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_pin_color, "system_green");
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".survey")?;
        jail.create_file(
            ".survey/config.toml",
            r#"
[calendar]
utc_offset_minutes = "east"
"#,
        )?;

        assert!(SurveyConfig::load_for(jail.directory()).is_err());
        Ok(())
    });
}
