use fl_config::FieldlineConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FieldlineConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FieldlineConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = FieldlineConfig::default();

    let mut warnings = Vec::new();

    if !config.collector.is_configured() {
        if has_single_underscore_key(&env_keys, "FIELDLINE_COLLECTOR") {
            warnings.push(
                "Collector config appears default while FIELDLINE_COLLECTOR* env vars exist. Use double underscores (example: FIELDLINE_COLLECTOR__USER_ID)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Collector identity is not configured; entries will carry empty user_id/user_name. Set collector.user_id and collector.user_name."
                    .to_string(),
            );
        }
    }

    if (config.geofence.default_radius_m - defaults.geofence.default_radius_m).abs() < f64::EPSILON
        && has_single_underscore_key(&env_keys, "FIELDLINE_GEOFENCE")
    {
        warnings.push(
            "Geofence config appears default while FIELDLINE_GEOFENCE* env vars exist. Use double underscores (example: FIELDLINE_GEOFENCE__DEFAULT_RADIUS_M)."
                .to_string(),
        );
    }

    if config.entry.min_description_len == defaults.entry.min_description_len
        && has_single_underscore_key(&env_keys, "FIELDLINE_ENTRY")
    {
        warnings.push(
            "Entry config appears default while FIELDLINE_ENTRY* env vars exist. Use double underscores (example: FIELDLINE_ENTRY__MIN_DESCRIPTION_LEN)."
                .to_string(),
        );
    }

    if config.catalog.path == defaults.catalog.path
        && has_single_underscore_key(&env_keys, "FIELDLINE_CATALOG")
    {
        warnings.push(
            "Catalog config appears default while FIELDLINE_CATALOG* env vars exist. Use double underscores (example: FIELDLINE_CATALOG__PATH)."
                .to_string(),
        );
    }

    if config.export.dir == defaults.export.dir
        && config.export.file_prefix == defaults.export.file_prefix
        && has_single_underscore_key(&env_keys, "FIELDLINE_EXPORT")
    {
        warnings.push(
            "Export config appears default while FIELDLINE_EXPORT* env vars exist. Use double underscores (example: FIELDLINE_EXPORT__DIR)."
                .to_string(),
        );
    }

    warnings
}

/// A key under `prefix` that uses a single underscore where `__` was meant.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use fl_config::FieldlineConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_env_keys() {
        let config = FieldlineConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("FIELDLINE_COLLECTOR_USER_ID".to_string(), "T-001".to_string()),
                ("FIELDLINE_GEOFENCE_DEFAULT_RADIUS_M".to_string(), "30".to_string()),
                ("FIELDLINE_ENTRY_MIN_DESCRIPTION_LEN".to_string(), "5".to_string()),
                ("FIELDLINE_CATALOG_PATH".to_string(), "m.toml".to_string()),
                ("FIELDLINE_EXPORT_DIR".to_string(), "out".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 5);
        assert!(warnings[0].contains("FIELDLINE_COLLECTOR__USER_ID"));
    }

    #[test]
    fn double_underscore_keys_do_not_warn() {
        let config = FieldlineConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("FIELDLINE_GEOFENCE__DEFAULT_RADIUS_M".to_string(), "20".to_string())],
        );

        // Only the missing collector identity is reported.
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not configured"));
    }

    #[test]
    fn configured_collector_is_quiet() {
        let mut config = FieldlineConfig::default();
        config.collector.user_id = "T-001".into();
        config.collector.user_name = "Field Tester".into();

        assert!(collect_unconfigured_warnings(&config, Vec::new()).is_empty());
    }
}
