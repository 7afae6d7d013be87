use tally_config::TallyConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TallyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TallyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.airtable.is_configured() && has_env_prefix(&env_keys, "TALLY_AIRTABLE") {
        warnings.push(
            "Airtable config appears default while TALLY_AIRTABLE* env vars exist. Use double underscores (example: TALLY_AIRTABLE__API_KEY)."
                .to_string(),
        );
    }

    if config.roster.evaluators.is_empty() && has_env_prefix(&env_keys, "TALLY_ROSTER") {
        warnings.push(
            "Evaluator roster is empty while TALLY_ROSTER* env vars exist. Use double underscores (example: TALLY_ROSTER__EVALUATORS='[\"Sean Cook\"]')."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use tally_config::TallyConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_sections_with_env_prefixes() {
        let config = TallyConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("TALLY_AIRTABLE_API_KEY".to_string(), "pat".to_string()),
                ("TALLY_ROSTER_EVALUATORS".to_string(), "x".to_string()),
            ],
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("TALLY_AIRTABLE__API_KEY"));
    }

    #[test]
    fn no_warnings_when_configured() {
        let mut config = TallyConfig::default();
        config.airtable.api_key = "pat".into();
        config.airtable.base_id = "app".into();
        config.airtable.table_id = "tbl".into();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("TALLY_AIRTABLE__API_KEY".to_string(), "pat".to_string())],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn no_warnings_without_env_vars() {
        let warnings = collect_unconfigured_warnings(&TallyConfig::default(), Vec::new());
        assert!(warnings.is_empty());
    }
}
