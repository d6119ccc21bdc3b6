//! `resolve` command.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cli::output::{output, property_table, CommandOutput};
use crate::domain::errors::ConfigResult;
use crate::domain::models::{ClientIdentity, ClientProperty, ClientType, RestClientConfig, Settings};
use crate::infrastructure::config::{ConfigStore, EnvSource, PropertiesSource, PROPERTIES_ORDINAL};
use crate::infrastructure::settings::SettingsLoader;
use crate::services::ConfigResolver;

/// Arguments of `restclient-config resolve`
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Logical client name, e.g. `test-client`
    #[arg(short, long, conflicts_with = "type_name", required_unless_present = "type_name")]
    pub name: Option<String>,

    /// Fully-qualified client interface type, e.g. `org.acme.GreetingClient`
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,

    /// Config key declared by the client type
    #[arg(long, requires = "type_name")]
    pub config_key: Option<String>,

    /// Properties file; repeatable, later files override earlier ones
    #[arg(short, long = "properties")]
    pub properties: Vec<PathBuf>,

    /// Ignore environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Namespace of client keys (defaults to the configured root prefix)
    #[arg(long)]
    pub root_prefix: Option<String>,

    /// Also show the key each value was read from
    #[arg(long)]
    pub explain: bool,
}

impl ResolveArgs {
    fn identity(&self) -> ClientIdentity {
        match (&self.name, &self.type_name) {
            (Some(name), _) => ClientIdentity::Name(name.clone()),
            (None, Some(type_name)) => {
                let client = ClientType::new(type_name.clone());
                ClientIdentity::Type(match &self.config_key {
                    Some(key) => client.with_config_key(key.clone()),
                    None => client,
                })
            }
            (None, None) => ClientIdentity::Name(String::new()),
        }
    }
}

/// Resolved record plus, with `--explain`, the key behind each value
#[derive(Debug, serde::Serialize)]
pub struct ResolveOutput {
    /// Client as given on the command line
    pub client: String,
    /// Resolved configuration
    pub config: RestClientConfig,
    /// Property name to source key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeMap<String, String>>,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        if self.config.is_empty() {
            return format!("No configuration found for {}.", self.client);
        }

        let header: &[&str] = if self.sources.is_some() {
            &["PROPERTY", "VALUE", "KEY"]
        } else {
            &["PROPERTY", "VALUE"]
        };

        let rows: Vec<Vec<String>> = ClientProperty::ALL
            .iter()
            .map(|property| {
                let mut row = vec![
                    property.property_name().to_string(),
                    self.config
                        .display_value(*property)
                        .unwrap_or_else(|| "-".to_string()),
                ];
                if let Some(sources) = &self.sources {
                    row.push(
                        sources
                            .get(property.property_name())
                            .cloned()
                            .unwrap_or_else(|| "-".to_string()),
                    );
                }
                row
            })
            .collect();

        format!(
            "Configuration for {}:\n{}",
            self.client,
            property_table(header, &rows)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Assemble the store from property files and, optionally, the environment.
///
/// Files named explicitly must exist; the configured defaults are skipped
/// when missing.
pub fn build_store(args: &ResolveArgs, settings: &Settings) -> Result<ConfigStore> {
    let explicit = !args.properties.is_empty();
    let files = if explicit {
        &args.properties
    } else {
        &settings.resolver.property_files
    };

    let mut builder = ConfigStore::builder();
    for (ordinal, path) in (PROPERTIES_ORDINAL..).zip(files) {
        if !explicit && !path.exists() {
            warn!(path = %path.display(), "default properties file not found, skipping");
            continue;
        }
        let source = PropertiesSource::from_file(path)
            .with_context(|| format!("Failed to load properties from {}", path.display()))?;
        builder = builder.with_source(source.with_ordinal(ordinal));
    }

    if settings.resolver.include_env && !args.no_env {
        builder = builder.with_source(EnvSource::from_process_env());
    }

    let store = builder.build();
    debug!(?store, "configuration store ready");
    Ok(store)
}

/// Run the `resolve` command.
pub fn execute(args: ResolveArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let root_prefix = root_prefix(&args, settings)?;
    let store = Arc::new(build_store(&args, settings)?);
    let resolver = ConfigResolver::new(store).with_root_prefix(root_prefix);

    let identity = args.identity();
    let config = resolver
        .resolve(&identity)
        .with_context(|| format!("Failed to resolve configuration for {identity}"))?;

    let sources = if args.explain {
        Some(explain(&resolver, &identity)?)
    } else {
        None
    };
    output(
        &ResolveOutput {
            client: identity.to_string(),
            config,
            sources,
        },
        json_mode,
    );
    Ok(())
}

/// `--root-prefix` if given, else the configured one.
fn root_prefix(args: &ResolveArgs, settings: &Settings) -> Result<String> {
    match &args.root_prefix {
        Some(prefix) => {
            SettingsLoader::validate_root_prefix(prefix).context("Invalid --root-prefix")?;
            Ok(prefix.clone())
        }
        None => Ok(settings.resolver.root_prefix.clone()),
    }
}

/// Property name → key that supplied its value.
fn explain(
    resolver: &ConfigResolver,
    identity: &ClientIdentity,
) -> ConfigResult<BTreeMap<String, String>> {
    let mut sources = BTreeMap::new();
    for property in ClientProperty::ALL {
        if let Some(key) = resolver.source_key(identity, property)? {
            sources.insert(property.property_name().to_string(), key);
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(properties: Vec<PathBuf>) -> ResolveArgs {
        ResolveArgs {
            name: Some("test-client".to_string()),
            type_name: None,
            config_key: None,
            properties,
            no_env: true,
            root_prefix: None,
            explain: false,
        }
    }

    fn properties_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_later_files_override_earlier() {
        let base = properties_file("quarkus.rest-client.test-client.url=http://base\nquarkus.rest-client.test-client.scope=Singleton\n");
        let local = properties_file("quarkus.rest-client.test-client.url=http://local\n");
        let store = build_store(
            &args(vec![base.path().to_path_buf(), local.path().to_path_buf()]),
            &Settings::default(),
        )
        .unwrap();

        let config = ConfigResolver::new(Arc::new(store))
            .resolve_name("test-client")
            .unwrap();
        assert_eq!(config.url.as_deref(), Some("http://local"));
        assert_eq!(config.scope.as_deref(), Some("Singleton"));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = build_store(
            &args(vec![PathBuf::from("/no/such/application.properties")]),
            &Settings::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_file_is_skipped() {
        let mut settings = Settings::default();
        settings.resolver.property_files = vec![PathBuf::from("/no/such/application.properties")];
        let store = build_store(&args(vec![]), &settings).unwrap();
        assert_eq!(store.sources().count(), 0);
    }

    #[test]
    fn test_identity_from_type_args() {
        let mut args = args(vec![]);
        args.name = None;
        args.type_name = Some("org.acme.GreetingClient".to_string());
        args.config_key = Some("greeting".to_string());
        assert_eq!(
            args.identity(),
            ClientIdentity::Type(ClientType::new("org.acme.GreetingClient").with_config_key("greeting"))
        );
    }

    #[test]
    fn test_explain_reports_winning_keys() {
        let file = properties_file(
            "quarkus.rest-client.\"test-client\".url=http://quoted\ntest-client/mp-rest/scope=Singleton\n",
        );
        let store = build_store(&args(vec![file.path().to_path_buf()]), &Settings::default()).unwrap();
        let resolver = ConfigResolver::new(Arc::new(store));
        let sources = explain(&resolver, &"test-client".into()).unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources["url"], "quarkus.rest-client.\"test-client\".url");
        assert_eq!(sources["scope"], "test-client/mp-rest/scope");
    }

    #[test]
    fn test_explain_skips_key_expanding_to_empty() {
        let file = properties_file(
            "quarkus.rest-client.\"test-client\".url=${missing:}\nquarkus.rest-client.test-client.url=http://bare\n",
        );
        let store = build_store(&args(vec![file.path().to_path_buf()]), &Settings::default()).unwrap();
        let resolver = ConfigResolver::new(Arc::new(store));
        let identity = ClientIdentity::from("test-client");

        let config = resolver.resolve(&identity).unwrap();
        assert_eq!(config.url.as_deref(), Some("http://bare"));
        let sources = explain(&resolver, &identity).unwrap();
        assert_eq!(sources["url"], "quarkus.rest-client.test-client.url");
    }

    #[test]
    fn test_root_prefix_override_is_validated() {
        let settings = Settings::default();
        let mut args = args(vec![]);
        assert_eq!(root_prefix(&args, &settings).unwrap(), "quarkus.rest-client");

        args.root_prefix = Some("acme.clients".to_string());
        assert_eq!(root_prefix(&args, &settings).unwrap(), "acme.clients");

        for invalid in ["", "  ", ".acme", "acme."] {
            args.root_prefix = Some(invalid.to_string());
            assert!(root_prefix(&args, &settings).is_err(), "accepted {invalid:?}");
        }
    }

    #[test]
    fn test_human_output_for_empty_config() {
        let output = ResolveOutput {
            client: "ghost".to_string(),
            config: RestClientConfig::default(),
            sources: None,
        };
        assert_eq!(output.to_human(), "No configuration found for ghost.");
    }
}
