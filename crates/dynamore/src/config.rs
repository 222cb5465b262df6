use std::env;

use clap::ValueEnum;

/// Store implementation the proxy runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Process-local store; nothing survives the process.
    #[default]
    Memory,
    /// DynamoDB table (requires the `dynamodb` feature).
    Dynamodb,
}

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding every entity kind (default: "dynamore")
    pub table_name: String,
    /// Custom endpoint URL, for a local DynamoDB
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "dynamore")
    /// - `AWS_ENDPOINT_URL` - Endpoint override; `DDB_ENDPOINT` is read when unset
    /// - `AWS_REGION` - Region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "dynamore".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").or_else(|| lookup("DDB_ENDPOINT")),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url}), table {}", self.table_name),
            None => format!(
                "AWS DynamoDB (region: {}), table {}",
                self.region, self.table_name
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.table_name, "dynamore");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("DYNAMODB_TABLE_NAME", "entities"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]));

        assert_eq!(config.table_name, "entities");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn test_legacy_endpoint_variable() {
        let config = Config::from_lookup(lookup(&[("DDB_ENDPOINT", "http://localhost:4566")]));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));

        let config = Config::from_lookup(lookup(&[
            ("DDB_ENDPOINT", "http://localhost:4566"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
        ]));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_target_display() {
        let mut config = Config::from_lookup(lookup(&[]));
        assert_eq!(
            config.target_display(),
            "AWS DynamoDB (region: us-east-1), table dynamore"
        );

        config.endpoint_url = Some("http://localhost:8000".to_string());
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000), table dynamore"
        );
    }
}
