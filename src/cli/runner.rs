//! CLI runner - executes commands

use crate::cli::commands::{Cli, CollectionArgs, Commands};
use crate::cli::server::{serve, ServerConfig};
use crate::config::{self, PaginationConfig};
use crate::error::{Error, Result};
use crate::paginate::{paginate, PageBody, PageRequest, Served};
use crate::range::CollectionContext;
use axum::http::{HeaderMap, HeaderValue, Uri};
use serde_json::{json, Map, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        config::install(config.clone())?;

        match &self.cli.command {
            Commands::Serve { port, collection } => {
                let server = ServerConfig::new(collection.total_items(), config.clone())
                    .with_max_page_size(max_page_size(collection, &config));
                serve(server, *port).await
            }
            Commands::Resolve {
                range,
                url,
                collection,
            } => {
                let output = resolve_request(range.as_deref(), url, collection, &config)?;
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(())
            }
        }
    }

    /// Load configuration from the `--config` file, or use defaults
    fn load_config(&self) -> Result<PaginationConfig> {
        match &self.cli.config {
            Some(path) => PaginationConfig::from_file(path),
            None => Ok(PaginationConfig::default()),
        }
    }
}

fn max_page_size(collection: &CollectionArgs, config: &PaginationConfig) -> u64 {
    collection.max_page_size.unwrap_or(config.max_page_size)
}

/// Paginate a synthetic request and describe the response as JSON
pub(crate) fn resolve_request(
    range: Option<&str>,
    url: &str,
    collection: &CollectionArgs,
    config: &PaginationConfig,
) -> Result<Value> {
    let uri: Uri = url
        .parse()
        .map_err(|e| Error::config(format!("Invalid url '{url}': {e}")))?;

    let mut headers = HeaderMap::new();
    if let Some(range) = range {
        let value = HeaderValue::from_str(range)
            .map_err(|e| Error::invalid_header("Range", e.to_string()))?;
        headers.insert("range-unit", HeaderValue::from_static("items"));
        headers.insert("range", value);
    }

    let ctx = CollectionContext::new(collection.total_items(), max_page_size(collection, config));
    let page = paginate(&PageRequest::new(&headers, &uri), &ctx, config, |limit, offset| {
        Served::new(json!({ "limit": limit, "offset": offset }))
    })?;

    let mut response_headers = Map::new();
    for (name, value) in &page.headers {
        if let Ok(value) = value.to_str() {
            response_headers.insert(name.to_string(), Value::String(value.to_string()));
        }
    }

    let served = match page.body {
        PageBody::Served(served) => served,
        PageBody::Message(message) => json!({ "message": message }),
        PageBody::Empty => Value::Null,
    };

    Ok(json!({
        "status": page.status.as_u16(),
        "outcome": page.window.outcome,
        "headers": response_headers,
        "served": served,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InvalidRangePolicy;

    fn collection(total: u64, max: u64) -> CollectionArgs {
        CollectionArgs {
            total,
            unbounded: false,
            max_page_size: Some(max),
        }
    }

    #[test]
    fn test_resolve_request_middle_page() {
        let output = resolve_request(
            Some("20-29"),
            "/items",
            &collection(100, 100),
            &PaginationConfig::default(),
        )
        .unwrap();

        assert_eq!(output["status"], 206);
        assert_eq!(output["outcome"], "partial_content");
        assert_eq!(output["headers"]["content-range"], "20-29/100");
        assert_eq!(output["served"]["limit"], 10);
        assert_eq!(output["served"]["offset"], 20);
        assert!(output["headers"]["link"]
            .as_str()
            .unwrap()
            .contains("rel=\"last\"; items=\"90-99\""));
    }

    #[test]
    fn test_resolve_request_invalid_range() {
        let output = resolve_request(
            Some("1-0"),
            "/items",
            &collection(101, 100),
            &PaginationConfig::default(),
        )
        .unwrap();

        assert_eq!(output["status"], 416);
        assert_eq!(output["headers"]["content-range"], "*/101");
        assert!(output["served"]["message"].is_string());
    }

    #[test]
    fn test_resolve_request_raise_policy() {
        let err = resolve_request(
            Some("1-0"),
            "/items",
            &collection(101, 100),
            &PaginationConfig::new(InvalidRangePolicy::Raise),
        )
        .unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_resolve_request_uses_config_page_size() {
        let args = CollectionArgs {
            total: 0,
            unbounded: true,
            max_page_size: None,
        };
        let config = PaginationConfig::default().with_max_page_size(25);
        let output = resolve_request(None, "/items", &args, &config).unwrap();

        assert_eq!(output["headers"]["content-range"], "0-24/*");
        assert_eq!(output["served"]["limit"], 25);
    }
}
