//! Static bundle server. Serves the compiled site from `dist_dir` and answers every
//! unknown path with `index.html`, so deep links land on the client router.

use crate::common::{Config, ConfigError};
use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid bind address {address:?}: {source}")]
    Addr {
        address: String,
        source: std::net::AddrParseError,
    },
    #[error("bundle directory {0:?} has no index.html")]
    MissingIndex(PathBuf),
    #[error("server stopped: {0}")]
    Serve(String),
}

fn app(dist: &Path) -> Router {
    let index = dist.join("index.html");
    let bundle = ServeDir::new(dist).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}

fn bind_address(config: &Config) -> Result<SocketAddr, ServerError> {
    config.bind_address.parse().map_err(|source| ServerError::Addr {
        address: config.bind_address.clone(),
        source,
    })
}

pub async fn run() -> Result<(), ServerError> {
    let config = Config::load_from_disk(Path::new("config.toml"))?;

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{},tower_http=debug", config.log_filter).into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    let dist = PathBuf::from(&config.dist_dir);
    if !dist.join("index.html").is_file() {
        return Err(ServerError::MissingIndex(dist));
    }

    let addr = bind_address(&config)?;
    tracing::info!(%addr, dist = %dist.display(), "serving site bundle");

    axum::Server::bind(&addr)
        .serve(app(&dist).into_make_service())
        .await
        .map_err(|err| ServerError::Serve(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_address_parses() {
        let addr = bind_address(&Config::default()).unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn bad_bind_address_names_the_value() {
        let config = Config {
            bind_address: "localhost".into(),
            ..Config::default()
        };

        let err = bind_address(&config).unwrap_err();
        assert!(err.to_string().contains("\"localhost\""));
    }
}
