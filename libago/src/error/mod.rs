//! Error types for libago
//!
//! Formatting a phrase never fails. Errors only surface at the edges:
//! reading translation catalogs, loading configuration and validating a
//! locale tag handed to the builder.

use thiserror::Error;


/// Main error type for libago operations
#[derive(Error, Debug)]
pub enum AgoError {
    /// Translation catalog errors (unreadable file, malformed table)
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid config file, bad value)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A locale tag that is not a plausible language identifier
    #[error("Invalid locale: '{locale}'")]
    InvalidLocale { locale: String },
}

/// Result type alias for libago operations
pub type Result<T> = std::result::Result<T, AgoError>;

impl AgoError {
    /// Creates a new catalog error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    ///
    /// let err = AgoError::catalog("malformed table", Some("/tmp/ru.toml"));
    /// assert!(matches!(err, AgoError::Catalog { .. }));
    /// ```
    pub fn catalog<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Catalog {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new catalog error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = AgoError::catalog_with_source("failed to read catalog", Some("/tmp/ru.toml"), io_err);
    /// assert!(matches!(err, AgoError::Catalog { .. }));
    /// ```
    pub fn catalog_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Catalog {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    ///
    /// let err = AgoError::config("invalid config file", Some("/path/to/config.toml"));
    /// assert!(matches!(err, AgoError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = AgoError::config_with_source("failed to read config", Some("/path/to/config.toml"), io_err);
    /// assert!(matches!(err, AgoError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid locale error.
    pub fn invalid_locale<S: Into<String>>(locale: S) -> Self {
        Self::InvalidLocale {
            locale: locale.into(),
        }
    }
}
