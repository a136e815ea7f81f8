//! Error types for updatemgr with contextual messages and exit codes
//!
//! Every failure bubbles up to `main` as an [`UpdateError`] and terminates the
//! process with the matching [`ExitCode`]. A declined confirmation is not an
//! error and never reaches this module.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for updatemgr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid channel, bad arguments)
  User = 1,
  /// System error (I/O, registry scan, serialization)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for updatemgr
#[derive(Debug)]
pub enum UpdateError {
  /// Configuration errors
  Config(ConfigError),

  /// Distribution directory / version registry errors
  Registry(RegistryError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
    exit_code: ExitCode,
  },
}

impl UpdateError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    UpdateError::Message {
      message: msg.into(),
      context: None,
      help: None,
      exit_code: ExitCode::User,
    }
  }

  /// Create an error message for a system-side failure
  pub fn system(msg: impl Into<String>) -> Self {
    UpdateError::Message {
      message: msg.into(),
      context: None,
      help: None,
      exit_code: ExitCode::System,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    UpdateError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
      exit_code: ExitCode::User,
    }
  }

  /// Add context to an existing error
  ///
  /// Typed errors become a message led by the context; help text and exit
  /// code are carried over.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      UpdateError::Message {
        message,
        context,
        help,
        exit_code,
      } => UpdateError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
        exit_code,
      },
      other => UpdateError::Message {
        message: ctx_str,
        context: Some(other.to_string()),
        help: other.help_message(),
        exit_code: other.exit_code(),
      },
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      UpdateError::Config(_) => ExitCode::User,
      UpdateError::Registry(_) => ExitCode::System,
      UpdateError::Io(_) => ExitCode::System,
      UpdateError::Message { exit_code, .. } => *exit_code,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      UpdateError::Config(e) => e.help_message(),
      UpdateError::Registry(e) => e.help_message(),
      UpdateError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for UpdateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UpdateError::Config(e) => write!(f, "{}", e),
      UpdateError::Registry(e) => write!(f, "{}", e),
      UpdateError::Io(e) => write!(f, "I/O error: {}", e),
      UpdateError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for UpdateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      UpdateError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for UpdateError {
  fn from(err: io::Error) -> Self {
    UpdateError::Io(err)
  }
}

impl From<String> for UpdateError {
  fn from(msg: String) -> Self {
    UpdateError::message(msg)
  }
}

impl From<&str> for UpdateError {
  fn from(msg: &str) -> Self {
    UpdateError::message(msg)
  }
}

impl From<serde_json::Error> for UpdateError {
  fn from(err: serde_json::Error) -> Self {
    UpdateError::system(format!("JSON error: {}", err))
  }
}

impl From<toml_edit::de::Error> for UpdateError {
  fn from(err: toml_edit::de::Error) -> Self {
    UpdateError::Config(ConfigError::Invalid {
      reason: err.to_string(),
    })
  }
}

impl From<ConfigError> for UpdateError {
  fn from(err: ConfigError) -> Self {
    UpdateError::Config(err)
  }
}

impl From<RegistryError> for UpdateError {
  fn from(err: RegistryError) -> Self {
    UpdateError::Registry(err)
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Config file exists but could not be parsed
  Invalid { reason: String },

  /// Channel name is not usable as a pre-release channel
  InvalidChannel { name: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Invalid { .. } => Some("Expected a table like:\n\n  [storage]\n  root = \"dist\"".to_string()),
      ConfigError::InvalidChannel { .. } => {
        Some("Use `updatemgr release` for the stable channel, or pass a pre-release tag such as `beta`.".to_string())
      }
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Invalid { reason } => write!(f, "Invalid updatemgr configuration: {}", reason),
      ConfigError::InvalidChannel { name, reason } => {
        write!(f, "Invalid release channel '{}': {}", name, reason)
      }
    }
  }
}

/// Registry errors raised while scanning or exporting the distribution directory
#[derive(Debug)]
pub enum RegistryError {
  /// Storage root does not exist or is not a directory
  StorageNotFound { path: PathBuf },

  /// Export was requested before versions were sorted by precedence
  NotSorted,

  /// File name carries a version segment that is not valid semver
  InvalidVersion { path: PathBuf, reason: String },
}

impl RegistryError {
  fn help_message(&self) -> Option<String> {
    match self {
      RegistryError::StorageNotFound { .. } => {
        Some("Pass the distribution directory with --dir, or set [storage] root in updatemgr.toml.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RegistryError::StorageNotFound { path } => {
        write!(f, "Distribution directory not found: {}", path.display())
      }
      RegistryError::NotSorted => write!(f, "Registry exported before versions were sorted"),
      RegistryError::InvalidVersion { path, reason } => {
        write!(f, "Invalid version in file name {}: {}", path.display(), reason)
      }
    }
  }
}

/// Result type alias for updatemgr
pub type UpdateResult<T> = Result<T, UpdateError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> UpdateResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> UpdateResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<UpdateError>,
{
  fn context(self, ctx: impl Into<String>) -> UpdateResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> UpdateResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &UpdateError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
