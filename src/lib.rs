//! Beatport Catalog Client Library
//!
//! This library provides a client for the Beatport catalog API. It handles
//! OAuth2 authentication (refresh-token and authorization-code grants),
//! paginated catalog browsing and track-stream-URL resolution, plus the
//! command-line layer built on top of it.
//!
//! # Modules
//!
//! - `beatport` - Beatport API client: auth, request engine, catalog ops
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared across the crate
//! - `management` - Credential persistence
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use beatcli::beatport::BeatportClient;
//! use beatcli::types::Session;
//!
//! #[tokio::main]
//! async fn main() -> beatcli::error::ApiResult<()> {
//!     let session = Session::new("client-id".to_string(), "https://example.com/cb".to_string());
//!     let mut client = BeatportClient::new(session)?;
//!     let genres = client.genres(true).await?;
//!     println!("{} genres", genres.len());
//!     Ok(())
//! }
//! ```

pub mod beatport;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a blue "o" indicator followed by the
/// provided message. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching genres...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Authentication successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 after printing; only for fatal
/// errors in the CLI layer where recovery is not possible. Accepts the same
/// arguments as `println!`.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important notices that don't require
/// termination. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("No active subscription; streaming falls back to samples");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
