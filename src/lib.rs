//! Password analysis library
//!
//! This library computes two password strength metrics - the occurrence
//! count of the most repeated character and the length of the longest
//! ascending/descending alphanumeric sequence - and combines them into a
//! permissibility check against caller-supplied maximums.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze_password, is_password_permissible};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let metrics = analyze_password(Some(&password));
//! assert_eq!(metrics.max_repetition_count, 2);
//! assert_eq!(metrics.max_sequence_length, 1);
//!
//! assert!(is_password_permissible(Some(&password), 4, 3));
//! ```

// Internal modules
mod analyzer;
mod metrics;

// Public API
pub use analyzer::{analyze_password, is_password_permissible};
pub use metrics::{PasswordMetrics, max_repetition_count, max_sequence_length};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
