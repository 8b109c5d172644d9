//! Password analyzer - combines the metrics into a permissibility check.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::metrics::{PasswordMetrics, max_repetition_count, max_sequence_length};

/// Computes both password metrics in one call.
///
/// # Arguments
/// * `password` - The password to analyze, or `None` for an absent password
///
/// # Returns
/// A `PasswordMetrics` with both metrics at 0 for `None` or empty input.
pub fn analyze_password(password: Option<&SecretString>) -> PasswordMetrics {
    PasswordMetrics {
        max_repetition_count: max_repetition_count(password),
        max_sequence_length: max_sequence_length(password),
    }
}

/// Checks the supplied password against the given maximums.
///
/// Returns `true` if both the repetition count and the sequence length are
/// below or equal to the specified maximums, `false` otherwise.
pub fn is_password_permissible(
    password: Option<&SecretString>,
    max_allowed_repetition_count: usize,
    max_allowed_sequence_length: usize,
) -> bool {
    let metrics = analyze_password(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        max_repetition_count = metrics.max_repetition_count,
        max_sequence_length = metrics.max_sequence_length,
        "password metrics computed"
    );

    metrics.is_within(max_allowed_repetition_count, max_allowed_sequence_length)
}

/// Async version that sends the computed metrics via channel.
///
/// The cancellation token is checked before each metric is computed; once
/// cancelled, nothing is sent.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordMetrics>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password analysis is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("password analysis cancelled");
        return;
    }
    let max_repetition_count = max_repetition_count(Some(password));

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("password analysis cancelled");
        return;
    }
    let max_sequence_length = max_sequence_length(Some(password));

    let metrics = PasswordMetrics {
        max_repetition_count,
        max_sequence_length,
    };

    if tx.send(metrics).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password metrics: receiver dropped");
    }
}
