//! Simulated confirmation-email delivery.

use std::time::Duration;

use rand::Rng;

/// Bounds for the simulated delivery delay, in seconds.
const MIN_DELAY_SECS: u64 = 3;
const MAX_DELAY_SECS: u64 = 7;

/// Schedule the confirmation log line for a book, fire-and-forget.
///
/// The spawned task sleeps a uniformly-random interval and then logs; it
/// is never joined, retried, or surfaced to the caller. Must be called
/// from within a tokio runtime.
pub fn schedule_confirmation_email(book_id: i64) {
    tokio::spawn(async move {
        let delay = rand::thread_rng().gen_range(MIN_DELAY_SECS..=MAX_DELAY_SECS);
        tokio::time::sleep(Duration::from_secs(delay)).await;
        tracing::info!("Confirmation email has been sent for book ID {}", book_id);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn scheduling_returns_without_waiting_for_delivery() {
        let start = Instant::now();

        schedule_confirmation_email(42);

        assert!(start.elapsed() < Duration::from_secs(MIN_DELAY_SECS));
    }
}
