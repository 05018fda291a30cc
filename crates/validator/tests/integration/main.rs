//! Integration tests for sift-validator.
//!
//! Each module drives one validator family through the public API only.

mod id_card;
mod kind;
mod number;
mod phone;

/// Routes `tracing` output to the test harness so rejected inputs are
/// visible with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
