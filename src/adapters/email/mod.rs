//! Email notification adapter

pub mod notifier;

pub use notifier::EmailNotifier;
