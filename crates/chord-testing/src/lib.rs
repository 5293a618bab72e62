//! Testing utilities for chord shortcuts.
//!
//! This crate provides test doubles and input simulation for code built on
//! `chord-shortcuts`:
//! - Mock event targets that record attach and detach calls
//! - A mock document with id lookup
//! - Keyboard event builders and input sequences
//! - A harness wiring a factory to a drainable task queue
//! - Property-based testing generators for chord notation

pub mod document;
pub mod harness;
pub mod input;
pub mod target;

#[cfg(feature = "proptest-support")]
pub mod generators;


// Re-exports
pub use document::MockDocument;
pub use harness::ShortcutHarness;
pub use input::{InputSequence, KeyInput};
pub use target::{Call, Flavor, MockTarget};

#[cfg(feature = "proptest-support")]
pub use generators::ChordGen;
