//! The four maintenance tasks
//!
//! Each task is a stateless, single-pass sequence of external-command
//! invocations. The first failing command aborts the task and its error is
//! surfaced unchanged to the caller.

pub mod clean;
pub mod docs;
pub mod publish;
pub mod validate;

pub use publish::PublishOptions;
