//! Runtime module
//!
//! Provides the async task primitive the client operations return.

pub mod async_task;

pub use async_task::AsyncTask;
