pub mod config;
pub mod credentials;
pub mod error;
pub mod events;
pub mod logging;

// Pipeline, leaves first.
pub mod template;
pub mod fetch;
pub mod scheduler;
pub mod assembler;
pub mod mux;
pub mod job;
