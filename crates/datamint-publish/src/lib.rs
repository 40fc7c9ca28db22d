//! datamint-publish
//!
//! Off-chain wiring for publishing assets:
//! - collaborator traits for the publish call, docker image lookups and
//!   account purgatory checks
//! - the submission state machine (`PublishOrchestrator`)
//! - HTTP adapters for the docker-hub proxy, purgatory API and a JSON
//!   publish endpoint
//! - a file-backed draft store for form state between sessions
//!
//! The orchestrator never touches drafts; callers load a form, hand it over
//! by value and apply the returned directives.

pub mod collaborators;
pub mod config;
pub mod docker_hub;
pub mod drafts;
pub mod errors;
pub mod http_publisher;
pub mod orchestrator;
pub mod purgatory;
pub mod report;

#[cfg(test)]
mod test_server;

pub use collaborators::*;
pub use config::ClientConfig;
pub use errors::PublishError;
pub use orchestrator::PublishOrchestrator;
pub use report::*;
