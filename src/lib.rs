//! prostoponyatno - complex topics explained in plain words
//!
//! A small web backend: a topic and an explanation style go in, a prompt
//! is sent to a generative text API, and validated results are cached as
//! JSON files keyed by slug and served back for reading, search and
//! sitemaps.

pub mod cli;
pub mod config;
pub mod explain;
pub mod gateway;
pub mod http_server;
pub mod observability;
pub mod prompt;
pub mod search;
pub mod seo;
pub mod slug;
pub mod store;
pub mod validation;
