//! # SLRD Rust Backend
//!
//! Backend for the SpaceX Launch Records Dashboard.
//!
//! This crate loads the launch records CSV once at startup, derives the
//! dashboard control domains (launch-site directory and payload-mass bounds),
//! and serves chart specifications for the two linked charts (the success
//! pie and the payload/outcome scatter) over an Axum REST API.
//! The dashboard page itself is a static asset embedded in the binary and
//! served at the root path.
//!
//! ## Architecture
//!
//! - [`models`]: launch record and selection domain types
//! - [`parsing`]: CSV ingestion via Polars
//! - [`dataset`]: the immutable in-memory dataset and its one-time derivations
//! - [`services`]: pure chart computations over the dataset
//! - [`routes`]: chart and control DTO types
//! - [`api`]: consolidated DTO surface
//! - [`config`]: TOML/environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Data flow
//!
//! ```text
//! CSV file ──parse──▶ LaunchDataset (records + derivations, Arc-shared)
//!                          │
//!        ┌─────────────────┴──────────────────┐
//!   success pie                        payload scatter
//!   (site selection)            (site selection + payload range)
//!        │                                    │
//!        └────────── JSON chart specs ────────┘
//! ```
//!
//! Every chart request is a single synchronous pass over the records;
//! nothing here blocks or holds locks.

pub mod api;
pub mod config;
pub mod dataset;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
