//! LessonCoach - AI lesson plan generation service
//!
//! This crate provides an HTTP service that turns an uploaded lesson document
//! (PDF, DOCX, XLSX, image, or plain text) into an observation-ready lesson
//! plan drafted by an OpenAI-compatible chat model.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (extraction, OpenAI, DOCX, config)
//! - **Web**: Axum HTTP server, routes, and error mapping
//! - **CLI**: Command-line interface, argument parsing, and config subcommand

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod web;
