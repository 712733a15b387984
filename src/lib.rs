//! dtcgen library
//!
//! This library turns a design-tool export into a buildable source-code
//! project: it scaffolds a project directory from a template, renames
//! placeholders, synthesizes a nested asset catalog from loose image
//! files, and emits per-screen source files by binding extracted design
//! data into text templates.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod models;
pub mod parser;
pub mod services;
