/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Template sources and read-only providers for their resources.
pub mod provider;

/// Manifest model, loading and validation.
pub mod manifest;

/// Step execution for a loaded manifest.
pub mod generator;

/// Parameters of a generation run.
pub mod config;

/// Discovery of templates in a resource tree.
pub mod catalog;

/// Templates compiled into the binary.
pub mod bundle;

/// Constants used throughout the application.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;
