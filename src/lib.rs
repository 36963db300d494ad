//! # yaml2xml
//!
//! Convert YAML configuration documents into XML following one of a small
//! set of known schemas: an API resource-metadata schema (`resources` root)
//! and a dependency-injection services schema (`container` root).
//!
//! ## Features
//!
//! - Recursive transcoding of arbitrarily nested attribute maps
//! - `itemOperations` / `collectionOperations` / `subresourceOperations`
//!   groups, given as bare lists or parameter maps
//! - `parameters`, `services`, `_defaults`, prototype (trailing-`\`) entries,
//!   tags, calls, and `@service`-reference arguments
//! - Diagnostics for input that could not be mapped, reported without
//!   aborting the conversion
//! - CLI tool `yaml2xml` for file-to-file conversion
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use yaml2xml::converter::yaml_to_xml;
//! use yaml2xml::handlers::Service;
//!
//! let yaml: serde_yaml::Value = serde_yaml::from_str(
//!     "services:\n  App\\Mailer:\n    class: App\\Mailer\n",
//! )
//! .unwrap();
//!
//! let (xml, diagnostics) = yaml_to_xml(&yaml, &Service);
//! assert!(xml.contains("<service id=\"App\\Mailer\" class=\"App\\Mailer\"/>"));
//! assert!(diagnostics.is_empty());
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! yaml2xml services.yaml service
//! ```
//!
//! Or for a resource-metadata file, writing to an explicit path:
//!
//! ```bash
//! yaml2xml book.yaml resource --output book.xml
//! ```
//!
//! ## Crate Layout
//!
//! - [`diagnostics`] — Severity/message records collected during a run
//! - [`emitter`] — Stack-based XML emitter over a `quick-xml` writer
//! - [`handler`] — The [`handler::SchemaHandler`] trait and registry
//! - [`handlers`] — The `resource` and `service` schema handlers
//! - [`converter`] — In-memory and file-to-file conversion entry points
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod converter;
pub mod diagnostics;
pub mod emitter;
pub mod handler;
pub mod handlers;
