//! The schema-handler contract and the registry that dispatches on the
//! requested type name.

use std::fmt;

use serde_yaml::Value;

use crate::diagnostics::Diagnostic;
use crate::emitter::XmlEmitter;
use crate::handlers::{Resource, Service};

/// One variant per supported output schema.
///
/// A handler consumes the parsed YAML tree and performs the recursive
/// transcoding for its schema, returning whatever diagnostics it collected.
/// It never fails: malformed-but-structurally-tolerable input is reported as
/// diagnostics, not errors.
pub trait SchemaHandler {
    /// The lowercase type name this handler answers to.
    fn type_name(&self) -> &'static str;

    /// Case-sensitive match against an already-lowercased requested type.
    fn can_handle(&self, requested: &str) -> bool {
        requested == self.type_name()
    }

    fn handle(&self, yaml: &Value, xml: &mut XmlEmitter) -> Vec<Diagnostic>;
}

/// Lookup failure carrying what was asked for and what is available, in
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedType {
    pub requested: String,
    pub supported: Vec<&'static str>,
}

impl fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported type: {}; supported types are: [{}]",
            self.requested,
            self.supported.join(", ")
        )
    }
}

/// Ordered collection of schema handlers.
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn SchemaHandler>>,
}

impl HandlerRegistry {
    pub fn new(handlers: Vec<Box<dyn SchemaHandler>>) -> Self {
        Self { handlers }
    }

    /// The registry with the two built-in handlers.
    pub fn with_default_handlers() -> Self {
        Self::new(vec![Box::new(Resource), Box::new(Service)])
    }

    /// Registered type names, in registration order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.type_name()).collect()
    }

    /// Find the first handler accepting `requested` (already lowercased).
    ///
    /// First match wins; with exact-equality matching ties cannot occur, but
    /// the ordering contract stands should matching ever loosen.
    pub fn find(&self, requested: &str) -> Result<&dyn SchemaHandler, UnsupportedType> {
        self.handlers
            .iter()
            .find(|h| h.can_handle(requested))
            .map(|h| h.as_ref())
            .ok_or_else(|| UnsupportedType {
                requested: requested.to_string(),
                supported: self.type_names(),
            })
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_default_handlers()
    }
}
