//! Handler for the API resource-metadata schema (`resources` root).

use serde_yaml::Value;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::emitter::XmlEmitter;
use crate::handler::SchemaHandler;
use crate::handlers::{is_numeric_key, key_to_string, scalar_to_string};

const XMLNS: &str = "https://api-platform.com/schema/metadata";
const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "https://api-platform.com/schema/metadata https://api-platform.com/schema/metadata/metadata-2.0.xsd";

/// Transcodes resource-metadata YAML: per-resource attributes, recursively
/// nested `attribute` elements, and the three operation groups.
pub struct Resource;

impl SchemaHandler for Resource {
    fn type_name(&self) -> &'static str {
        "resource"
    }

    fn handle(&self, yaml: &Value, xml: &mut XmlEmitter) -> Vec<Diagnostic> {
        let mut diagnostics = Diagnostics::new();

        xml.open_element("resources");
        xml.write_attribute("xmlns", XMLNS);
        xml.write_attribute("xmlns:xsi", XMLNS_XSI);
        xml.write_attribute("xsi:schemaLocation", SCHEMA_LOCATION);

        match yaml.get("resources") {
            Some(resources) => {
                // a present-but-empty section converts silently
                if let Some(resources) = resources.as_mapping() {
                    for (name, resource) in resources {
                        convert_resource(&key_to_string(name), resource, xml, &mut diagnostics);
                    }
                }
            }
            None => diagnostics.warning("no resources in yaml found!"),
        }

        xml.close_element();
        diagnostics.into_vec()
    }
}

fn convert_resource(
    name: &str,
    resource: &Value,
    xml: &mut XmlEmitter,
    diagnostics: &mut Diagnostics,
) {
    xml.open_element("resource");
    xml.write_attribute("class", name);

    let Some(map) = resource.as_mapping() else {
        xml.close_element();
        return;
    };

    // Track which keys of the entry were mapped; anything left over is
    // reported after the element closes. The parsed document itself is
    // never mutated.
    let mut consumed: Vec<String> = Vec::new();

    for key in ["iri", "description", "shortName"] {
        if let Some(value) = map.get(key) {
            xml.write_attribute(key, &scalar_to_string(value));
            consumed.push(key.to_string());
        }
    }

    if let Some(attributes) = map.get("attributes") {
        encode_attributes(attributes, xml);
        consumed.push("attributes".to_string());
    }

    for kind in ["item", "collection", "subresource"] {
        let group_key = format!("{kind}Operations");
        if let Some(group) = map.get(group_key.as_str()) {
            convert_operations(kind, group, xml);
            consumed.push(group_key);
        }
    }

    xml.close_element();

    let unprocessed = map
        .keys()
        .map(key_to_string)
        .any(|key| !consumed.contains(&key));
    if unprocessed {
        diagnostics.info(format!("Unprocessed items in resource {name}"));
    }
}

/// Encode each entry of an attribute map (or list, using the decimal index
/// as the name) as an `attribute` element.
fn encode_attributes(attributes: &Value, xml: &mut XmlEmitter) {
    match attributes {
        Value::Mapping(map) => {
            for (key, value) in map {
                encode_attribute(&key_to_string(key), value, xml);
            }
        }
        Value::Sequence(items) => {
            for (index, value) in items.iter().enumerate() {
                encode_attribute(&index.to_string(), value, xml);
            }
        }
        _ => {}
    }
}

/// One `attribute` element: structured values nest recursively, scalars
/// become text content.
fn encode_attribute(name: &str, value: &Value, xml: &mut XmlEmitter) {
    xml.open_element("attribute");
    xml.write_attribute("name", name);
    match value {
        Value::Mapping(_) | Value::Sequence(_) => encode_attributes(value, xml),
        _ => xml.write_text(&scalar_to_string(value)),
    }
    xml.close_element();
}

fn convert_operations(kind: &str, group: &Value, xml: &mut XmlEmitter) {
    xml.open_element(&format!("{kind}Operations"));
    match group {
        // bare list form: `- get` means a name-only operation
        Value::Sequence(items) => {
            for item in items {
                convert_operation(kind, &scalar_to_string(item), None, xml);
            }
        }
        Value::Mapping(map) => {
            for (name, operation) in map {
                if is_numeric_key(name) {
                    // indexed entry: the value carries the name
                    convert_operation(kind, &scalar_to_string(operation), None, xml);
                } else {
                    convert_operation(kind, &key_to_string(name), Some(operation), xml);
                }
            }
        }
        _ => {}
    }
    xml.close_element();
}

fn convert_operation(kind: &str, name: &str, operation: Option<&Value>, xml: &mut XmlEmitter) {
    xml.open_element(&format!("{kind}Operation"));
    xml.write_attribute("name", name);
    if let Some(Value::Mapping(parameters)) = operation {
        for (key, value) in parameters {
            encode_attribute(&key_to_string(key), value, xml);
        }
    }
    xml.close_element();
}
