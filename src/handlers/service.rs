//! Handler for the dependency-injection services schema (`container` root).

use serde_yaml::Value;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::emitter::XmlEmitter;
use crate::handler::SchemaHandler;
use crate::handlers::{is_truthy, key_to_string, scalar_to_string};

const XMLNS: &str = "http://symfony.com/schema/dic/services";
const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://symfony.com/schema/dic/services https://symfony.com/schema/dic/services/services-1.0.xsd";

/// Transcodes DI-container YAML: parameters, service entries, `_defaults`,
/// prototypes, tags, calls, and arguments.
pub struct Service;

impl SchemaHandler for Service {
    fn type_name(&self) -> &'static str {
        "service"
    }

    fn handle(&self, yaml: &Value, xml: &mut XmlEmitter) -> Vec<Diagnostic> {
        let mut diagnostics = Diagnostics::new();

        xml.open_element("container");
        xml.write_attribute("xmlns", XMLNS);
        xml.write_attribute("xmlns:xsi", XMLNS_XSI);
        xml.write_attribute("xsi:schemaLocation", SCHEMA_LOCATION);

        let mut handled_parameters = false;
        let mut handled_services = false;

        if let Some(parameters) = yaml.get("parameters") {
            convert_parameters(parameters, xml);
            handled_parameters = true;
        }

        if let Some(services) = yaml.get("services") {
            convert_services(services, xml, &mut diagnostics);
            handled_services = true;
        }

        if !handled_parameters && !handled_services {
            diagnostics.warning("nothing from yaml was converted");
        }

        xml.close_element();
        diagnostics.into_vec()
    }
}

fn convert_parameters(parameters: &Value, xml: &mut XmlEmitter) {
    let Some(map) = parameters.as_mapping() else {
        return;
    };
    xml.open_element("parameters");
    for (key, value) in map {
        xml.open_element("parameter");
        xml.write_attribute("key", &key_to_string(key));
        let text = scalar_to_string(value);
        if !text.is_empty() {
            xml.write_text(&text);
        }
        xml.close_element();
    }
    xml.close_element();
}

fn convert_services(services: &Value, xml: &mut XmlEmitter, diagnostics: &mut Diagnostics) {
    xml.open_element("services");
    if let Some(map) = services.as_mapping() {
        for (key, value) in map {
            convert_service_entry(&key_to_string(key), value, xml, diagnostics);
        }
    }
    xml.close_element();
}

fn convert_service_entry(
    key: &str,
    value: &Value,
    xml: &mut XmlEmitter,
    diagnostics: &mut Diagnostics,
) {
    if key == "imports" {
        diagnostics.info("please take care of imports manually!");
        // no early return: the entry still reaches the service branch below
        // and comes out as `<service id="imports"/>`
    }

    if key == "_defaults" {
        xml.open_element("defaults");
        if let Some(map) = value.as_mapping() {
            for (default_key, default_value) in map {
                let rendered = if is_truthy(default_value) { "true" } else { "false" };
                xml.write_attribute(&key_to_string(default_key), rendered);
            }
        }
        xml.close_element();
        return;
    }

    // A trailing namespace separator marks bulk registration under a
    // namespace rather than a single service id.
    if key.ends_with('\\') {
        xml.open_element("prototype");
        xml.write_attribute("namespace", key);
        if let Some(map) = value.as_mapping() {
            for attr_key in ["resource", "exclude"] {
                if let Some(attr_value) = map.get(attr_key) {
                    xml.write_attribute(attr_key, &scalar_to_string(attr_value));
                }
            }
            if let Some(tags) = map.get("tags") {
                encode_tags(tags, xml);
            }
        }
        xml.close_element();
        return;
    }

    xml.open_element("service");
    xml.write_attribute("id", key);
    if let Some(map) = value.as_mapping() {
        let mut consumed: Vec<&str> = Vec::new();

        for attr_key in ["class", "decorates"] {
            if let Some(attr_value) = map.get(attr_key) {
                xml.write_attribute(attr_key, &scalar_to_string(attr_value));
                consumed.push(attr_key);
            }
        }
        if let Some(tags) = map.get("tags") {
            encode_tags(tags, xml);
            consumed.push("tags");
        }
        if let Some(calls) = map.get("calls") {
            encode_calls(calls, xml);
            consumed.push("calls");
        }
        if let Some(arguments) = map.get("arguments") {
            encode_arguments(arguments, xml);
            consumed.push("arguments");
        }

        let unprocessed: Vec<String> = map
            .keys()
            .map(key_to_string)
            .filter(|k| !consumed.contains(&k.as_str()))
            .collect();
        if !unprocessed.is_empty() {
            diagnostics.info(format!("unprocessed parameters: {}", unprocessed.join(",")));
        }
    }
    xml.close_element();
}

/// Tags come out as sibling `tag` elements directly inside the current
/// element; the services schema has no wrapping `tags` element.
fn encode_tags(tags: &Value, xml: &mut XmlEmitter) {
    let Some(items) = tags.as_sequence() else {
        return;
    };
    for tag in items {
        xml.open_element("tag");
        match tag {
            Value::Mapping(map) => {
                for (key, value) in map {
                    xml.write_attribute(&key_to_string(key), &scalar_to_string(value));
                }
            }
            _ => xml.write_attribute("name", &scalar_to_string(tag)),
        }
        xml.close_element();
    }
}

fn encode_calls(calls: &Value, xml: &mut XmlEmitter) {
    let Some(items) = calls.as_sequence() else {
        return;
    };
    for call in items {
        xml.open_element("call");
        if let Some(map) = call.as_mapping() {
            // plain pairs become attributes; `arguments` nests after them
            let mut arguments = None;
            for (key, value) in map {
                if key.as_str() == Some("arguments") {
                    arguments = Some(value);
                } else {
                    xml.write_attribute(&key_to_string(key), &scalar_to_string(value));
                }
            }
            if let Some(arguments) = arguments {
                encode_arguments(arguments, xml);
            }
        }
        xml.close_element();
    }
}

fn encode_arguments(arguments: &Value, xml: &mut XmlEmitter) {
    let Some(items) = arguments.as_sequence() else {
        return;
    };
    for argument in items {
        xml.open_element("argument");
        match argument {
            Value::Mapping(map) => {
                for (key, value) in map {
                    xml.write_attribute(&key_to_string(key), &scalar_to_string(value));
                }
            }
            _ => {
                let text = scalar_to_string(argument);
                match service_reference(&text) {
                    Some(id) => {
                        xml.write_attribute("type", "service");
                        xml.write_attribute("id", id);
                    }
                    None => {
                        xml.write_attribute("type", "string");
                        xml.write_text(&text);
                    }
                }
            }
        }
        xml.close_element();
    }
}

/// `@id` marks a service reference; a doubled `@@` escapes a literal `@` and
/// stays a plain string, unmodified.
fn service_reference(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('@')?;
    if rest.starts_with('@') {
        return None;
    }
    Some(rest)
}
