//! Tool definitions and parameter specs
//!
//! A tool carries an ordered parameter list that renders to a JSON Schema object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Number,
    String,
}

impl ParamType {
    /// JSON Schema type keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

/// One named parameter of a tool's input schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name as it appears in the arguments map
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
    #[serde(default)]
    pub minimum: Option<i64>,
    #[serde(default)]
    pub maximum: Option<i64>,
    #[serde(default)]
    pub default: Option<i64>,
    #[serde(default)]
    pub required: bool,
}

impl ParamSpec {
    /// Create an optional numeric parameter
    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Number,
            description: description.into(),
            minimum: None,
            maximum: None,
            default: None,
            required: false,
        }
    }

    /// Set inclusive lower bound
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set inclusive upper bound
    pub fn with_maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the value used when the argument is absent
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// JSON Schema property object for this parameter
    pub fn to_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".to_string(), Value::from(self.param_type.as_str()));
        prop.insert("description".to_string(), Value::from(self.description.clone()));
        if let Some(minimum) = self.minimum {
            prop.insert("minimum".to_string(), Value::from(minimum));
        }
        if let Some(maximum) = self.maximum {
            prop.insert("maximum".to_string(), Value::from(maximum));
        }
        if let Some(default) = self.default {
            prop.insert("default".to_string(), Value::from(default));
        }
        Value::Object(prop)
    }
}

/// A tool descriptor served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (e.g., "roll_dice")
    pub name: String,
    /// Human-readable description for the calling model
    pub description: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl Tool {
    /// Create a tool with no parameters
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Look up a parameter by name
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Names of required parameters, in declaration order
    pub fn required_params(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Input schema as a JSON object map.
    ///
    /// `required` is omitted when no parameter is required.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.clone(), p.to_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required = self.required_params();
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::from(required));
        }
        schema
    }
}
