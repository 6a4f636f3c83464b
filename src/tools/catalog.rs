//! Tool catalog
//!
//! Holds the static tool descriptors in a stable order and provides lookup.

use super::definition::{ParamSpec, Tool};

/// Default side count when `sides` is absent or falsy.
pub const DEFAULT_SIDES: i64 = 6;
/// Smallest permitted side count.
pub const MIN_SIDES: i64 = 2;
/// Smallest permitted dice count.
pub const MIN_COUNT: i64 = 1;
/// Largest permitted dice count.
pub const MAX_COUNT: i64 = 100;

/// Names of the built-in tools.
pub struct ToolNames;

impl ToolNames {
    pub const ROLL_DICE: &'static str = "roll_dice";
    pub const ROLL_MULTIPLE_DICE: &'static str = "roll_multiple_dice";
}

/// Ordered catalog of tool descriptors
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Catalog with the two dice tools
    pub fn dice() -> Self {
        let mut catalog = Self::new();
        catalog.add(
            Tool::new(
                ToolNames::ROLL_DICE,
                "Roll a single die with specified number of sides",
            )
            .with_param(
                ParamSpec::number("sides", "Number of sides on the die")
                    .with_minimum(MIN_SIDES)
                    .with_default(DEFAULT_SIDES),
            ),
        );
        catalog.add(
            Tool::new(
                ToolNames::ROLL_MULTIPLE_DICE,
                "Roll multiple dice with specified number of sides",
            )
            .with_param(
                ParamSpec::number("count", "Number of dice to roll")
                    .with_minimum(MIN_COUNT)
                    .with_maximum(MAX_COUNT)
                    .required(),
            )
            .with_param(
                ParamSpec::number("sides", "Number of sides on each die")
                    .with_minimum(MIN_SIDES)
                    .with_default(DEFAULT_SIDES),
            ),
        );
        catalog
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// List all tool names in catalog order
    pub fn list(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Get all tools in catalog order
    pub fn all(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Add a tool, replacing any existing tool with the same name in place
    pub fn add(&mut self, tool: Tool) {
        match self.tools.iter_mut().find(|t| t.name == tool.name) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
