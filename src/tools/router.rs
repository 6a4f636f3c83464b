//! Tool routing and execution
//!
//! Defines the ToolRouter trait the protocol layer talks to, and DiceToolRouter,
//! which validates arguments and rolls dice in-process.

use async_trait::async_trait;
use log::debug;
use rand::Rng;

use crate::dice::{DiceRolls, roll_die};
use crate::error::{DiceError, Result};

use super::args;
use super::catalog::{ToolCatalog, ToolNames};
use super::definition::Tool;
use super::invocation::{InvocationRequest, InvocationResult};

/// Trait for listing and invoking tools
#[async_trait]
pub trait ToolRouter: Send + Sync {
    /// Descriptors of every tool this router serves, in catalog order
    fn tools(&self) -> Vec<Tool>;

    /// Execute one invocation
    async fn invoke(&self, request: InvocationRequest) -> Result<InvocationResult>;
}

/// Router serving the dice tools
#[derive(Debug, Clone)]
pub struct DiceToolRouter {
    catalog: ToolCatalog,
}

impl DiceToolRouter {
    /// Create a router over the given catalog
    pub fn new(catalog: ToolCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this router resolves names against
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Resolve, validate and execute a request with the given random source.
    pub fn dispatch<R: Rng>(
        &self,
        request: &InvocationRequest,
        rng: &mut R,
    ) -> Result<InvocationResult> {
        if !self.catalog.contains(&request.name) {
            return Err(DiceError::UnknownTool(request.name.clone()));
        }

        match request.name.as_str() {
            ToolNames::ROLL_DICE => {
                let sides = args::sides(&request.arguments)?;
                let result = roll_die(rng, sides);
                debug!("roll_dice d{} -> {}", sides, result);
                Ok(InvocationResult::text(format!("🎲 Rolled a d{}: {}", sides, result)))
            }

            ToolNames::ROLL_MULTIPLE_DICE => {
                let count = args::count(&request.arguments)?;
                let sides = args::sides(&request.arguments)?;
                let rolls = DiceRolls::roll(rng, count, sides);
                debug!("roll_multiple_dice {}d{} -> {}", count, sides, rolls.total());
                Ok(InvocationResult::text(format!(
                    "🎲 Rolled {}d{}:\nIndividual rolls: {}\nTotal: {}",
                    count,
                    sides,
                    rolls.joined(),
                    rolls.total()
                )))
            }

            // Catalogued but without a handler
            _ => Err(DiceError::UnknownTool(request.name.clone())),
        }
    }
}

impl Default for DiceToolRouter {
    fn default() -> Self {
        Self::new(ToolCatalog::dice())
    }
}

#[async_trait]
impl ToolRouter for DiceToolRouter {
    fn tools(&self) -> Vec<Tool> {
        self.catalog.all().cloned().collect()
    }

    async fn invoke(&self, request: InvocationRequest) -> Result<InvocationResult> {
        self.dispatch(&request, &mut rand::rng())
    }
}
