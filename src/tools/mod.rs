//! Tool System - tool definitions, the dice catalog, argument coercion and routing

pub mod args;
mod catalog;
mod definition;
mod invocation;
mod router;

pub use catalog::{DEFAULT_SIDES, MAX_COUNT, MIN_COUNT, MIN_SIDES, ToolCatalog, ToolNames};
pub use definition::{ParamSpec, ParamType, Tool};
pub use invocation::{Content, InvocationRequest, InvocationResult};
pub use router::{DiceToolRouter, ToolRouter};
