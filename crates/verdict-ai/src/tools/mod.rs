//! Tools module - named capabilities callable from the agent loop

mod calculator;
mod registry;
mod traits;

pub use calculator::CalculatorTool;
pub use registry::ToolRegistry;
pub use traits::Tool;
