//! Tool registry for managing available tools

use std::collections::HashMap;
use std::sync::Arc;

use crate::tools::traits::Tool;

/// Registry for managing available tools.
///
/// Names are unique under case-insensitive comparison; lookup is a
/// case-insensitive exact match. Read-only after startup.
pub struct ToolRegistry {
    // Registration order, preserved for prompt listing.
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    /// Register a tool from Arc. A tool with the same name (ignoring
    /// case) replaces the earlier registration.
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let key = tool.name().to_lowercase();
        match self.by_name.get(&key) {
            Some(&index) => self.tools[index] = tool,
            None => {
                self.by_name.insert(key, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Get a tool by name, ignoring case
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| self.tools[index].clone())
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// `"name: description"` lines in registration order, for the
    /// system prompt
    pub fn descriptions(&self) -> Vec<String> {
        self.tools
            .iter()
            .map(|t| format!("{}: {}", t.name(), t.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
