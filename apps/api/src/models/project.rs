#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Caller-supplied project metadata the engine works from.
///
/// Every field except `name` is optional and `name` itself may be empty —
/// the engine substitutes defaults rather than failing on thin input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl ProjectContext {
    /// Minimal context for tests and examples: a name and a tech stack.
    pub fn new(name: impl Into<String>, tech_stack: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tech_stack,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_only_a_name() {
        let project: ProjectContext = serde_json::from_str(r#"{"name": "Chat App"}"#).unwrap();
        assert_eq!(project.name, "Chat App");
        assert!(project.tech_stack.is_empty());
        assert!(project.description.is_none());
    }

    #[test]
    fn test_deserializes_fully_populated() {
        let json = r#"{
            "name": "Chat App",
            "description": "Realtime chat",
            "problem": "Teams lose context in email threads",
            "solution": "Persistent channels with search",
            "architecture": "React SPA over a Node.js websocket gateway",
            "challenges": "Backpressure on fanout",
            "techStack": ["React", "Node.js", "Redis"]
        }"#;
        let project: ProjectContext = serde_json::from_str(json).unwrap();
        assert_eq!(project.tech_stack.len(), 3);
        assert_eq!(project.architecture.as_deref().unwrap(), "React SPA over a Node.js websocket gateway");
    }

    #[test]
    fn test_tolerates_missing_name() {
        // Thin input degrades; it must never fail deserialization.
        let project: ProjectContext = serde_json::from_str(r#"{"techStack": []}"#).unwrap();
        assert!(project.name.is_empty());
    }
}
