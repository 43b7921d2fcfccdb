//! Wires between component terminals.

use serde::Serialize;

use super::component::Component;
use super::schema::Position;

/// Color used when none is given
pub const DEFAULT_WIRE_COLOR: &str = "red";

/// A directed link from a terminal of one component to a terminal of another.
///
/// Endpoints are held by id only. Terminal names are free-form and are not
/// checked against the component kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    id: String,
    from_component_id: String,
    from_terminal: String,
    to_component_id: String,
    to_terminal: String,
    color: String,
    /// Routing points; always empty
    points: Vec<Position>,
    is_complete: bool,
}

impl Wire {
    pub fn new(
        from: &Component,
        from_terminal: impl Into<String>,
        to: &Component,
        to_terminal: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("w{}_{}", from.id(), to.id()),
            from_component_id: from.id().to_string(),
            from_terminal: from_terminal.into(),
            to_component_id: to.id().to_string(),
            to_terminal: to_terminal.into(),
            color: color.into(),
            points: Vec::new(),
            is_complete: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn from_component_id(&self) -> &str {
        &self.from_component_id
    }

    pub fn from_terminal(&self) -> &str {
        &self.from_terminal
    }

    pub fn to_component_id(&self) -> &str {
        &self.to_component_id
    }

    pub fn to_terminal(&self) -> &str {
        &self.to_terminal
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::component::{battery, bulb};

    #[test]
    fn test_wire_fields() {
        let b = battery("9v");
        let l = bulb("1.5v", "3v");
        let w = Wire::new(&b, "pos", &l, "anode", DEFAULT_WIRE_COLOR);

        assert_eq!(w.id(), format!("w{}_{}", b.id(), l.id()));
        assert_eq!(w.from_component_id(), b.id());
        assert_eq!(w.to_component_id(), l.id());
        assert_eq!(w.from_terminal(), "pos");
        assert_eq!(w.to_terminal(), "anode");
        assert_eq!(w.color(), "red");
        assert!(w.points().is_empty());
        assert!(w.is_complete());
    }

    #[test]
    fn test_wire_export_key_order() {
        let b = battery("5v");
        let w = Wire::new(&b, "neg", &b, "pos", "black");
        let dict = serde_json::to_value(&w).unwrap();

        let keys: Vec<&str> = dict.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "fromComponentId",
                "fromTerminal",
                "toComponentId",
                "toTerminal",
                "color",
                "points",
                "isComplete",
            ]
        );
        assert_eq!(dict["color"], "black");
    }
}
