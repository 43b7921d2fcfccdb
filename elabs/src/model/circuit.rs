//! Circuit Aggregate
//!
//! A circuit is an ordered list of components plus an ordered list of
//! wires. It grows through [`Circuit::add`] and [`Circuit::connect`] and is
//! exported with [`Circuit::to_dict`], the only format the web visualizer
//! depends on:
//!
//! ```text
//! {
//!   "components": [ {id, type, position:{x,y}, rotation, properties:{...}, connections:[]}, ... ],
//!   "wires": [ {id, fromComponentId, fromTerminal, toComponentId, toTerminal, color, points:[], isComplete:true}, ... ]
//! }
//! ```

use serde::Serialize;
use serde_json::Value;

use super::component::Component;
use super::wire::{Wire, DEFAULT_WIRE_COLOR};
use crate::core::ElabsError;
use crate::viewer::{Launcher, SystemBrowser, DEFAULT_FRONTEND_URL};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Circuit {
    components: Vec<Component>,
    wires: Vec<Wire>,
}

impl Circuit {
    /// Create a new empty circuit
    pub fn new() -> Self {
        Self::default()
    }

    /// Append components in argument order.
    ///
    /// No membership check: adding the same component twice stores it twice.
    pub fn add<'a, I>(&mut self, components: I)
    where
        I: IntoIterator<Item = &'a Component>,
    {
        self.components.extend(components.into_iter().cloned());
    }

    /// Wire `from_terminal` of `from` to `to_terminal` of `to` in the default color
    pub fn connect(
        &mut self,
        from: &Component,
        from_terminal: &str,
        to: &Component,
        to_terminal: &str,
    ) -> &Wire {
        self.connect_with_color(from, from_terminal, to, to_terminal, DEFAULT_WIRE_COLOR)
    }

    /// Same as [`Circuit::connect`] with an explicit wire color.
    ///
    /// Neither endpoint has to be a member of this circuit.
    pub fn connect_with_color(
        &mut self,
        from: &Component,
        from_terminal: &str,
        to: &Component,
        to_terminal: &str,
        color: &str,
    ) -> &Wire {
        let index = self.wires.len();
        self.wires
            .push(Wire::new(from, from_terminal, to, to_terminal, color));
        &self.wires[index]
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// First component with the given id
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn stats(&self) -> CircuitStats {
        CircuitStats {
            component_count: self.components.len(),
            wire_count: self.wires.len(),
        }
    }

    /// Export to the visualizer's dictionary shape, preserving insertion order
    /// of components, wires, and every object's keys.
    pub fn to_dict(&self) -> Result<Value, ElabsError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-printed JSON of the same shape as [`Circuit::to_dict`]
    pub fn to_json(&self) -> Result<String, ElabsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Open the visualizer in the default browser.
    ///
    /// Only navigates to the frontend; the circuit itself is not sent.
    pub fn show(&self, frontend_url: Option<&str>) -> Result<(), ElabsError> {
        self.show_with(frontend_url, &SystemBrowser)
    }

    pub fn show_with(
        &self,
        frontend_url: Option<&str>,
        launcher: &dyn Launcher,
    ) -> Result<(), ElabsError> {
        let url = frontend_url.unwrap_or(DEFAULT_FRONTEND_URL);
        tracing::info!(
            "Opening circuit viewer at {} ({} components, {} wires)",
            url,
            self.components.len(),
            self.wires.len()
        );
        launcher.open(url)
    }
}

/// Statistics about a circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircuitStats {
    pub component_count: usize,
    pub wire_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::model::component::{battery, bulb, led, resistor};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: RefCell<Vec<String>>,
    }

    impl Launcher for RecordingLauncher {
        fn open(&self, url: &str) -> Result<(), ElabsError> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct NoBrowser;

    impl Launcher for NoBrowser {
        fn open(&self, url: &str) -> Result<(), ElabsError> {
            Err(ElabsError::Browser {
                url: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
            })
        }
    }

    fn create_test_circuit() -> (Circuit, Component, Component) {
        let b = battery("9v");
        let l = bulb("1.5v", "3v");
        let mut circuit = Circuit::new();
        circuit.add([&b, &l]);
        circuit.connect(&b, "pos", &l, "anode");
        (circuit, b, l)
    }

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new();
        assert_eq!(circuit.to_dict().unwrap(), json!({ "components": [], "wires": [] }));
        assert_eq!(circuit.stats(), CircuitStats { component_count: 0, wire_count: 0 });
    }

    #[test]
    fn test_add_preserves_order() {
        let (circuit, b, l) = create_test_circuit();
        let dict = circuit.to_dict().unwrap();
        let comps = dict["components"].as_array().unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0]["id"], b.id());
        assert_eq!(comps[1]["id"], l.id());
        assert_eq!(comps[0]["type"], "battery");
        assert_eq!(comps[1]["properties"], json!({ "minvolt": "1.5v", "maxvolt": "3v" }));
    }

    #[test]
    fn test_connect_produces_wire() {
        let (circuit, b, l) = create_test_circuit();
        let dict = circuit.to_dict().unwrap();
        let wires = dict["wires"].as_array().unwrap();
        assert_eq!(wires.len(), 1);
        assert_eq!(wires[0]["fromComponentId"], b.id());
        assert_eq!(wires[0]["toComponentId"], l.id());
        assert_eq!(wires[0]["fromTerminal"], "pos");
        assert_eq!(wires[0]["toTerminal"], "anode");
        assert_eq!(wires[0]["color"], "red");
        assert_eq!(wires[0]["points"], json!([]));
        assert_eq!(wires[0]["isComplete"], true);
    }

    #[test]
    fn test_connect_outside_members() {
        let mut circuit = Circuit::new();
        let r = resistor("220");
        let d = led(Some("blue"));
        let wire = circuit.connect_with_color(&r, "b", &d, "cathode", "black");
        assert_eq!(wire.color(), "black");
        assert_eq!(circuit.stats(), CircuitStats { component_count: 0, wire_count: 1 });
    }

    #[test]
    fn test_duplicate_add() {
        let b = battery("9v");
        let mut circuit = Circuit::new();
        circuit.add([&b]);
        circuit.add([&b]);
        assert_eq!(circuit.components().len(), 2);
        assert_eq!(circuit.components()[0].id(), circuit.components()[1].id());
        assert_eq!(circuit.component(b.id()), Some(&b));
    }

    #[test]
    fn test_export_is_idempotent() {
        let (circuit, _, _) = create_test_circuit();
        assert_eq!(circuit.to_dict().unwrap(), circuit.to_dict().unwrap());
    }

    #[test]
    fn test_serialize_matches_dict() {
        let (circuit, _, _) = create_test_circuit();
        let json = circuit.to_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, circuit.to_dict().unwrap());
    }

    #[test]
    fn test_dict_and_json_agree_on_key_order() {
        let mut circuit = Circuit::new();
        circuit.add([&bulb("1.5v", "3v")]);

        let from_dict = serde_json::to_string(&circuit.to_dict().unwrap()).unwrap();
        let direct = serde_json::to_string(&circuit).unwrap();
        assert_eq!(from_dict, direct);
        assert!(from_dict.contains(r#""properties":{"minvolt":"1.5v","maxvolt":"3v"}"#));

        let id_at = from_dict.find(r#""id""#).unwrap();
        let connections_at = from_dict.find(r#""connections""#).unwrap();
        assert!(id_at < connections_at);
    }

    #[test]
    fn test_show_default_url() {
        let (circuit, _, _) = create_test_circuit();
        let launcher = RecordingLauncher::default();
        circuit.show_with(None, &launcher).unwrap();
        circuit.show_with(Some("https://example.test/editor"), &launcher).unwrap();
        assert_eq!(
            *launcher.opened.borrow(),
            vec![DEFAULT_FRONTEND_URL.to_string(), "https://example.test/editor".to_string()]
        );
    }

    #[test]
    fn test_show_propagates_failure() {
        let (circuit, _, _) = create_test_circuit();
        let err = circuit.show_with(None, &NoBrowser).unwrap_err();
        assert!(matches!(err, ElabsError::Browser { .. }));
    }
}
