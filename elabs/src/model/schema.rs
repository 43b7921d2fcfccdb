//! Circuit Schema Data Types
//!
//! Building blocks shared by components and wires: the closed set of
//! component kinds, canvas positions, and the per-kind property map.
//! Every type here serializes to the exact shape the web visualizer reads.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Kind of circuit element the visualizer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Battery,
    Bulb,
    Led,
    Resistor,
    Switch,
    Buzzer,
    ArduinoUno,
    Capacitor,
    Potentiometer,
    Relay,
    Inductor,
    TransistorNpn,
}

impl ComponentKind {
    /// All kinds, in catalogue order
    pub const ALL: [ComponentKind; 12] = [
        ComponentKind::Battery,
        ComponentKind::Bulb,
        ComponentKind::Led,
        ComponentKind::Resistor,
        ComponentKind::Switch,
        ComponentKind::Buzzer,
        ComponentKind::ArduinoUno,
        ComponentKind::Capacitor,
        ComponentKind::Potentiometer,
        ComponentKind::Relay,
        ComponentKind::Inductor,
        ComponentKind::TransistorNpn,
    ];

    /// Tag used in ids and in the exported `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Battery => "battery",
            ComponentKind::Bulb => "bulb",
            ComponentKind::Led => "led",
            ComponentKind::Resistor => "resistor",
            ComponentKind::Switch => "switch",
            ComponentKind::Buzzer => "buzzer",
            ComponentKind::ArduinoUno => "arduino-uno",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Potentiometer => "potentiometer",
            ComponentKind::Relay => "relay",
            ComponentKind::Inductor => "inductor",
            ComponentKind::TransistorNpn => "transistor-npn",
        }
    }

    /// Property keys every component of this kind carries, in export order
    pub fn property_names(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::Battery => &["voltage"],
            ComponentKind::Bulb => &["minvolt", "maxvolt"],
            ComponentKind::Led => &["color"],
            ComponentKind::Resistor => &["resistance"],
            ComponentKind::Switch => &["closed"],
            ComponentKind::Buzzer => &["frequency"],
            ComponentKind::ArduinoUno => &["code", "isRunning"],
            ComponentKind::Capacitor => &["capacitance"],
            ComponentKind::Potentiometer => &["resistance"],
            ComponentKind::Relay => &[],
            ComponentKind::Inductor => &["inductance"],
            ComponentKind::TransistorNpn => &["type", "gain"],
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position on the visualizer canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single property value: free-form text or an on/off flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Flag(bool),
    Text(String),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Flag(b) => write!(f, "{}", b),
            PropertyValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Flag(b)
    }
}

/// Named properties of a component.
///
/// Keys are fixed when the component is built and keep their insertion
/// order; only the values can change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, PropertyValue)>,
}

impl Properties {
    pub(crate) fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Replace the value of an existing key. Unknown keys are left alone
    /// and reported with `false`.
    pub fn set(&mut self, key: &str, value: impl Into<PropertyValue>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
