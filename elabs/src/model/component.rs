//! Components and their factory functions.
//!
//! Text arguments are always `&str`, optional ones `Option<&str>`; pass owned
//! strings with `as_str()` / `as_deref()`.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::schema::{ComponentKind, Position, Properties, PropertyValue};

/// A circuit element placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    id: String,

    #[serde(rename = "type")]
    kind: ComponentKind,

    pub position: Position,

    /// Rotation in degrees, unchecked
    pub rotation: i32,

    pub properties: Properties,

    /// Reserved for the visualizer; never filled in here
    connections: Vec<Value>,
}

impl Component {
    /// Create a component with a fresh id, at the origin, unrotated
    pub fn new(kind: ComponentKind, properties: Properties) -> Self {
        Self {
            id: format!("{}{}", kind.as_str(), Uuid::new_v4().simple()),
            kind,
            position: Position::default(),
            rotation: 0,
            properties,
            connections: Vec::new(),
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn connections(&self) -> &[Value] {
        &self.connections
    }

    /// Shorthand for `properties.get(key)`
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

fn build(kind: ComponentKind, entries: Vec<(&str, PropertyValue)>) -> Component {
    Component::new(kind, Properties::from_entries(entries))
}

pub fn battery(voltage: &str) -> Component {
    build(ComponentKind::Battery, vec![("voltage", voltage.into())])
}

pub fn bulb(minvolt: &str, maxvolt: &str) -> Component {
    build(
        ComponentKind::Bulb,
        vec![("minvolt", minvolt.into()), ("maxvolt", maxvolt.into())],
    )
}

/// LED, `color` defaults to `"red"`
pub fn led(color: Option<&str>) -> Component {
    build(ComponentKind::Led, vec![("color", color.unwrap_or("red").into())])
}

pub fn resistor(resistance: &str) -> Component {
    build(ComponentKind::Resistor, vec![("resistance", resistance.into())])
}

/// Switch, open unless `closed` is given
pub fn switch(closed: Option<bool>) -> Component {
    build(ComponentKind::Switch, vec![("closed", closed.unwrap_or(false).into())])
}

/// Buzzer, `frequency` defaults to `"1000"`
pub fn buzzer(frequency: Option<&str>) -> Component {
    build(
        ComponentKind::Buzzer,
        vec![("frequency", frequency.unwrap_or("1000").into())],
    )
}

/// Arduino Uno board. Empty sketch and stopped by default.
pub fn arduino(code: Option<&str>, is_running: Option<bool>) -> Component {
    build(
        ComponentKind::ArduinoUno,
        vec![
            ("code", code.unwrap_or("").into()),
            ("isRunning", is_running.unwrap_or(false).into()),
        ],
    )
}

pub fn capacitor(capacitance: &str) -> Component {
    build(ComponentKind::Capacitor, vec![("capacitance", capacitance.into())])
}

pub fn potentiometer(resistance: &str) -> Component {
    build(ComponentKind::Potentiometer, vec![("resistance", resistance.into())])
}

pub fn relay() -> Component {
    build(ComponentKind::Relay, Vec::new())
}

pub fn inductor(inductance: &str) -> Component {
    build(ComponentKind::Inductor, vec![("inductance", inductance.into())])
}

/// NPN transistor. `type_` defaults to `"NPN"`, `gain` to `"100"`.
pub fn transistor(type_: Option<&str>, gain: Option<&str>) -> Component {
    build(
        ComponentKind::TransistorNpn,
        vec![
            ("type", type_.unwrap_or("NPN").into()),
            ("gain", gain.unwrap_or("100").into()),
        ],
    )
}
