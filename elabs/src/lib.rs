//! elabs - build electronic circuits in code and view them in the browser
//!
//! Components are created with factory functions, wired together in a
//! [`Circuit`], and exported with [`Circuit::to_dict`] for the elabs web
//! visualizer.
//!
//! # Quick Start
//!
//! ```no_run
//! use elabs::{battery, bulb, Circuit};
//!
//! let battery = battery("9v");
//! let bulb = bulb("1.5v", "3v");
//!
//! let mut circuit = Circuit::new();
//! circuit.add([&battery, &bulb]);
//! circuit.connect(&battery, "pos", &bulb, "anode");
//!
//! println!("{}", circuit.to_json().unwrap());
//! circuit.show(None).unwrap();
//! ```
//!
//! # Features
//!
//! - **Component factories**: battery, bulb, LED, resistor, switch, buzzer,
//!   Arduino Uno, capacitor, potentiometer, relay, inductor, NPN transistor
//! - **Export**: a fixed JSON shape with insertion order preserved
//! - **Viewer**: open the frontend (or any URL) in the default browser
//! - **File locator**: copy the first file with a given extension out of a tree

pub mod core;
pub mod model;
pub mod viewer;

// Re-export main types
pub use crate::core::{
    copy_first_by_extension, download_file_by_extension, find_first_by_extension,
    view_on_website, view_on_website_with, ElabsError, ViewerOptions, FRONTEND_URL_ENV,
};
pub use model::component::{
    arduino, battery, bulb, buzzer, capacitor, inductor, led, potentiometer, relay, resistor,
    switch, transistor, Component,
};
pub use model::{
    Circuit, CircuitStats, ComponentKind, Position, Properties, PropertyValue, Wire,
    DEFAULT_WIRE_COLOR,
};
pub use viewer::{Launcher, SystemBrowser, DEFAULT_FRONTEND_URL};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Circuit, Component, ComponentKind, ElabsError, Launcher, PropertyValue, ViewerOptions,
        Wire,
    };
}
