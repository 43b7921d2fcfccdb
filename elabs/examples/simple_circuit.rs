//! Simple circuit example: a battery lighting a bulb, printed as JSON.

use elabs::prelude::*;
use elabs::{battery, bulb};

fn main() -> Result<(), ElabsError> {
    let battery = battery("9v");
    let bulb = bulb("1.5v", "3v");

    let mut circuit = Circuit::new();
    circuit.add([&battery, &bulb]);
    circuit.connect(&battery, "pos", &bulb, "anode");

    println!("{}", circuit.to_json()?);

    if std::env::args().any(|arg| arg == "--show") {
        let options = ViewerOptions::from_env();
        circuit.show(Some(&options.frontend_url))?;
    }

    Ok(())
}
