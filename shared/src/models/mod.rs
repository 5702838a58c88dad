//! Domain models for the IrriSmart analytics platform

mod alert;
mod decision;
mod intelligence;
mod plot;
mod recommendation;
mod report;
mod sensor;
mod simulation;
mod soil_health;
mod trend;

pub use alert::*;
pub use decision::*;
pub use intelligence::*;
pub use plot::*;
pub use recommendation::*;
pub use report::*;
pub use sensor::*;
pub use simulation::*;
pub use soil_health::*;
pub use trend::*;
