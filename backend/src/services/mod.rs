//! Analytics pipeline for the IrriSmart irrigation dashboard
//!
//! Everything here is synchronous and pure apart from the engine's
//! per-plot history cache.

pub mod alerts;
pub mod catalog;
pub mod decision_log;
pub mod engine;
pub mod forecast;
pub mod history;
pub mod intelligence;
pub mod narrative;
pub mod plot_state;
pub mod queries;
pub mod recommendation;
pub mod simulation;
pub mod soil_health;
pub mod stats;
pub mod trends;

pub use catalog::PlotCatalog;
pub use engine::AnalyticsEngine;
pub use plot_state::{GlobalContext, PlotState};
pub use queries::{
    AlertsDocument, DashboardDocument, FarmPlotsDocument, RecommendationDocument,
    ReportsDocument, SensorHistoryDocument, SimulationDocument,
};
