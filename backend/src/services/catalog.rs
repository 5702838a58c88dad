//! Static registry of the farm and its plots

use shared::{CropType, Farm, IrrigationProfile, Plot, PlotThresholds, PublicPlot, SoilType};

/// The farm and its plots in registration order.
///
/// The position of a plot in the catalog is its synthesis seed offset.
/// The catalog is never empty; the first plot is the default.
#[derive(Debug, Clone)]
pub struct PlotCatalog {
    farm: Farm,
    plots: Vec<Plot>,
}

impl PlotCatalog {
    pub fn farm(&self) -> &Farm {
        &self.farm
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    pub fn default_plot(&self) -> &Plot {
        &self.plots[0]
    }

    pub fn public_plots(&self) -> Vec<PublicPlot> {
        self.plots.iter().map(Plot::to_public).collect()
    }

    /// Look up a plot and its catalog index.
    /// Missing or unknown ids fall back to the default plot.
    pub fn resolve(&self, plot_id: Option<&str>) -> (usize, &Plot) {
        let found = plot_id.and_then(|id| self.plots.iter().position(|plot| plot.id == id));

        match found {
            Some(index) => (index, &self.plots[index]),
            None => {
                if let Some(id) = plot_id {
                    tracing::debug!(plot_id = id, "Unknown plot id, using default plot");
                }
                (0, self.default_plot())
            }
        }
    }
}

impl Default for PlotCatalog {
    fn default() -> Self {
        Self {
            farm: Farm {
                id: "farm_atlas".to_string(),
                name: "Ferme Atlas".to_string(),
                location: "Meknes, Maroc".to_string(),
            },
            plots: vec![
                Plot {
                    id: "plot_olive_north".to_string(),
                    name: "Parcelle Oliviers Nord".to_string(),
                    crop_type: CropType::Olive,
                    soil_type: SoilType::Loam,
                    area_ha: 2.4,
                    station_name: "Station Nord".to_string(),
                    temp_bias: 0.3,
                    thresholds: PlotThresholds {
                        moisture_min: 34,
                        moisture_target: 44,
                        heat_stress_temp: 32,
                    },
                    irrigation_profile: IrrigationProfile {
                        base_minutes: 28,
                        recovery_rate: 9.6,
                    },
                },
                Plot {
                    id: "plot_citrus_central".to_string(),
                    name: "Parcelle Agrumes Centre".to_string(),
                    crop_type: CropType::Citrus,
                    soil_type: SoilType::Clay,
                    area_ha: 1.9,
                    station_name: "Station Centrale".to_string(),
                    temp_bias: 0.8,
                    thresholds: PlotThresholds {
                        moisture_min: 38,
                        moisture_target: 50,
                        heat_stress_temp: 31,
                    },
                    irrigation_profile: IrrigationProfile {
                        base_minutes: 34,
                        recovery_rate: 8.5,
                    },
                },
                Plot {
                    id: "plot_wheat_south".to_string(),
                    name: "Parcelle Ble Sud".to_string(),
                    crop_type: CropType::Wheat,
                    soil_type: SoilType::Sandy,
                    area_ha: 3.2,
                    station_name: "Station Sud".to_string(),
                    temp_bias: 1.1,
                    thresholds: PlotThresholds {
                        moisture_min: 28,
                        moisture_target: 38,
                        heat_stress_temp: 30,
                    },
                    irrigation_profile: IrrigationProfile {
                        base_minutes: 21,
                        recovery_rate: 10.3,
                    },
                },
            ],
        }
    }
}
