//! Farm and plot models

use serde::{Deserialize, Serialize};

/// The farm operating the plots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: String,
    pub name: String,
    pub location: String,
}

/// An irrigated plot with its own crop, soil and sensor station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plot {
    pub id: String,
    pub name: String,
    pub crop_type: CropType,
    pub soil_type: SoilType,
    /// Area in hectares
    pub area_ha: f64,
    pub station_name: String,
    /// Offset (°C) added to synthesized air temperature
    pub temp_bias: f64,
    pub thresholds: PlotThresholds,
    pub irrigation_profile: IrrigationProfile,
}

impl Plot {
    /// Outward view of the plot, without station and irrigation internals
    pub fn to_public(&self) -> PublicPlot {
        PublicPlot {
            id: self.id.clone(),
            name: self.name.clone(),
            crop_type: self.crop_type,
            soil_type: self.soil_type,
            area_ha: self.area_ha,
            thresholds: self.thresholds.clone(),
        }
    }
}

/// Agronomic thresholds for a plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotThresholds {
    /// Soil moisture (%) below which the crop is under water stress
    pub moisture_min: i32,
    pub moisture_target: i32,
    /// Air temperature (°C) from which heat stress starts
    pub heat_stress_temp: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationProfile {
    pub base_minutes: i32,
    /// Moisture points recovered by one irrigation cycle
    pub recovery_rate: f64,
}

/// Public plot view returned by the catalog and context blocks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicPlot {
    pub id: String,
    pub name: String,
    pub crop_type: CropType,
    pub soil_type: SoilType,
    pub area_ha: f64,
    pub thresholds: PlotThresholds,
}

/// Crops grown on the farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Olive,
    Citrus,
    Wheat,
}

impl CropType {
    /// Relative water demand applied to evapotranspiration
    pub fn water_factor(&self) -> f64 {
        match self {
            CropType::Olive => 0.96,
            CropType::Citrus => 1.16,
            CropType::Wheat => 0.87,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Olive => "olive",
            CropType::Citrus => "citrus",
            CropType::Wheat => "wheat",
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
}

impl SoilType {
    /// Share of rainfall retained by the soil
    pub fn retention_factor(&self) -> f64 {
        match self {
            SoilType::Clay => 1.17,
            SoilType::Loam => 1.0,
            SoilType::Sandy => 0.84,
        }
    }

    /// Multiplier on moisture drain; sandy soils drain faster
    pub fn drainage_modifier(&self) -> f64 {
        match self {
            SoilType::Sandy => 1.06,
            SoilType::Clay | SoilType::Loam => 0.94,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Loam => "loam",
            SoilType::Sandy => "sandy",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
