//! Pricing domain types.
//!
//! Tiers, the fixed service menu and the derived booking values the UI
//! displays. All of these are plain values with no storage behind them.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::errors::PricingError;

/// Health at or above which a battery is priced as premium
pub const PREMIUM_HEALTH_THRESHOLD: i32 = 90;

/// Health at or above which a battery is priced as standard
pub const STANDARD_HEALTH_THRESHOLD: i32 = 70;

/// Battery price bracket keyed by health percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Economy,
    Standard,
    Premium,
}

impl PriceTier {
    /// Tier for a health percentage (inclusive lower bounds)
    pub fn for_health(health_percentage: i32) -> Self {
        if health_percentage >= PREMIUM_HEALTH_THRESHOLD {
            PriceTier::Premium
        } else if health_percentage >= STANDARD_HEALTH_THRESHOLD {
            PriceTier::Standard
        } else {
            PriceTier::Economy
        }
    }

    /// Flat swap price for the tier
    pub fn price(self) -> Decimal {
        match self {
            PriceTier::Premium => dec!(2625),
            PriceTier::Standard => dec!(1875),
            PriceTier::Economy => dec!(1125),
        }
    }
}

/// Usage recommendation shown next to a battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageAdvice {
    /// Health below 50: should be retired or recycled
    Retire,
    /// Health 50-69: short trips only
    LimitedUse,
    Unrestricted,
}

impl UsageAdvice {
    pub fn for_health(health_percentage: i32) -> Self {
        if health_percentage < 50 {
            UsageAdvice::Retire
        } else if health_percentage < STANDARD_HEALTH_THRESHOLD {
            UsageAdvice::LimitedUse
        } else {
            UsageAdvice::Unrestricted
        }
    }
}

/// Services offered by service centers, with flat prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "General Service")]
    GeneralService,
    #[serde(rename = "Premium Service")]
    PremiumService,
    #[serde(rename = "Battery Repair")]
    BatteryRepair,
    #[serde(rename = "Battery Replacement")]
    BatteryReplacement,
    #[serde(rename = "Tire Replacement")]
    TireReplacement,
    #[serde(rename = "Brake Adjustment")]
    BrakeAdjustment,
    #[serde(rename = "Motor Tuning")]
    MotorTuning,
    #[serde(rename = "Motor Repair")]
    MotorRepair,
    #[serde(rename = "Display Repair")]
    DisplayRepair,
    #[serde(rename = "Software Update")]
    SoftwareUpdate,
    #[serde(rename = "Wheel Alignment")]
    WheelAlignment,
    #[serde(rename = "Controller Repair")]
    ControllerRepair,
    #[serde(rename = "Diagnostic Check")]
    DiagnosticCheck,
    #[serde(rename = "Frame Repair")]
    FrameRepair,
}

impl ServiceType {
    pub const ALL: [ServiceType; 14] = [
        ServiceType::GeneralService,
        ServiceType::PremiumService,
        ServiceType::BatteryRepair,
        ServiceType::BatteryReplacement,
        ServiceType::TireReplacement,
        ServiceType::BrakeAdjustment,
        ServiceType::MotorTuning,
        ServiceType::MotorRepair,
        ServiceType::DisplayRepair,
        ServiceType::SoftwareUpdate,
        ServiceType::WheelAlignment,
        ServiceType::ControllerRepair,
        ServiceType::DiagnosticCheck,
        ServiceType::FrameRepair,
    ];

    /// Display name, as used on the service menu
    pub fn name(self) -> &'static str {
        match self {
            ServiceType::GeneralService => "General Service",
            ServiceType::PremiumService => "Premium Service",
            ServiceType::BatteryRepair => "Battery Repair",
            ServiceType::BatteryReplacement => "Battery Replacement",
            ServiceType::TireReplacement => "Tire Replacement",
            ServiceType::BrakeAdjustment => "Brake Adjustment",
            ServiceType::MotorTuning => "Motor Tuning",
            ServiceType::MotorRepair => "Motor Repair",
            ServiceType::DisplayRepair => "Display Repair",
            ServiceType::SoftwareUpdate => "Software Update",
            ServiceType::WheelAlignment => "Wheel Alignment",
            ServiceType::ControllerRepair => "Controller Repair",
            ServiceType::DiagnosticCheck => "Diagnostic Check",
            ServiceType::FrameRepair => "Frame Repair",
        }
    }

    pub fn price(self) -> Decimal {
        match self {
            ServiceType::GeneralService => dec!(1500),
            ServiceType::PremiumService => dec!(2500),
            ServiceType::BatteryRepair => dec!(3000),
            ServiceType::BatteryReplacement => dec!(7500),
            ServiceType::TireReplacement => dec!(1200),
            ServiceType::BrakeAdjustment => dec!(800),
            ServiceType::MotorTuning => dec!(2000),
            ServiceType::MotorRepair => dec!(4500),
            ServiceType::DisplayRepair => dec!(1800),
            ServiceType::SoftwareUpdate => dec!(1000),
            ServiceType::WheelAlignment => dec!(1200),
            ServiceType::ControllerRepair => dec!(3500),
            ServiceType::DiagnosticCheck => dec!(750),
            ServiceType::FrameRepair => dec!(3000),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceType {
    type Err = PricingError;

    /// Exact match on the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|service| service.name() == s)
            .ok_or_else(|| PricingError::UnknownServiceType(s.to_string()))
    }
}

/// Return date and time derived from a pickup and a duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnSchedule {
    /// `YYYY-MM-DD`
    pub return_date: String,
    /// Zero-padded 24-hour `HH:MM`
    pub return_time: String,
}
