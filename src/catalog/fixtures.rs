//! Launch network data for the static catalog

use chrono::NaiveDate;

use crate::models::{
    Battery, Bike, ChargingStation, Coordinates, DaySlots, ServiceCenter, Warehouse,
};
use crate::pricing::models::ServiceType;

const CENTRAL: Coordinates = Coordinates { lat: 40.7128, lng: -74.006 };
const MIDTOWN: Coordinates = Coordinates { lat: 40.7282, lng: -73.9942 };
const UPTOWN: Coordinates = Coordinates { lat: 40.7589, lng: -73.9851 };
const WESTSIDE: Coordinates = Coordinates { lat: 40.7549, lng: -74.0134 };

const PRO_5000: &str = "EcoSwap Pro 5000";
const ULTRA_7500: &str = "EcoSwap Ultra 7500";
const MAX_10000: &str = "EcoSwap Max 10000";

fn bike(id: u32, model: &str, battery_level: u8) -> Bike {
    Bike {
        id,
        model: model.to_string(),
        battery_level,
    }
}

/// October 2023 slot calendar, keyed by day of month
fn october_slots(days: &[(u32, &[&str])]) -> Vec<DaySlots> {
    days.iter()
        .filter_map(|(day, slots)| {
            NaiveDate::from_ymd_opt(2023, 10, *day).map(|date| DaySlots {
                date,
                slots: slots.iter().map(|s| s.to_string()).collect(),
            })
        })
        .collect()
}

pub(super) fn warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse {
            id: 1,
            name: "EcoSwap Central".to_string(),
            address: "123 Main St, Downtown".to_string(),
            distance_miles: 0.8,
            coordinates: CENTRAL,
            batteries: vec![
                Battery::new("BAT-101", PRO_5000, 92, 245, 128),
                Battery::new("BAT-102", PRO_5000, 87, 230, 215),
                Battery::new("BAT-103", ULTRA_7500, 95, 355, 85),
                Battery::new("BAT-104", ULTRA_7500, 65, 243, 612),
                Battery::new("BAT-105", MAX_10000, 89, 445, 320),
            ],
        },
        Warehouse {
            id: 2,
            name: "GreenPower Hub".to_string(),
            address: "456 Park Ave, Midtown".to_string(),
            distance_miles: 1.2,
            coordinates: MIDTOWN,
            batteries: vec![
                Battery::new("BAT-201", PRO_5000, 78, 195, 423),
                Battery::new("BAT-202", ULTRA_7500, 90, 338, 178),
                Battery::new("BAT-203", MAX_10000, 35, 175, 952),
            ],
        },
        Warehouse {
            id: 3,
            name: "ElectroSwap Station".to_string(),
            address: "789 Broadway, Uptown".to_string(),
            distance_miles: 2.5,
            coordinates: UPTOWN,
            batteries: vec![
                Battery::new("BAT-301", PRO_5000, 94, 250, 98),
                Battery::new("BAT-302", PRO_5000, 88, 235, 205),
                Battery::new("BAT-303", ULTRA_7500, 91, 340, 165),
                Battery::new("BAT-304", ULTRA_7500, 82, 310, 310),
                Battery::new("BAT-305", MAX_10000, 96, 480, 75),
            ],
        },
        Warehouse {
            id: 4,
            name: "PowerExchange Center".to_string(),
            address: "101 River Rd, Westside".to_string(),
            distance_miles: 3.1,
            coordinates: WESTSIDE,
            batteries: vec![
                Battery::new("BAT-401", PRO_5000, 68, 180, 520),
                Battery::new("BAT-402", ULTRA_7500, 72, 270, 480),
            ],
        },
    ]
}

pub(super) fn stations() -> Vec<ChargingStation> {
    vec![
        ChargingStation {
            id: 1,
            name: "EcoBike Central".to_string(),
            address: "123 Main St, Downtown".to_string(),
            distance_miles: 0.8,
            coordinates: CENTRAL,
            available_bikes: vec![
                bike(101, "Urban Cruiser", 95),
                bike(102, "City Commuter", 87),
                bike(103, "Eco Rider", 100),
            ],
        },
        ChargingStation {
            id: 2,
            name: "GreenRide Hub".to_string(),
            address: "456 Park Ave, Midtown".to_string(),
            distance_miles: 1.2,
            coordinates: MIDTOWN,
            available_bikes: vec![
                bike(201, "Mountain Explorer", 78),
                bike(202, "Urban Cruiser", 92),
            ],
        },
        ChargingStation {
            id: 3,
            name: "ElectroCycle Station".to_string(),
            address: "789 Broadway, Uptown".to_string(),
            distance_miles: 2.5,
            coordinates: UPTOWN,
            available_bikes: vec![
                bike(301, "City Commuter", 85),
                bike(302, "Eco Rider", 90),
                bike(303, "Urban Cruiser", 100),
                bike(304, "Mountain Explorer", 75),
            ],
        },
    ]
}

pub(super) fn service_centers() -> Vec<ServiceCenter> {
    use ServiceType::*;

    vec![
        ServiceCenter {
            id: 1,
            name: "EcoBike Service Hub".to_string(),
            address: "123 Main St, Downtown".to_string(),
            distance_miles: 0.7,
            rating: 4.8,
            reviews: 124,
            services: vec![GeneralService, BatteryRepair, TireReplacement, MotorTuning],
            available_slots: october_slots(&[
                (15, &["09:00", "11:30", "14:00", "16:30"]),
                (16, &["10:00", "13:00", "15:30", "17:00"]),
                (17, &["09:30", "12:00", "14:30", "16:00"]),
            ]),
            coordinates: CENTRAL,
        },
        ServiceCenter {
            id: 2,
            name: "GreenWheel Repairs".to_string(),
            address: "456 Park Ave, Midtown".to_string(),
            distance_miles: 1.4,
            rating: 4.6,
            reviews: 89,
            services: vec![GeneralService, BrakeAdjustment, DisplayRepair, SoftwareUpdate],
            available_slots: october_slots(&[
                (15, &["10:00", "12:30", "15:00"]),
                (16, &["09:00", "11:30", "14:00", "16:30"]),
                (17, &["10:30", "13:00", "15:30"]),
            ]),
            coordinates: MIDTOWN,
        },
        ServiceCenter {
            id: 3,
            name: "ElectroVelo Technicians".to_string(),
            address: "789 Broadway, Uptown".to_string(),
            distance_miles: 2.2,
            rating: 4.9,
            reviews: 156,
            services: vec![PremiumService, BatteryReplacement, MotorRepair, FrameRepair],
            available_slots: october_slots(&[
                (15, &["09:30", "12:00", "14:30", "17:00"]),
                (16, &["10:30", "13:00", "15:30"]),
                (17, &["09:00", "11:30", "14:00", "16:30"]),
            ]),
            coordinates: UPTOWN,
        },
        ServiceCenter {
            id: 4,
            name: "PowerPedal Service Center".to_string(),
            address: "101 River Rd, Westside".to_string(),
            distance_miles: 3.5,
            rating: 4.5,
            reviews: 72,
            services: vec![GeneralService, WheelAlignment, ControllerRepair, DiagnosticCheck],
            available_slots: october_slots(&[
                (15, &["10:00", "13:30", "16:00"]),
                (16, &["09:30", "12:00", "14:30", "17:00"]),
                (17, &["11:00", "13:30", "16:00"]),
            ]),
            coordinates: WESTSIDE,
        },
    ]
}
