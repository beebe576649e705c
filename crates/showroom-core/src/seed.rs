//! # Demo Seed Data
//!
//! The records every fresh session starts from when no seed file is
//! configured. Nothing is written back: each launch starts over from here.

use chrono::NaiveDate;

use crate::dashboard::{
    ActivityEntry, ActivityKind, DashboardSnapshot, DealerMetrics, ListingTime, PopularVehicle,
    RecentEdit, Trend,
};
use crate::price::Dollars;
use crate::profile::{Address, DealerProfile};
use crate::roster::{AuthorizedUser, Role, UserStatus};
use crate::types::{Condition, Status, VehicleRecord};

/// The two vehicles on the lot in the demo inventory.
pub fn demo_vehicles() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            id: "1".to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            price: Dollars::from_whole(28_500),
            mileage: 15_000,
            fuel_type: "Gasoline".to_string(),
            transmission: "Automatic".to_string(),
            condition: Condition::Used,
            color: "Silver".to_string(),
            description: "Excellent condition, single owner".to_string(),
            vin: "1HGBH41JXMN109186".to_string(),
            status: Status::Available,
        },
        VehicleRecord {
            id: "2".to_string(),
            make: "Honda".to_string(),
            model: "CR-V".to_string(),
            year: 2024,
            price: Dollars::from_whole(32_000),
            mileage: 5_000,
            fuel_type: "Gasoline".to_string(),
            transmission: "CVT".to_string(),
            condition: Condition::Certified,
            color: "Black".to_string(),
            description: "Like new, certified pre-owned".to_string(),
            vin: "2HGBH41JXMN109187".to_string(),
            status: Status::Available,
        },
    ]
}

/// The demo dealership profile.
pub fn demo_profile() -> DealerProfile {
    DealerProfile {
        dealership_name: "Premium Auto Sales".to_string(),
        email: "contact@premiumauto.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        website: "https://premiumauto.com".to_string(),
        address: Address {
            street: "123 Auto Drive".to_string(),
            city: "Motor City".to_string(),
            state: "Michigan".to_string(),
            zip_code: "48201".to_string(),
            country: "United States".to_string(),
        },
        logo: None,
        description: "Premium quality vehicles with exceptional service since 1995.".to_string(),
        established_year: "1995".to_string(),
        license_number: "DL-2024-001".to_string(),
    }
}

/// The demo team roster.
pub fn demo_team() -> Vec<AuthorizedUser> {
    vec![
        AuthorizedUser {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john@premiumauto.com".to_string(),
            role: Role::Admin,
            status: UserStatus::Active,
            last_login: NaiveDate::from_ymd_opt(2024, 1, 15),
        },
        AuthorizedUser {
            id: "2".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@premiumauto.com".to_string(),
            role: Role::Manager,
            status: UserStatus::Active,
            last_login: NaiveDate::from_ymd_opt(2024, 1, 14),
        },
        AuthorizedUser {
            id: "3".to_string(),
            name: "Mike Davis".to_string(),
            email: "mike@premiumauto.com".to_string(),
            role: Role::Sales,
            status: UserStatus::Pending,
            last_login: None,
        },
    ]
}

/// Traffic, activity and listing figures for the overview screen.
pub fn demo_dashboard() -> DashboardSnapshot {
    DashboardSnapshot {
        metrics: DealerMetrics {
            total_visits: 2_847,
            visits_trend: Trend::from_tenths(125),
            total_vehicles: 47,
            vehicles_trend: Trend::from_tenths(83),
            whatsapp_clicks: 156,
            whatsapp_trend: Trend::from_tenths(231),
            avg_time_spent_secs: 4 * 60 + 32,
            time_spent_trend: Trend::from_tenths(-23),
        },
        recent_activity: vec![
            activity(ActivityKind::Edit, "2023 Toyota Camry", "John Smith", 2),
            activity(ActivityKind::View, "2024 Honda CR-V", "Customer", 5),
            activity(ActivityKind::Whatsapp, "2022 Ford F-150", "Sarah Johnson", 12),
            activity(ActivityKind::Edit, "2023 BMW X5", "Mike Davis", 60),
            activity(ActivityKind::View, "2024 Tesla Model 3", "Customer", 120),
        ],
        popular_vehicles: vec![
            popular("2024 Honda CR-V", 234, 32_000, Status::Available),
            popular("2023 Toyota Camry", 198, 28_500, Status::Available),
            popular("2022 Ford F-150", 187, 45_000, Status::Pending),
            popular("2024 Tesla Model 3", 165, 38_000, Status::Available),
            popular("2023 BMW X5", 142, 65_000, Status::Available),
        ],
        recently_edited: vec![
            edit("2023 Toyota Camry", "John Smith", 2, "Price updated"),
            edit("2024 Honda Accord", "Sarah Johnson", 60, "Description added"),
            edit("2023 BMW X5", "Mike Davis", 120, "Photos uploaded"),
            edit("2022 Nissan Altima", "John Smith", 180, "Status changed"),
        ],
        time_spent: vec![
            listing_time("2024 Honda CR-V", 6 * 60 + 45, 234),
            listing_time("2023 Toyota Camry", 5 * 60 + 12, 198),
            listing_time("2022 Ford F-150", 4 * 60 + 38, 187),
            listing_time("2024 Tesla Model 3", 4 * 60 + 2, 165),
            listing_time("2023 BMW X5", 3 * 60 + 55, 142),
        ],
    }
}

fn activity(kind: ActivityKind, vehicle: &str, user: &str, minutes_ago: u32) -> ActivityEntry {
    ActivityEntry {
        kind,
        vehicle: vehicle.to_string(),
        user: user.to_string(),
        minutes_ago,
    }
}

fn popular(name: &str, views: u32, price: u64, status: Status) -> PopularVehicle {
    PopularVehicle {
        name: name.to_string(),
        views,
        price: Dollars::from_whole(price),
        status,
    }
}

fn edit(name: &str, edited_by: &str, minutes_ago: u32, change: &str) -> RecentEdit {
    RecentEdit {
        name: name.to_string(),
        edited_by: edited_by.to_string(),
        minutes_ago,
        change: change.to_string(),
    }
}

fn listing_time(vehicle: &str, avg_time_secs: u32, views: u32) -> ListingTime {
    ListingTime {
        vehicle: vehicle.to_string(),
        avg_time_secs,
        views,
    }
}
