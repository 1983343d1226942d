//! Pre-baked analytics datasets for the data panel
//!
//! Static numeric tables rendered client-side as bar, area, and pie
//! charts. No computation happens here beyond handing out literals.

use serde::Serialize;

/// Employment figures and year-over-year growth for one company
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompanyStat {
    pub name: &'static str,
    pub employees: u32,
    pub growth: f64,
}

/// One month of district-wide growth rate
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GrowthPoint {
    pub month: &'static str,
    pub growth: f64,
}

/// One slice of the sector distribution pie chart
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectorShare {
    pub name: &'static str,
    /// Share in percent
    pub value: u32,
    pub color: &'static str,
}

/// Headline key/value indicator shown in the overview card
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Indicator {
    pub label: &'static str,
    pub value: &'static str,
}

/// Upcoming event card content
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpcomingEvent {
    pub title: &'static str,
    pub venue: &'static str,
}

pub const EMPLOYMENT: &[CompanyStat] = &[
    CompanyStat { name: "Google", employees: 13000, growth: 8.5 },
    CompanyStat { name: "Microsoft", employees: 11000, growth: 7.2 },
    CompanyStat { name: "Amazon", employees: 15000, growth: 9.1 },
    CompanyStat { name: "Meta", employees: 4000, growth: 5.8 },
    CompanyStat { name: "TCS", employees: 25000, growth: 6.3 },
    CompanyStat { name: "Infosys", employees: 18000, growth: 7.5 },
    CompanyStat { name: "Wipro", employees: 12000, growth: 6.8 },
];

pub const MONTHLY_GROWTH: &[GrowthPoint] = &[
    GrowthPoint { month: "Jan", growth: 4.2 },
    GrowthPoint { month: "Feb", growth: 5.1 },
    GrowthPoint { month: "Mar", growth: 5.8 },
    GrowthPoint { month: "Apr", growth: 6.5 },
    GrowthPoint { month: "May", growth: 7.2 },
    GrowthPoint { month: "Jun", growth: 7.8 },
];

pub const SECTORS: &[SectorShare] = &[
    SectorShare { name: "IT Services", value: 45, color: "#06b6d4" },
    SectorShare { name: "Product Dev", value: 25, color: "#8b5cf6" },
    SectorShare { name: "Startups", value: 15, color: "#10b981" },
    SectorShare { name: "Consulting", value: 10, color: "#f59e0b" },
    SectorShare { name: "Others", value: 5, color: "#64748b" },
];

pub const KEY_INDICATORS: &[Indicator] = &[
    Indicator { label: "Total Tech Parks", value: "42+" },
    Indicator { label: "Innovation Hubs", value: "12" },
    Indicator { label: "Office Occupancy", value: "92%" },
    Indicator { label: "Total Workforce", value: "98K+" },
    Indicator { label: "Startups", value: "850+" },
    Indicator { label: "Avg. Salary", value: "₹12.5L" },
];

pub const UPCOMING_EVENT: UpcomingEvent = UpcomingEvent {
    title: "Global AI Summit 2025",
    venue: "HICC, Novotel Hyderabad",
};

/// The complete analytics payload served to the data panel
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    pub employment: &'static [CompanyStat],
    pub monthly_growth: &'static [GrowthPoint],
    pub sectors: &'static [SectorShare],
    pub key_indicators: &'static [Indicator],
    pub upcoming_event: UpcomingEvent,
}

/// Bundle all datasets for the `/api/analytics` endpoint
#[must_use]
pub fn snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        employment: EMPLOYMENT,
        monthly_growth: MONTHLY_GROWTH,
        sectors: SECTORS,
        key_indicators: KEY_INDICATORS,
        upcoming_event: UPCOMING_EVENT,
    }
}
