//! Mock data for the ecosystem healing workspace

use chrono::NaiveDate;

use crate::interaction::TabSet;

/// Panels of the ecosystem workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    #[default]
    SoilData,
    AiModels,
    ImpactKpis,
    RestorationTracking,
}

impl TabSet for WorkspaceTab {
    const ALL: &'static [Self] = &[
        WorkspaceTab::SoilData,
        WorkspaceTab::AiModels,
        WorkspaceTab::ImpactKpis,
        WorkspaceTab::RestorationTracking,
    ];

    fn id(&self) -> &'static str {
        match self {
            WorkspaceTab::SoilData => "soil-data",
            WorkspaceTab::AiModels => "ai-models",
            WorkspaceTab::ImpactKpis => "impact-kpis",
            WorkspaceTab::RestorationTracking => "restoration-tracking",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::SoilData => "Live Soil Data",
            WorkspaceTab::AiModels => "AI Models",
            WorkspaceTab::ImpactKpis => "Impact KPIs",
            WorkspaceTab::RestorationTracking => "Restoration Tracking",
        }
    }
}

/// Mock role of the signed-in member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Team,
    Auditor,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Team => "Team Member",
            UserRole::Auditor => "Auditor",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UserRole::Team => UserRole::Auditor,
            UserRole::Auditor => UserRole::Team,
        }
    }

    /// Team members may run simulations and export sensor data
    pub fn can_operate(&self) -> bool {
        *self == UserRole::Team
    }

    /// Auditors verify timeline entries
    pub fn can_verify(&self) -> bool {
        *self == UserRole::Auditor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatus {
    Healthy,
    Improving,
    Healing,
}

impl RegionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RegionStatus::Healthy => "healthy",
            RegionStatus::Improving => "improving",
            RegionStatus::Healing => "healing",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SoilRegion {
    pub id: &'static str,
    pub name: &'static str,
    pub ph: f64,
    /// Percent
    pub moisture: u32,
    /// Percent organic carbon
    pub carbon: f64,
    pub status: RegionStatus,
}

pub const SOIL_REGIONS: &[SoilRegion] = &[
    SoilRegion { id: "pod-a1", name: "Pod A1 - Forest Edge", ph: 6.8, moisture: 32, carbon: 4.2, status: RegionStatus::Healthy },
    SoilRegion { id: "pod-a2", name: "Pod A2 - Creek Valley", ph: 7.1, moisture: 28, carbon: 3.8, status: RegionStatus::Improving },
    SoilRegion { id: "pod-b1", name: "Pod B1 - Hill Slope", ph: 6.5, moisture: 24, carbon: 3.1, status: RegionStatus::Healing },
];

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    pub id: &'static str,
    pub kind: &'static str,
    pub value: f64,
    pub location: &'static str,
    pub last_update: &'static str,
}

pub const SENSORS: &[Sensor] = &[
    Sensor { id: "sensor-001", kind: "pH", value: 6.8, location: "Pod A1", last_update: "2 minutes ago" },
    Sensor { id: "sensor-002", kind: "Moisture", value: 32.0, location: "Pod A1", last_update: "1 minute ago" },
    Sensor { id: "sensor-003", kind: "Carbon", value: 4.2, location: "Pod A1", last_update: "3 minutes ago" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Ready,
    Training,
}

impl ModelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModelStatus::Ready => "ready",
            ModelStatus::Training => "training",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AiModel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: ModelStatus,
}

pub const AI_MODELS: &[AiModel] = &[
    AiModel {
        id: "fungal-net-v2",
        name: "Fungal Network Restoration v2",
        description: "Advanced mycelial network regeneration",
        status: ModelStatus::Ready,
    },
    AiModel {
        id: "soil-carbon-pred",
        name: "Soil Carbon Predictor",
        description: "Carbon sequestration forecasting",
        status: ModelStatus::Training,
    },
    AiModel {
        id: "biodiversity-optimizer",
        name: "Biodiversity Optimizer",
        description: "Species reintroduction planning",
        status: ModelStatus::Ready,
    },
];

impl AiModel {
    pub fn find(id: &str) -> Option<&'static AiModel> {
        AI_MODELS.iter().find(|model| model.id == id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImpactKpis {
    pub hectares_restored: u64,
    pub biodiversity_index: f64,
    /// Tonnes of CO₂
    pub carbon_sequestered: u64,
    pub projects_active: u32,
    pub communities_engaged: u32,
}

pub const IMPACT_KPIS: ImpactKpis = ImpactKpis {
    hectares_restored: 1_247_000,
    biodiversity_index: 0.84,
    carbon_sequestered: 15_600,
    projects_active: 23,
    communities_engaged: 156,
};

#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub event: &'static str,
    pub user: &'static str,
    pub status: &'static str,
    pub verified: bool,
}

/// Restoration log, newest first
pub fn timeline() -> Vec<TimelineEntry> {
    [
        ((2025, 7, 25), "Pod A1 Soil Inoculation", "Dr. Nova", true),
        ((2025, 7, 24), "Spore Density Analysis", "AI System", true),
        ((2025, 7, 23), "Mycorrhizal Mapping", "Field Team", false),
        ((2025, 7, 22), "Baseline pH Measurement", "Dr. Nova", true),
    ]
    .into_iter()
    .filter_map(|((y, m, d), event, user, verified)| {
        Some(TimelineEntry {
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            event,
            user,
            status: "completed",
            verified,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_newest_first() {
        let entries = timeline();
        assert_eq!(entries.len(), 4);
        assert!(entries.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(entries.iter().filter(|entry| !entry.verified).count(), 1);
    }

    #[test]
    fn test_role_permissions() {
        assert!(UserRole::Team.can_operate());
        assert!(!UserRole::Team.can_verify());
        assert!(UserRole::Auditor.can_verify());
        assert_eq!(UserRole::Team.toggled(), UserRole::Auditor);
    }

    #[test]
    fn test_find_model() {
        assert_eq!(AiModel::find("soil-carbon-pred").map(|m| m.status), Some(ModelStatus::Training));
        assert!(AiModel::find("gpt").is_none());
    }
}
