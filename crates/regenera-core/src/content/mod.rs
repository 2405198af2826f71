//! Hard-coded site content
//!
//! Everything the views display lives here as static data; nothing is
//! fetched or persisted.

mod dashboard;
mod landing;
mod workspace;

pub use dashboard::{SecurityTile, Workspace, SECURITY_TILES, WORKSPACES};
pub use landing::{
    impact_metrics, ConsciousnessLayer, FooterColumn, Hero, ImpactMetric, JoinOption, Mission,
    Pod, PodStatus, FOOTER_COLUMNS, HERO, IMPACT_METRICS, JOIN_OPTIONS, LANGUAGES, LAYERS,
    MISSION, PODS, SOCIAL_LINKS,
};
pub use workspace::{
    timeline, AiModel, ImpactKpis, ModelStatus, RegionStatus, Sensor, SoilRegion, TimelineEntry,
    UserRole, WorkspaceTab, AI_MODELS, IMPACT_KPIS, SENSORS, SOIL_REGIONS,
};

/// Palette slot a piece of content is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Accent,
    Neon,
    Success,
    Warning,
    Innovation,
}
