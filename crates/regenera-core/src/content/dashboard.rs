use super::Accent;

/// Security verification tile in the dashboard header card
#[derive(Debug, Clone, Copy)]
pub struct SecurityTile {
    pub title: &'static str,
    pub state: &'static str,
    pub accent: Accent,
}

pub const SECURITY_TILES: &[SecurityTile] = &[
    SecurityTile { title: "Global Identity", state: "Verified", accent: Accent::Primary },
    SecurityTile { title: "Biometric Layer", state: "Ready", accent: Accent::Accent },
    SecurityTile { title: "Cognitive Consent", state: "Enabled", accent: Accent::Neon },
    SecurityTile { title: "Commons License", state: "Active", accent: Accent::Innovation },
];

/// Collaboration environment listed on the dashboard
#[derive(Debug, Clone, Copy)]
pub struct Workspace {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub access: &'static str,
    pub accent: Accent,
    pub features: [&'static str; 4],
}

impl Workspace {
    /// Only the ecosystem workspace is built; the others announce themselves as coming soon
    pub fn is_enterable(&self) -> bool {
        self.id == "ecosystem"
    }

    /// First word of the access line, shown as a badge
    pub fn access_badge(&self) -> &'static str {
        self.access.split(' ').next().unwrap_or(self.access)
    }
}

pub const WORKSPACES: &[Workspace] = &[
    Workspace {
        id: "ecosystem",
        title: "Ecosystem Healing",
        description: "Soil regeneration, biodiversity metrics, AI restoration models",
        access: "MycoGrid Pod Teams + Auditors",
        accent: Accent::Accent,
        features: ["Live soil data", "AI restoration models", "Impact KPIs", "Restoration tracking"],
    },
    Workspace {
        id: "longevity",
        title: "Human Longevity Lab",
        description: "Organ scaffolds, regenerative medicine, patient protocols",
        access: "RegeneraLimb Guilds + Clinicians",
        accent: Accent::Primary,
        features: ["Organ blueprints", "Patient logs", "Treatment protocols", "Research data"],
    },
    Workspace {
        id: "energy",
        title: "Energy Consciousness Grid",
        description: "Quantum solar output, carbon credits, energy distribution",
        access: "HelioCore Engineers + Cooperatives",
        accent: Accent::Neon,
        features: ["Solar output", "Carbon credits", "Grid optimization", "Energy trading"],
    },
    Workspace {
        id: "habitat",
        title: "Habitat Design Nodes",
        description: "City growth metrics, self-repair systems, biome integration",
        access: "Skygrid Architects + Biome AI",
        accent: Accent::Innovation,
        features: ["Growth metrics", "Self-repair status", "Biome data", "Design patterns"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ecosystem_is_enterable() {
        let enterable: Vec<&str> = WORKSPACES
            .iter()
            .filter(|workspace| workspace.is_enterable())
            .map(|workspace| workspace.id)
            .collect();
        assert_eq!(enterable, vec!["ecosystem"]);
    }

    #[test]
    fn test_access_badge() {
        assert_eq!(WORKSPACES[0].access_badge(), "MycoGrid");
        assert_eq!(WORKSPACES[3].access_badge(), "Skygrid");
    }
}
