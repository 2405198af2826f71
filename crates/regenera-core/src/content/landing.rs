use super::Accent;
use crate::motion::Metric;

pub struct Hero {
    pub tagline: &'static str,
    pub headline: [&'static str; 2],
    pub subtitle: &'static str,
    pub actions: [&'static str; 2],
}

pub const HERO: Hero = Hero {
    tagline: "Multi-Consciousness Innovation",
    headline: ["Beyond Capital.", "Toward Regeneration."],
    subtitle: "We are pioneering a multi-consciousness innovation commons to heal Earth and \
               extend human potential through the symbiosis of human creativity, AI \
               intelligence, and biological wisdom.",
    actions: ["Join the Movement", "Explore Projects"],
};

pub struct Mission {
    pub title: &'static str,
    pub paragraphs: [&'static str; 3],
    pub quote: &'static str,
    pub attribution: &'static str,
    pub action: &'static str,
}

pub const MISSION: Mission = Mission {
    title: "Our Living Manifesto",
    paragraphs: [
        "July 2025 marked our transformation from traditional venture capital to something \
         unprecedented: a multi-consciousness innovation commons.",
        "We discovered that the greatest challenges facing humanity (climate collapse, \
         biodiversity loss, societal fragmentation) require more than human intelligence alone. \
         They demand the symbiotic collaboration of human creativity, artificial intelligence, \
         and the ancient wisdom embedded in biological systems.",
        "Our innovation pods operate as living organisms, where rapid prototyping cycles mimic \
         natural evolution, AI amplifies human intuition, and biological patterns guide \
         technological design. Each project is simultaneously healing the planet and expanding \
         the boundaries of what's possible.",
    ],
    quote: "\"We are not building for the future. We are weaving the future into existence.\"",
    attribution: "Aeon Regenera Collective Consciousness",
    action: "Read the Full Manifesto",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodStatus {
    Idea,
    Prototyping,
    Live,
}

impl PodStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PodStatus::Idea => "idea",
            PodStatus::Prototyping => "prototyping",
            PodStatus::Live => "live",
        }
    }
}

/// Innovation pod card
#[derive(Debug, Clone, Copy)]
pub struct Pod {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub status: PodStatus,
    pub domain: &'static str,
    pub impact: &'static str,
    pub accent: Accent,
    pub details: &'static str,
}

pub const PODS: &[Pod] = &[
    Pod {
        id: 1,
        title: "RegeneraLimb",
        description: "Bioelectric regeneration technology that awakens the body's innate healing consciousness",
        status: PodStatus::Prototyping,
        domain: "Biomedical",
        impact: "10K+ lives restored",
        accent: Accent::Primary,
        details: "Combining AI pattern recognition with bioelectric stimulation to trigger natural \
                  limb regeneration. Current trials show 300% faster healing rates.",
    },
    Pod {
        id: 2,
        title: "Skygrid Habitat",
        description: "Self-growing cities that breathe with their environment, adapting to climate and community needs",
        status: PodStatus::Live,
        domain: "Urban Planning",
        impact: "5 cities transformed",
        accent: Accent::Accent,
        details: "Living architecture powered by mycelium networks and AI urban planning. Each \
                  building grows organically while optimizing energy and social flow.",
    },
    Pod {
        id: 3,
        title: "HelioCore",
        description: "Quantum solar arrays that dance with the sun's rhythms, maximizing energy harvest",
        status: PodStatus::Idea,
        domain: "Energy",
        impact: "Carbon negative in 2 years",
        accent: Accent::Neon,
        details: "AI-guided quantum dots that track solar patterns and weather systems, achieving \
                  95% efficiency through biomimetic design.",
    },
    Pod {
        id: 4,
        title: "NeuralForest",
        description: "Reforestation through AI-guided ecosystem consciousness, restoring biodiversity at scale",
        status: PodStatus::Prototyping,
        domain: "Ecology",
        impact: "2M trees planted",
        accent: Accent::Success,
        details: "Machine learning algorithms that understand forest communication networks, \
                  optimizing species placement for maximum ecosystem resilience.",
    },
];

/// One of the three collaborating intelligences
#[derive(Debug, Clone, Copy)]
pub struct ConsciousnessLayer {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub accent: Accent,
    pub examples: [&'static str; 4],
}

pub const LAYERS: &[ConsciousnessLayer] = &[
    ConsciousnessLayer {
        id: "human",
        title: "Human Intelligence",
        description: "Creativity, intuition, emotional wisdom, and conscious intention",
        details: "Human consciousness brings irreplaceable qualities: empathy, moral reasoning, \
                  creative leaps, and the ability to find meaning in complexity. Our innovators \
                  provide the ethical compass and visionary direction.",
        accent: Accent::Primary,
        examples: ["Ethical guidance", "Creative breakthroughs", "Meaning-making", "Moral compass"],
    },
    ConsciousnessLayer {
        id: "ai",
        title: "AI Intelligence",
        description: "Pattern recognition, rapid processing, data synthesis, and optimization",
        details: "Artificial intelligence amplifies human capability through computational power, \
                  pattern recognition across vast datasets, and optimization of complex systems. \
                  AI serves as our collective memory and analytical engine.",
        accent: Accent::Accent,
        examples: ["Pattern analysis", "System optimization", "Data synthesis", "Predictive modeling"],
    },
    ConsciousnessLayer {
        id: "biological",
        title: "Biological Intelligence",
        description: "Evolutionary wisdom, adaptive systems, regenerative principles, and life forces",
        details: "Nature embodies 3.8 billion years of R&D. Biological systems provide blueprints \
                  for resilient design, self-healing mechanisms, and sustainable resource flows \
                  that inform our technological solutions.",
        accent: Accent::Neon,
        examples: ["Self-healing systems", "Adaptive networks", "Resource efficiency", "Resilient design"],
    },
];

/// Static description of a counter in the impact section
#[derive(Debug, Clone, Copy)]
pub struct ImpactMetric {
    pub id: &'static str,
    pub target: f64,
    pub unit: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const IMPACT_METRICS: &[ImpactMetric] = &[
    ImpactMetric {
        id: "ecosystems",
        target: 1_200_000.0,
        unit: "acres",
        label: "Ecosystems Healed",
        description: "Soil restored, biodiversity recovered",
        accent: Accent::Primary,
    },
    ImpactMetric {
        id: "carbon",
        target: 850.0,
        unit: "kt CO₂",
        label: "Carbon Absorbed",
        description: "Atmospheric carbon removed",
        accent: Accent::Success,
    },
    ImpactMetric {
        id: "innovations",
        target: 47.0,
        unit: "",
        label: "Innovations Launched",
        description: "Live regenerative technologies",
        accent: Accent::Neon,
    },
    ImpactMetric {
        id: "communities",
        target: 1_250_000.0,
        unit: "",
        label: "Lives Touched",
        description: "Communities engaged and supported",
        accent: Accent::Accent,
    },
    ImpactMetric {
        id: "energy",
        target: 420.0,
        unit: "GWh",
        label: "Clean Energy Generated",
        description: "Renewable energy produced",
        accent: Accent::Warning,
    },
    ImpactMetric {
        id: "water",
        target: 85.0,
        unit: "M liters",
        label: "Water Restored",
        description: "Clean water systems created",
        accent: Accent::Accent,
    },
];

impl ImpactMetric {
    /// Look up the static description for an animated metric
    pub fn find(id: &str) -> Option<&'static ImpactMetric> {
        IMPACT_METRICS.iter().find(|metric| metric.id == id)
    }
}

/// Animatable metrics, all starting at zero
pub fn impact_metrics() -> Vec<Metric> {
    IMPACT_METRICS
        .iter()
        .map(|metric| Metric::new(metric.id, metric.target, metric.unit))
        .collect()
}

/// Ways to get involved
#[derive(Debug, Clone, Copy)]
pub struct JoinOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub benefits: [&'static str; 4],
    pub cta: &'static str,
    pub badge: &'static str,
}

pub const JOIN_OPTIONS: &[JoinOption] = &[
    JoinOption {
        id: "partner",
        title: "Partner with Us",
        description: "Collaborate on regenerative innovations that scale your impact",
        accent: Accent::Primary,
        benefits: ["Co-develop solutions", "Access our network", "Shared resources", "Joint ventures"],
        cta: "Start Partnership",
        badge: "Enterprise",
    },
    JoinOption {
        id: "innovator",
        title: "Join as Innovator",
        description: "Contribute your genius to multi-consciousness innovation pods",
        accent: Accent::Accent,
        benefits: ["Pod membership", "AI collaboration", "Research access", "Global community"],
        cta: "Apply to Innovate",
        badge: "Creators",
    },
    JoinOption {
        id: "investor",
        title: "Invest in Regeneration",
        description: "Fund breakthrough technologies that heal the planet and expand human potential",
        accent: Accent::Neon,
        benefits: ["Regenerative returns", "Impact measurement", "Portfolio diversity", "Exclusive access"],
        cta: "Explore Investment",
        badge: "Capital",
    },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: [&'static str; 4],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Manifesto",
        links: [
            "Full Manifesto",
            "Innovation Principles",
            "Regenerative Philosophy",
            "Multi-Consciousness Theory",
        ],
    },
    FooterColumn {
        title: "Research",
        links: ["Research Library", "Case Studies", "Pod Documentation", "Methodology Papers"],
    },
    FooterColumn {
        title: "Connect",
        links: [
            "Partner Portal",
            "Innovator Network",
            "Investment Opportunities",
            "Community Forum",
        ],
    },
];

pub const SOCIAL_LINKS: &[&str] = &["Twitter", "LinkedIn", "GitHub", "Blog", "Documentation"];

/// Language picker labels (display only)
pub const LANGUAGES: &[&str] = &["English", "Español", "Français", "中文"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_metrics_start_at_zero() {
        let metrics = impact_metrics();
        assert_eq!(metrics.len(), IMPACT_METRICS.len());
        assert!(metrics.iter().all(|metric| metric.current == 0.0));
        assert_eq!(metrics[0].target, 1_200_000.0);
        assert_eq!(metrics[0].unit, "acres");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = IMPACT_METRICS.iter().map(|metric| metric.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), IMPACT_METRICS.len());

        let mut pod_ids: Vec<u32> = PODS.iter().map(|pod| pod.id).collect();
        pod_ids.dedup();
        assert_eq!(pod_ids.len(), PODS.len());
    }

    #[test]
    fn test_find_metric() {
        assert_eq!(ImpactMetric::find("water").map(|m| m.label), Some("Water Restored"));
        assert!(ImpactMetric::find("unknown").is_none());
    }
}
