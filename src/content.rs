use crate::format::{format_bytes, format_number};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "What We Protect", href: "#collections" },
    NavLink { label: "Technology", href: "#technology" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct TrustStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TRUST_STATS: &[TrustStat] = &[
    TrustStat { value: "99.999%", label: "Uptime SLA" },
    TrustStat { value: "256-bit", label: "Encryption" },
    TrustStat { value: "5+", label: "Redundancy Layers" },
    TrustStat { value: "<50ms", label: "Global Latency" },
];

pub struct ValueProp {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub accent: &'static str,
}

pub const VALUE_PROPS: &[ValueProp] = &[
    ValueProp {
        title: "AI Intelligence",
        description: "Our AI automatically organizes, tags, and enriches your content with comprehensive metadata, making every asset instantly discoverable.",
        features: &["Auto-tagging & categorization", "Scene detection", "Content fingerprinting", "Smart search"],
        accent: "#00d4ff",
    },
    ValueProp {
        title: "Eternal Preservation",
        description: "Your content is stored across multiple redundant systems with built-in migration to future formats, ensuring it outlives any technology.",
        features: &["Format migration", "Bit-rot protection", "Version control", "Integrity verification"],
        accent: "#a855f7",
    },
    ValueProp {
        title: "Bank-Grade Security",
        description: "Military-level encryption, zero-knowledge architecture, and comprehensive access controls protect your most valuable assets.",
        features: &["256-bit AES encryption", "Zero-knowledge proofs", "Role-based access", "Audit trails"],
        accent: "#ec4899",
    },
    ValueProp {
        title: "Global Scale",
        description: "Edge nodes across 6 continents ensure your content is accessible globally with minimal latency while maintaining sovereignty compliance.",
        features: &["50+ data centers", "Sub-50ms latency", "Data sovereignty", "CDN integration"],
        accent: "#f59e0b",
    },
    ValueProp {
        title: "Provenance Tracking",
        description: "Complete chain of custody for every asset, with immutable records that prove authenticity and ownership throughout time.",
        features: &["Blockchain anchoring", "Timestamping", "Rights management", "Chain of custody"],
        accent: "#10b981",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Medium,
    Small,
}

impl CardSize {
    pub fn class(&self) -> &'static str {
        match self {
            CardSize::Large => "bento-large",
            CardSize::Medium => "bento-medium",
            CardSize::Small => "bento-small",
        }
    }
}

pub enum CollectionStat {
    Count(u64, &'static str),
    Volume(u64, &'static str),
}

impl CollectionStat {
    pub fn render(&self) -> String {
        match self {
            CollectionStat::Count(n, what) => format!("{}+ {}", format_number(*n), what),
            CollectionStat::Volume(bytes, what) => format!("{} {}", format_bytes(*bytes, 1), what),
        }
    }
}

pub struct Collection {
    pub title: &'static str,
    pub description: &'static str,
    pub size: CardSize,
    pub stat: Option<CollectionStat>,
}

pub const COLLECTIONS: &[Collection] = &[
    Collection {
        title: "Hollywood & Studios",
        description: "Major motion pictures, theatrical releases, and studio libraries preserved with cinema-grade quality and complete metadata integrity.",
        size: CardSize::Large,
        stat: Some(CollectionStat::Count(50_000, "titles protected")),
    },
    Collection {
        title: "Music Archives",
        description: "Master recordings, album collections, and rare audio preserved in lossless formats with complete provenance tracking.",
        size: CardSize::Medium,
        stat: Some(CollectionStat::Count(10_000_000, "tracks")),
    },
    Collection {
        title: "Gaming Libraries",
        description: "Video game preservation including source code, assets, and playable builds for future generations.",
        size: CardSize::Small,
        stat: None,
    },
    Collection {
        title: "Independent Creators",
        description: "Personal content libraries for filmmakers, musicians, and digital artists with full ownership rights.",
        size: CardSize::Small,
        stat: None,
    },
    Collection {
        title: "Cultural Heritage",
        description: "Rare masters, historical recordings, and cultural artifacts digitized and preserved for eternity.",
        size: CardSize::Small,
        stat: Some(CollectionStat::Volume(5_066_549_580_791_808, "digitized")),
    },
];

pub struct PortfolioEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const PORTFOLIO: &[PortfolioEntry] = &[
    PortfolioEntry {
        title: "Golden Age Restoration",
        category: "Film",
        description: "Frame-by-frame recovery of nitrate reels into 8K preservation masters.",
    },
    PortfolioEntry {
        title: "Studio Session Vault",
        category: "Music",
        description: "Multitrack session tapes migrated to lossless archives with full credits.",
    },
    PortfolioEntry {
        title: "Arcade Legacy Project",
        category: "Games",
        description: "Playable builds, source trees and cabinet artwork preserved together.",
    },
    PortfolioEntry {
        title: "Broadcast Heritage",
        category: "Television",
        description: "Decades of regional broadcast footage indexed by scene and speaker.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_sections() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }

    #[test]
    fn collection_stats_render_with_helpers() {
        assert_eq!(
            CollectionStat::Count(50_000, "titles protected").render(),
            "50,000+ titles protected"
        );
        assert_eq!(
            CollectionStat::Volume(5_066_549_580_791_808, "digitized").render(),
            "4.5 PB digitized"
        );
    }
}
