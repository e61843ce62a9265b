//! Copy shown on the landing page. Everything here is fixed at compile time.

use crate::icons::Icon;

/// Colour the icon or check marks are drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Accent => "tone-accent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub icon: Icon,
    pub tone: Tone,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Icon, heading and one line of text. Used by the mission grid and the why-us cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Audience {
    pub title: &'static str,
    pub tone: Tone,
    pub points: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Firm Discovery & Verification",
        icon: Icon::Globe,
        tone: Tone::Primary,
        items: &[
            "Browse 100+ verified accounting firms across India",
            "Filter by location, services, or specialization",
            "View firm profiles including experience, services, certifications, client reviews, and portfolio",
        ],
    },
    Feature {
        title: "Service Request System",
        icon: Icon::FileText,
        tone: Tone::Primary,
        items: &[
            "Post Requirements describing your compliance needs",
            "Receive Proposals from multiple firms",
            "Compare & Choose based on pricing, experience, and ratings",
            "Track Progress with real-time project updates",
        ],
    },
    Feature {
        title: "Real-time Messaging",
        icon: Icon::MessageSquare,
        tone: Tone::Primary,
        items: &[
            "Direct, secure chat between businesses and firms",
            "Instant notifications for new proposals or messages",
            "Clarify project details, negotiate pricing, and finalize deliverables easily",
        ],
    },
    Feature {
        title: "Smart Dashboards",
        icon: Icon::BarChart,
        tone: Tone::Primary,
        items: &[
            "Business Dashboard: Manage service requests, track progress, and communicate with firms",
            "Firm Dashboard: Showcase expertise, submit proposals, and handle multiple projects efficiently",
        ],
    },
    Feature {
        title: "AI Chatbot Assistant",
        icon: Icon::Zap,
        tone: Tone::Accent,
        items: &[
            "Powered by Gemini Flash 2.0, your personal compliance companion",
            "GST & tax filing guidance, Company registration help, Tax planning suggestions",
            "Deadline reminders and compliance updates",
        ],
    },
    Feature {
        title: "Document Management",
        icon: Icon::FileText,
        tone: Tone::Accent,
        items: &[
            "Securely upload and share compliance documents",
            "Cloud-based access and automatic versioning",
            "Maintain audit trails and download final reports",
        ],
    },
    Feature {
        title: "Payment & Invoicing",
        icon: Icon::CreditCard,
        tone: Tone::Accent,
        items: &[
            "Milestone-based, escrow-protected payments",
            "Auto-generated invoices",
            "Transparent transaction history",
        ],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Tax Filing & Planning",
        items: &["ITR filing", "Corporate tax", "International taxation", "Tax notices"],
    },
    Service {
        title: "GST Compliance",
        items: &["Registration", "Returns", "Refunds", "Input credit management"],
    },
    Service {
        title: "Company Registration",
        items: &["Pvt. Ltd.", "LLP", "Proprietorship", "Partnership setup"],
    },
    Service {
        title: "Audit Services",
        items: &["Statutory", "Internal", "Tax", "Due diligence"],
    },
    Service {
        title: "Payroll Management",
        items: &["Salary processing", "PF/ESI compliance", "TDS on salaries"],
    },
    Service {
        title: "Annual Compliance",
        items: &["ROC filings", "Board meetings", "Director KYC"],
    },
    Service {
        title: "Bookkeeping & Accounting",
        items: &["Financial statements", "Balance sheets", "Daily entries"],
    },
    Service {
        title: "Business Advisory",
        items: &["Financial consulting", "Business structure planning", "Funding assistance"],
    },
];

pub const MISSION: &[Highlight] = &[
    Highlight {
        icon: Icon::Check,
        title: "Transparent Pricing",
        text: "No hidden costs, straightforward and honest pricing",
    },
    Highlight {
        icon: Icon::Shield,
        title: "Verified Professionals",
        text: "Only certified firms and qualified experts",
    },
    Highlight {
        icon: Icon::Zap,
        title: "AI-Powered Guidance",
        text: "Instant assistance for any compliance need (Coming Soon)",
    },
    Highlight {
        icon: Icon::TrendingUp,
        title: "Streamlined Workflows",
        text: "From discovery to delivery, simplified process",
    },
];

pub const AUDIENCES: &[Audience] = &[
    Audience {
        title: "For Businesses",
        tone: Tone::Primary,
        points: &[
            "Startups needing company registration & compliance setup",
            "SMEs requiring ongoing accounting and tax filing",
            "Enterprises seeking specialized audit or advisory services",
            "Any organization looking for trustworthy financial partners",
        ],
    },
    Audience {
        title: "For Accounting Firms",
        tone: Tone::Accent,
        points: &[
            "Chartered Accountants expanding their client base",
            "Tax consultants offering specialized services",
            "Compliance professionals seeking new opportunities",
            "Audit firms showcasing their expertise globally",
        ],
    },
];

pub const WHY_US: &[Highlight] = &[
    Highlight {
        icon: Icon::Shield,
        title: "Trusted by Top Firms",
        text: "Trusted by top CA and compliance firms across India",
    },
    Highlight {
        icon: Icon::Globe,
        title: "Global Reach",
        text: "Designed for startups, SMEs, and global businesses expanding into India",
    },
    Highlight {
        icon: Icon::Zap,
        title: "AI & Automation",
        text: "Backed by AI and automation for faster compliance cycles",
    },
    Highlight {
        icon: Icon::TrendingUp,
        title: "Reliable & Secure",
        text: "Transparent, secure, and reliable at every step",
    },
];

/// In-page anchors shown in the nav bar, as (label, section id).
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Features", "features"),
    ("Services", "services"),
    ("Why Us", "why"),
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[("Features", "#features"), ("Pricing", "#"), ("Security", "#")],
    },
    FooterColumn {
        heading: "Company",
        links: &[("About", "#about"), ("Blog", "#"), ("Careers", "#")],
    },
    FooterColumn {
        heading: "Connect",
        links: &[("LinkedIn", "#"), ("Instagram", "#"), ("Twitter", "#")],
    },
];

pub const LEGAL_LINKS: &[(&str, &str)] = &[("Privacy Policy", "#"), ("Terms of Service", "#")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_sizes() {
        assert_eq!(FEATURES.len(), 7);
        assert_eq!(SERVICES.len(), 8);
        assert_eq!(MISSION.len(), 4);
        assert_eq!(WHY_US.len(), 4);
        assert_eq!(AUDIENCES.iter().map(|a| a.points.len()).sum::<usize>(), 8);
    }

    #[test]
    fn shipped_entries_have_items() {
        assert!(FEATURES.iter().all(|f| !f.items.is_empty()));
        assert!(SERVICES.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn footer_links_resolve_to_known_sections() {
        let ids: Vec<&str> = SECTION_LINKS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, ["about", "features", "services", "why"]);
        for column in FOOTER_COLUMNS {
            for (_, href) in column.links {
                let target = href.trim_start_matches('#');
                assert!(target.is_empty() || ids.contains(&target));
            }
        }
    }
}
