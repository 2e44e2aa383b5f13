//! Static copy and catalog data rendered by the site views.

use shared::domain::Route;

pub const BRAND: &str = "BusinessLogics";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/businesslogicss";
pub const CONTACT_MAILTO: &str = "mailto:businesslogics.solutions@gmail.com";

/// Header navigation, in display order. The logo links home.
pub const NAV_LINKS: [Route; 3] = [Route::Services, Route::Work, Route::About];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    Users,
    Invoice,
    Cart,
    Server,
    Bolt,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Dashboard => "📊",
            Icon::Users => "👥",
            Icon::Invoice => "📄",
            Icon::Cart => "🛒",
            Icon::Server => "🖥",
            Icon::Bolt => "⚡",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Offering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Offering; 6] = [
    Offering {
        icon: Icon::Dashboard,
        title: "Custom ERP Development",
        description: "End-to-end resource planning tailored to your industry logic.",
    },
    Offering {
        icon: Icon::Users,
        title: "HRMS & Payroll",
        description: "Automated salary processing, attendance tracking, and performance appraisals.",
    },
    Offering {
        icon: Icon::Cart,
        title: "Inventory Management",
        description: "FIFO/LIFO tracking, warehousing logic, and stock alerts.",
    },
    Offering {
        icon: Icon::Invoice,
        title: "GST Billing",
        description: "One-click e-invoice generation and seamless tax filing reports.",
    },
    Offering {
        icon: Icon::Server,
        title: "Cloud Migration",
        description: "Move your on-premise data to secure, scalable cloud infrastructure.",
    },
    Offering {
        icon: Icon::Bolt,
        title: "Automation Bots",
        description: "RPA solutions to handle repetitive data entry tasks.",
    },
];

/// Home page capability cards. The first one is rendered large.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    pub offering: Offering,
    pub call_to_action: &'static str,
    pub target: Route,
}

pub const CAPABILITIES: [Capability; 3] = [
    Capability {
        offering: Offering {
            icon: Icon::Dashboard,
            title: "Custom ERP Systems",
            description: "Centralize your entire organization.",
        },
        call_to_action: "EXPLORE MODULES",
        target: Route::Services,
    },
    Capability {
        offering: Offering {
            icon: Icon::Cart,
            title: "Smart Inventory",
            description: "Real-time stock tracking.",
        },
        call_to_action: "LEARN MORE",
        target: Route::Services,
    },
    Capability {
        offering: Offering {
            icon: Icon::Invoice,
            title: "Automated Billing",
            description: "GST compliant invoicing.",
        },
        call_to_action: "LEARN MORE",
        target: Route::Services,
    },
];

pub const INDUSTRIES: [&str; 6] = [
    "Logistics",
    "Manufacturing",
    "Retail",
    BRAND,
    "Fintech",
    "Healthcare",
];

/// Bar heights of the hero dashboard mockup, in percent of the chart height.
pub const DASHBOARD_BARS: [u8; 12] = [40, 65, 45, 80, 55, 90, 70, 85, 60, 95, 75, 100];

#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const DASHBOARD_METRICS: [Metric; 2] = [
    Metric {
        label: "TOTAL REVENUE",
        value: "₹ XXXXX",
        caption: "+18% this month",
    },
    Metric {
        label: "ACTIVE USERS",
        value: "1,204",
        caption: "Currently active",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub kicker: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
}

pub const FEATURED_PROJECT: Project = Project {
    kicker: "FEATURED PROJECT",
    title: "Enquiry Tracking System",
    summary: "A specialized dashboard for managing customer enquiries. Streamline lead \
              follow-ups, track status changes from pending to conversion, and ensure no \
              potential client falls through the cracks.",
    stack: &["REACT", "NODE.JS", "TAILWIND"],
};

pub const ABOUT_LEAD: &str = "We are a boutique software agency obsessed with efficiency.";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Founded in 2025, BusinessLogics was born out of frustration. We saw businesses \
     struggling with bloated, expensive \"one-size-fits-all\" software that did 100 things \
     poorly and nothing perfectly.",
    "We took a different approach. We believe software should be like a tailored suit, cut \
     exactly to your measurements. We don't use templates. We don't outsource. We write \
     clean, performant code that solves specific business problems.",
    "Our team consists of systems architects, UI designers, and full-stack engineers who \
     understand business logic as well as they understand binary.",
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 3] = [
    Stat {
        value: "20+",
        label: "ENTERPRISE CLIENTS",
    },
    Stat {
        value: "50k+",
        label: "HOURS SAVED",
    },
    Stat {
        value: "100%",
        label: "ON-TIME DELIVERY",
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}.", BRAND.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_cards_link_to_services() {
        assert!(CAPABILITIES.iter().all(|card| card.target == Route::Services));
    }

    #[test]
    fn copyright_uses_uppercase_brand() {
        assert_eq!(copyright_line(2026), "© 2026 BUSINESSLOGICS.");
    }
}
