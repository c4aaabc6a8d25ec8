//! Static copy for the page.

pub const BRAND: &str = "SmartWare";

/// Page sections in document order.
pub const SECTION_IDS: &[&str] = &["hero", "about", "services", "products", "contact"];

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "about", label: "About" },
    NavLink { id: "services", label: "Services" },
    NavLink { id: "products", label: "Products" },
    NavLink { id: "contact", label: "Contact" },
];

pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "200+", caption: "Clients Worldwide" },
    Stat { value: "2+", caption: "Years Experience" },
    Stat { value: "24/7", caption: "Customer Support" },
    Stat { value: "98%", caption: "Client Satisfaction" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "📊",
        title: "Real Time Data",
        description: "Store your robot data in databases for future decision making analysis.",
    },
    Service {
        icon: "📦",
        title: "Inventory Management",
        description: "Real-time tracking and management of inventory levels, locations, and movements throughout your warehouse.",
    },
    Service {
        icon: "🔄",
        title: "Integration Services",
        description: "Seamlessly connect your warehouse management system with other business applications.",
    },
    Service {
        icon: "🗺️",
        title: "GPS and Map Tracking",
        description: "Track your robot as it goes from point A to point B to carry the goods.",
    },
    Service {
        icon: "📱",
        title: "Business Tracking",
        description: "Get access to a whole dashboard of your inventory, Tasks and more.",
    },
];

pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub media_alt: &'static str,
    pub media_caption: &'static str,
    pub cta: &'static str,
    /// Media goes on the right on wide screens.
    pub mirrored: bool,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        title: "Warehouse Management Software",
        description: "A web-based software to access our services and monitor your robot with stock management and arrange data for future business analysis. Our platform provides real-time insights into your warehouse operations, allowing you to make data-driven decisions.",
        features: [
            "Real-time robot monitoring",
            "Comprehensive inventory management",
            "Advanced data analytics and reporting",
        ],
        media_alt: "Software Interface",
        media_caption: "Software Demo GIF",
        cta: "Request Demo",
        mirrored: false,
    },
    Product {
        title: "Warehouse Robot",
        description: "Our prototype robot is an alternative to human labor in sorting centers and warehouses. It provides better safety and real-time data to the software, enhancing efficiency and reducing operational costs.",
        features: [
            "Autonomous navigation and obstacle avoidance",
            "Efficient item picking and sorting capabilities",
            "Continuous operation with minimal downtime",
        ],
        media_alt: "Warehouse Robot",
        media_caption: "Robot Image",
        cta: "Learn More",
        mirrored: true,
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: "📍", label: "Address", value: "Algiers, Algeria" },
    ContactDetail { icon: "📞", label: "Phone", value: "0696717170" },
    ContactDetail { icon: "✉️", label: "Email", value: "Smartware@gmail.com" },
];

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const HERO_IMAGE: &str = "/hero.jpg";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_and_start_with_hero() {
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
        assert_eq!(SECTION_IDS.first(), Some(&"hero"));
    }

    #[test]
    fn nav_covers_every_section_but_hero() {
        let linked: Vec<_> = NAV_LINKS.iter().map(|link| link.id).collect();
        assert_eq!(linked, &SECTION_IDS[1..]);
    }
}
