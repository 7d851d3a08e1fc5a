use crate::domain::model::{ProductListing, ServiceListing};

/// `(value, label)` choices offered by the general contact form.
pub const CONTACT_SERVICE_OPTIONS: [(&str, &str); 5] = [
    ("hdpe-pipeline", "HDPE Pipeline Installation"),
    ("geomembrane", "Geomembrane Installation"),
    ("geosynthetic", "Geosynthetic Solutions"),
    ("maintenance", "Maintenance & Repair"),
    ("consultation", "Project Consultation"),
];

fn features(list: &[&str]) -> Vec<String> {
    list.iter().map(|f| f.to_string()).collect()
}

pub fn sample_services() -> Vec<ServiceListing> {
    vec![
        ServiceListing {
            id: 1.into(),
            title: "HDPE Pipeline Installation".to_string(),
            description: "Professional HDPE pipeline installation services with expert engineering team and precision welding techniques for industrial and municipal applications.".to_string(),
            image_url: "/images/hdpe-pipeline.jpg".to_string(),
            features: features(&["Expert welding", "Precision installation", "Quality assurance", "Leak-proof joints"]),
            ..Default::default()
        },
        ServiceListing {
            id: 2.into(),
            title: "Geomembrane Installation".to_string(),
            description: "Comprehensive geomembrane lining systems for environmental protection and containment projects with advanced leak detection.".to_string(),
            image_url: "/images/pipe-maintenance.jpg".to_string(),
            features: features(&["Advanced welding", "Leak detection", "Quality testing", "Custom solutions"]),
            ..Default::default()
        },
        ServiceListing {
            id: 3.into(),
            title: "Geosynthetic Solutions".to_string(),
            description: "Complete geosynthetic installation services including geotextiles, geogrids, and erosion control systems for civil engineering projects.".to_string(),
            image_url: "/images/geo-solutions.jpg".to_string(),
            features: features(&["Soil stabilization", "Erosion control", "Structural reinforcement", "Environmental protection"]),
            ..Default::default()
        },
        ServiceListing {
            id: 4.into(),
            title: "Maintenance & Repair".to_string(),
            description: "Professional maintenance, inspection, and repair services for existing geosynthetic systems and HDPE pipelines.".to_string(),
            image_url: "/images/maintenance.jpg".to_string(),
            features: features(&["Regular inspection", "Preventive maintenance", "Quick repair", "System upgrades"]),
            ..Default::default()
        },
    ]
}

pub fn sample_products() -> Vec<ProductListing> {
    vec![
        ProductListing {
            id: 1.into(),
            title: "HDPE Pipes".to_string(),
            price: "Contact for pricing".to_string(),
            description: "High-quality HDPE pipes for various industrial applications with excellent durability and corrosion resistance.".to_string(),
            images: "/images/hdpe-pipes.jpg".to_string(),
            features: features(&["Corrosion resistant", "UV stable", "Lightweight", "Long lifespan"]),
            ..Default::default()
        },
        ProductListing {
            id: 2.into(),
            title: "Geomembranes".to_string(),
            price: "Contact for pricing".to_string(),
            description: "Premium geomembranes for containment and environmental protection projects with superior waterproofing.".to_string(),
            images: "/images/geomembranes.jpg".to_string(),
            features: features(&["Waterproof", "Chemical resistant", "Flexible", "Durable"]),
            ..Default::default()
        },
        ProductListing {
            id: 3.into(),
            title: "Geotextiles".to_string(),
            price: "Contact for pricing".to_string(),
            description: "High-strength geotextiles for soil stabilization and filtration applications with excellent permeability.".to_string(),
            images: "/images/geotextiles.jpg".to_string(),
            features: features(&["Permeable", "Strong", "UV resistant", "Easy installation"]),
            ..Default::default()
        },
        ProductListing {
            id: 4.into(),
            title: "HDPE Sheets".to_string(),
            price: "Contact for pricing".to_string(),
            description: "Durable HDPE sheets for lining and construction applications with smooth surface finish.".to_string(),
            images: "/images/hdpe-sheets.jpg".to_string(),
            features: features(&["Smooth surface", "Chemical resistant", "Weather proof", "Custom sizes"]),
            ..Default::default()
        },
    ]
}
