//! Static brochure content: company profile, navigation, services, news
//! and featured manufacturers.
//!
//! Built once at start-up and shared read-only.

use serde::Serialize;

/// A labelled figure from the company profile, e.g. `1979 / Established`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStat {
    pub value: String,
    pub label: String,
    pub detail: String,
}

/// A dated milestone on the company timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub name: String,
    pub tagline: String,
    pub summary: Vec<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub certifications: Vec<String>,
    pub founded: u16,
    pub stats: Vec<ProfileStat>,
    pub milestones: Vec<Milestone>,
}

/// One entry of the site navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
    pub call_to_action: String,
    pub headline: String,
    pub details: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    pub category: String,
    pub title: String,
    pub excerpt: String,
    /// Publication date as printed on the site (`YYYY.MM.DD`).
    pub date: String,
    pub body: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// All static site content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub company: CompanyProfile,
    pub navigation: Vec<NavItem>,
    pub services: Vec<ServiceOffering>,
    pub news: Vec<NewsArticle>,
    pub manufacturers: Vec<String>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::aerospace_fasteners()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn nav(label: &str, anchor: &str) -> NavItem {
    NavItem {
        label: label.to_string(),
        anchor: anchor.to_string(),
    }
}

fn stat(value: &str, label: &str, detail: &str) -> ProfileStat {
    ProfileStat {
        value: value.to_string(),
        label: label.to_string(),
        detail: detail.to_string(),
    }
}

impl SiteContent {
    /// Content of the Aerospace Fasteners Incorporated site.
    pub fn aerospace_fasteners() -> Self {
        Self {
            company: CompanyProfile {
                name: "Aerospace Fasteners Incorporated".to_string(),
                tagline: "On time every time, defect free.".to_string(),
                summary: strings(&[
                    "Aerospace Fasteners Inc. is a leading distributor of aircraft fastening hardware and fittings for commercial and military aerospace applications. Based in Palestine, Texas, we have served the industry for over 45 years.",
                    "Our 34,000+ square foot facility spans three buildings, supporting barcode-managed inventory, kitting, and VMI programs. We are AS9100 Rev D and ISO 9001:2015 certified.",
                ]),
                address: "255 N US 287, Palestine, TX 75803".to_string(),
                phone: "903-723-0693".to_string(),
                email: "sales@afastinc.com".to_string(),
                certifications: strings(&["AS9100 Rev D", "ISO 9001:2015"]),
                founded: 1979,
                stats: vec![
                    stat("1979", "Established", "Family-owned"),
                    stat("34k", "Sq. Ft. Facility", "Palestine, TX"),
                    stat("300+", "Global Clients", "Commercial/Defense"),
                    stat("AS9100", "Certified", "Rev D / ISO 9001"),
                ],
                milestones: vec![
                    Milestone { year: 1979, label: "Founded".to_string() },
                    Milestone { year: 1996, label: "Facility Exp.".to_string() },
                    Milestone { year: 2015, label: "ISO 9001".to_string() },
                    Milestone { year: 2025, label: "Global Scale".to_string() },
                ],
            },
            navigation: vec![
                nav("Company", "#company"),
                nav("Products", "#products"),
                nav("Services", "#services"),
                nav("Partners", "#manufacturers"),
                nav("News", "#news"),
                nav("Initiate RFQ", "#contact"),
            ],
            services: vec![
                ServiceOffering {
                    title: "Quality Control".to_string(),
                    description: "Rigorous inspection protocols ensuring 100% defect-free delivery.".to_string(),
                    points: strings(&["AS9100 Rev D Certified", "In-House Metrology", "Lot Traceability"]),
                    call_to_action: "View QC Standards".to_string(),
                    headline: "Zero Compromise Assurance".to_string(),
                    details: strings(&[
                        "Our quality management system is the backbone of our operation. Every part that enters our facility is subjected to a rigorous inspection protocol before it is ever cleared for inventory. We maintain a digital thread for every fastener, ensuring that mill certifications, test reports, and plating certs are instantly retrievable.",
                    ]),
                    highlights: strings(&[
                        "Keyence Optical Inspection",
                        "Zeiss CMM Validation",
                        "Hardness Testing",
                        "XRF Material Analysis",
                    ]),
                },
                ServiceOffering {
                    title: "VMI Programs".to_string(),
                    description: "Vendor Managed Inventory solutions to optimize throughput.".to_string(),
                    points: strings(&["Bin Management", "Auto-Replenishment", "Usage Analytics"]),
                    call_to_action: "Discuss VMI Program".to_string(),
                    headline: "Streamlined Logistics".to_string(),
                    details: strings(&[
                        "Stop managing bins and start managing production. Our VMI programs place critical hardware directly at the point of use. Our team monitors consumption rates, manages min/max levels, and handles replenishment automatically, eliminating stockouts and reducing administrative overhead.",
                        "We offer full barcode integration and API connectivity to your existing ERP system for seamless billing and tracking.",
                    ]),
                    highlights: Vec::new(),
                },
                ServiceOffering {
                    title: "Kitting Services".to_string(),
                    description: "Custom BOM consolidation for efficient assembly lines.".to_string(),
                    points: strings(&["Custom Labeling", "BOM Logic", "Just-In-Time"]),
                    call_to_action: "Request Kit Assessment".to_string(),
                    headline: "Assembly-Ready Deliverables".to_string(),
                    details: strings(&[
                        "Reduce technician search time and FOD risk with custom kitting. We consolidate complete Bill of Materials (BOMs) into single-SKU packages, organized by assembly step or workstation.",
                    ]),
                    highlights: strings(&[
                        "Reduction in purchase orders processed",
                        "Elimination of mixed stock and FOD",
                        "Simplified receiving inspection",
                    ]),
                },
                ServiceOffering {
                    title: "Consignment".to_string(),
                    description: "On-site inventory maintenance to preserve working capital.".to_string(),
                    points: strings(&["Pay-On-Use", "Zero Lead Time", "Asset Management"]),
                    call_to_action: "Start Consignment".to_string(),
                    headline: "Capital Efficiency".to_string(),
                    details: strings(&[
                        "Maintain the security of on-site stock without the balance sheet liability. Our consignment programs place Aerospace Fasteners-owned inventory in your facility. You are billed only when product is pulled for production.",
                    ]),
                    highlights: strings(&["Inventory when you need it. Capital when you don't."]),
                },
            ],
            news: vec![
                NewsArticle {
                    category: "COMPLIANCE".to_string(),
                    title: "BCBSTX Alert: Transparency in Coverage".to_string(),
                    excerpt: "Compliance notice referencing the federal Transparency in Coverage Final Rule.".to_string(),
                    date: "2025.01.01".to_string(),
                    body: strings(&[
                        "In compliance with the federal Transparency in Coverage Final Rule issued by the U.S. Departments of Health and Human Services, Labor, and the Treasury, Aerospace Fasteners Incorporated provides access to machine-readable files made available on its behalf by Blue Cross Blue Shield of Texas.",
                        "These files include negotiated rates with in-network providers and allowed amounts for out-of-network providers, formatted for researcher and application developer access.",
                    ]),
                    link: Some("https://www.bcbstx.com/asomrf?EIN=751767255&brand=bcbstx".to_string()),
                },
                NewsArticle {
                    category: "TECHNICAL".to_string(),
                    title: "How are O-Rings Used in the Aerospace Industry?".to_string(),
                    excerpt: "Understanding the critical role of O-Rings in hydraulic, fuel, and pneumatic systems.".to_string(),
                    date: "2024.11.15".to_string(),
                    body: strings(&[
                        "O-rings are vital for sealing hydraulic lines, fuel systems, and pneumatic pressurization systems in aircraft. Selecting the correct material is crucial for safety and performance.",
                        "Common materials include Viton (FKM) for high temperatures and fuel resistance, and Buna-N (Nitrile) for general hydraulic fluids. Aerospace Fasteners stocks a wide range of MS, NAS, and AS standard O-rings.",
                    ]),
                    link: None,
                },
                NewsArticle {
                    category: "BUYER GUIDANCE".to_string(),
                    title: "Choosing the Right Aerospace Hardware Distributor".to_string(),
                    excerpt: "Key factors to evaluate: Certification, Traceability, and Inventory Depth.".to_string(),
                    date: "2024.10.20".to_string(),
                    body: strings(&[
                        "When selecting a partner, look for AS9100 Rev D certification as a baseline. Traceability is non-negotiable: every part must track back to the mill.",
                        "Aerospace Fasteners Inc. combines these quality standards with deep inventory (34,000+ sq ft facility) and flexible service models like VMI and Kitting.",
                    ]),
                    link: None,
                },
            ],
            manufacturers: strings(&[
                "Howmet Aerospace", "Shur-Lok", "Freudenberg", "Eaton",
                "Boeing", "Pratt & Whitney", "Airbus", "Honeywell",
                "3V Fastening", "Aerofit", "Airdrome Precision", "Allan Aircraft",
                "Amatom", "Anillo Industries", "Avdel", "Avibank",
                "B&B Specialties", "Bristol Industries", "California Screw", "CBS Fasteners",
                "Crescent Mfg", "Greene Tweed", "Heartland Precision", "Ideal Fasteners",
                "Mac Fasteners", "MacLean-ESNA", "Moeller", "National Rivet",
                "Parker Seal", "Permaswage", "Smalley", "Spirol", "SPS Technologies",
            ]),
        }
    }

    /// Anchor for a navigation label, if the page has one.
    pub fn anchor_for(&self, label: &str) -> Option<&str> {
        self.navigation
            .iter()
            .find(|item| item.label.eq_ignore_ascii_case(label))
            .map(|item| item.anchor.as_str())
    }
}
