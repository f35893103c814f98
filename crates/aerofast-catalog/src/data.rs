//! The hardware catalog as published on the site.

use aerofast_core::types::{ProductCategory, ProductSpecs, StockLevel};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(
    id: &str,
    name: &str,
    description: &str,
    standard: &str,
    summary: &str,
    stock_level: StockLevel,
    specs: ProductSpecs,
) -> ProductCategory {
    ProductCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        standard: standard.to_string(),
        summary: summary.to_string(),
        stock_level,
        specs,
    }
}

/// Product categories in catalog order.
pub fn standard_categories() -> Vec<ProductCategory> {
    vec![
        category(
            "fittings",
            "Fittings",
            "Flared, flareless, and standard fittings.",
            "AN / MS / NAS",
            "Fluid connection hardware",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Flared Fittings", "Flareless Fittings", "Standard Fittings"]),
                part_numbers: Some(strings(&["AN774 - AN939", "MS20819 - MS21905", "AN6289"])),
                manufacturers: Some(strings(&["Howmet", "Shur-Lok", "Pamco", "Aerofit", "Permaswage"])),
                standards: None,
            },
        ),
        category(
            "screws",
            "Screws",
            "Socket cap, flange, machine, and self-tapping screws.",
            "AN / MS / NAS",
            "Structural and system screws",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Socket Cap", "Flange", "Machine", "Self-Tapping", "Hex Cap", "Set Screws"]),
                part_numbers: Some(strings(&["AN115401+", "MS24673", "NAS1121", "NAS1351", "MS51975"])),
                manufacturers: Some(strings(&["B&B Specialties", "Ideal Fasteners", "SPS Fasteners", "Mac Fasteners"])),
                standards: None,
            },
        ),
        category(
            "bolts",
            "Bolts",
            "Hex, carriage, structural, and close-tolerance bolts.",
            "AN / MS / NAS",
            "Structural fastening",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Hex Bolts", "Carriage Bolts", "Structural Bolts", "Close Tolerance", "12-Point"]),
                part_numbers: Some(strings(&["AN3-20", "MS20004-20024", "NAS1003-1020", "NAS624-644"])),
                manufacturers: Some(strings(&["Howmet", "Acufast", "GS Aerospace", "Reid Products"])),
                standards: None,
            },
        ),
        category(
            "pins",
            "Pins",
            "Cotter, dowel, hitch, and spring pins.",
            "MS / NAS / AN",
            "Assembly retention",
            StockLevel::Medium,
            ProductSpecs {
                types: strings(&["Cotter Pins", "Dowel Pins", "Hitch Pins", "Spring Pins"]),
                part_numbers: Some(strings(&["MS24665", "MS20253", "NAS561", "AN380", "MS16555"])),
                manufacturers: None,
                standards: Some(strings(&["AN", "MS", "NAS", "NASM"])),
            },
        ),
        category(
            "nuts",
            "Nuts",
            "Locknuts, castle, hex, and wing nuts.",
            "AN / MS / NAS",
            "Secure fastening",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Castle", "Locknuts", "Hex", "Wing", "Rivet Nuts", "K-Lock"]),
                part_numbers: Some(strings(&["AN310-365", "MS21042", "NAS679", "MS20365", "NAS1021"])),
                manufacturers: Some(strings(&["MacLean-ESNA", "Bristol Industries", "SPS Technologies"])),
                standards: None,
            },
        ),
        category(
            "orings",
            "O-Rings",
            "O-rings and retaining rings.",
            "MS / NAS / AS",
            "Sealing and retention",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Extruded", "Lathe Cut", "Metal", "Spiral Rings"]),
                part_numbers: Some(strings(&["MS28775", "MS29513", "M83248/1", "NAS1611"])),
                manufacturers: Some(strings(&["Parker Seal", "Freudenberg-NOK", "Smalley", "Trelleborg"])),
                standards: None,
            },
        ),
        category(
            "rivets",
            "Rivets",
            "Solid, blind, tubular, and structural rivets.",
            "MS / NAS / BACR",
            "Permanent fastening",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Solid", "Blind", "Tubular", "Split", "Drive"]),
                part_numbers: Some(strings(&["MS20470", "MS20426", "NAS1919", "BACR15"])),
                manufacturers: Some(strings(&["National Rivet", "Avdel", "Allfast", "Cherry Aerospace"])),
                standards: None,
            },
        ),
        category(
            "washers",
            "Washers",
            "Flat, lock, sealing, and wave washers.",
            "AN / MS / NAS",
            "Load distribution",
            StockLevel::High,
            ProductSpecs {
                types: strings(&["Flat", "Split Lock", "Sealing", "Wave", "Countersunk"]),
                part_numbers: Some(strings(&["AN960", "MS35338", "NAS1149", "MS20002"])),
                manufacturers: Some(strings(&["Spirol", "Superior Washer", "Boker's"])),
                standards: None,
            },
        ),
        category(
            "specialty",
            "Specialty",
            "Shims, spacers, bushings, cable ties.",
            "Custom",
            "Miscellaneous hardware",
            StockLevel::Low,
            ProductSpecs {
                types: strings(&["Shims", "Spacers", "Bushings", "Bearings", "Cable Ties", "U-Bolts"]),
                part_numbers: None,
                manufacturers: Some(strings(&["Amatom", "Unicorp", "Young Engineers", "Panduit"])),
                standards: None,
            },
        ),
    ]
}
