//! Static knowledge base backing the query responder
//!
//! Plain read-only lookup tables: region descriptions, FAQ fragments,
//! and headline statistics. Built once, never mutated.

/// Descriptive record for a named region of the district
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Lowercased name used for containment matching
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub area: Option<&'static str>,
    pub established: Option<&'static str>,
    pub companies: Option<&'static str>,
    pub landmarks: &'static [&'static str],
}

impl Region {
    /// Compose the full answer text for this region
    #[must_use]
    pub fn summary(&self) -> String {
        let landmarks = if self.landmarks.is_empty() {
            "Multiple landmarks".to_string()
        } else {
            self.landmarks.join(", ")
        };
        format!(
            "{}: {}\n\nKey Features:\n- Area: {}\n- Major Companies: {}\n- Landmarks: {}",
            self.name,
            self.description,
            self.area.unwrap_or("N/A"),
            self.companies.unwrap_or("Various IT companies"),
            landmarks,
        )
    }
}

pub const REGIONS: &[Region] = &[
    Region {
        key: "hitech city",
        name: "Hitech City",
        description: "Hitech City is Hyderabad's premier IT hub, established in the late 1990s. \
                      It houses major tech companies, innovation centers, and is the heart of \
                      Hyderabad's technology ecosystem.",
        area: Some("Approximately 2.2 square kilometers"),
        established: Some("1998"),
        companies: Some("Google, Microsoft, Amazon, TCS, Infosys, Wipro, and many more"),
        landmarks: &[
            "Cyber Towers",
            "T-Hub 2.0",
            "Raheja Mindspace",
            "Financial District",
        ],
    },
    Region {
        key: "gachibowli",
        name: "Gachibowli",
        description: "Gachibowli is a major IT corridor adjacent to Hitech City, known for its \
                      tech parks, corporate offices, and educational institutions.",
        area: Some("Major IT corridor"),
        established: None,
        companies: Some("Numerous tech parks and corporate offices"),
        landmarks: &["Gachibowli IT Corridor", "Financial District"],
    },
    Region {
        key: "madhapur",
        name: "Madhapur",
        description: "Madhapur is a key commercial and residential area within Hitech City, known \
                      for its proximity to major tech parks and shopping centers.",
        area: None,
        established: None,
        companies: None,
        landmarks: &["Inorbit Mall", "Shilparamam"],
    },
    Region {
        key: "kondapur",
        name: "Kondapur",
        description: "Kondapur is a rapidly developing area with numerous IT companies, \
                      residential complexes, and commercial establishments.",
        area: None,
        established: None,
        companies: Some("Multiple IT companies and startups"),
        landmarks: &[],
    },
];

/// Question fragments and their canned answers. Overlapping fragments are
/// resolved by the responder with longest-match-wins.
pub const FAQ: &[(&str, &str)] = &[
    (
        "what is hitech city",
        "Hitech City is Hyderabad's premier IT hub, established in 1998. It spans approximately \
         2.2 square kilometers and houses major tech companies like Google, Microsoft, Amazon, \
         TCS, Infosys, and Wipro. It's the heart of Hyderabad's technology ecosystem.",
    ),
    (
        "how many companies",
        "Hitech City houses over 200+ IT companies including major players like Google (13,000 \
         employees), Microsoft (11,000), Amazon (15,000), TCS (25,000), Infosys (18,000), and \
         Wipro (12,000).",
    ),
    (
        "tech parks",
        "Hitech City has 42+ tech parks and 12 innovation hubs, with an office occupancy rate \
         of 92%.",
    ),
    (
        "workforce",
        "The total workforce in Hitech City exceeds 98,000 employees across various tech \
         companies.",
    ),
    (
        "startups",
        "Hitech City is home to 850+ startups, with T-Hub 2.0 being the world's largest \
         innovation campus and startup incubator.",
    ),
    (
        "average salary",
        "The average salary in Hitech City is approximately ₹12.5 lakhs per annum.",
    ),
    (
        "sectors",
        "The sector distribution includes: IT Services (45%), Product Development (25%), \
         Startups (15%), Consulting (10%), and Others (5%).",
    ),
    (
        "traffic",
        "Hitech City is well-connected with the Hyderabad Metro, and traffic management systems \
         are in place. The area has good connectivity to the rest of Hyderabad.",
    ),
    (
        "amenities",
        "Hitech City offers excellent amenities including shopping malls (Inorbit Mall, IKEA), \
         cultural centers (Shilparamam), restaurants, hotels, and recreational facilities.",
    ),
    (
        "metro connectivity",
        "Hitech City has its own metro station, providing excellent connectivity to other parts \
         of Hyderabad.",
    ),
    (
        "innovation hubs",
        "T-Hub 2.0 is the world's largest innovation campus, serving as a major startup \
         incubator and innovation center in Hitech City.",
    ),
];

/// Headline statistic labels and their display values
pub const STATISTICS: &[(&str, &str)] = &[
    ("total tech parks", "42+"),
    ("innovation hubs", "12"),
    ("office occupancy", "92%"),
    ("total workforce", "98,000+"),
    ("startups", "850+"),
    ("average salary", "₹12.5 lakhs"),
];

/// Look up a region whose name is contained in the lowercased text
#[must_use]
pub fn region_in_text(lower: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| lower.contains(r.key))
}
