pub const OWNER: &str = "Jordan Vale";
pub const TAGLINE: &str = "Building fast, deliberate software from kernel to pixel.";

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: [Skill; 6] = [
    Skill { name: "Rust", level: 92 },
    Skill { name: "TypeScript", level: 85 },
    Skill { name: "Distributed Systems", level: 78 },
    Skill { name: "WebAssembly", level: 74 },
    Skill { name: "PostgreSQL", level: 70 },
    Skill { name: "Interface Design", level: 66 },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: [Project; 7] = [
    Project {
        title: "Tidewater",
        summary: "Streaming ingestion pipeline sustaining 400k events per second.",
        stack: &["Rust", "Kafka", "ClickHouse"],
        link: "https://github.com/",
    },
    Project {
        title: "Lumen Deck",
        summary: "Slide engine compiling markdown into animated WebAssembly decks.",
        stack: &["Rust", "Yew", "WebGL"],
        link: "https://github.com/",
    },
    Project {
        title: "Quarry",
        summary: "Full-text search service with typo tolerance and faceting.",
        stack: &["Rust", "Tantivy", "Axum"],
        link: "https://github.com/",
    },
    Project {
        title: "Fieldnote",
        summary: "Offline-first notebook syncing through CRDTs.",
        stack: &["TypeScript", "IndexedDB", "Automerge"],
        link: "https://github.com/",
    },
    Project {
        title: "Switchyard",
        summary: "Feature flag control plane with audited rollouts.",
        stack: &["Go", "PostgreSQL", "gRPC"],
        link: "https://github.com/",
    },
    Project {
        title: "Orbit Watch",
        summary: "Satellite pass predictor with a terminal dashboard.",
        stack: &["Rust", "Ratatui", "SGP4"],
        link: "https://github.com/",
    },
    Project {
        title: "Paperweight",
        summary: "Static site generator tuned for documentation sets.",
        stack: &["Rust", "Tera", "Pulldown"],
        link: "https://github.com/",
    },
];

pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub detail: &'static str,
}

pub const JOURNEY: [Milestone; 6] = [
    Milestone {
        period: "2025 - NOW",
        title: "Staff Engineer",
        place: "Northwind Labs",
        detail: "Leads the platform team behind the event pipeline.",
    },
    Milestone {
        period: "2022 - 2025",
        title: "Senior Engineer",
        place: "Brightline",
        detail: "Rebuilt the billing core and cut p99 latency by 70%.",
    },
    Milestone {
        period: "2020 - 2022",
        title: "Software Engineer",
        place: "Cobalt Systems",
        detail: "Shipped the first WebAssembly editor in the product line.",
    },
    Milestone {
        period: "2019",
        title: "Open Source Fellow",
        place: "Rust Foundation",
        detail: "Maintained async tooling and wrote the migration guides.",
    },
    Milestone {
        period: "2018",
        title: "Engineering Intern",
        place: "Harbor Robotics",
        detail: "Wrote motor-control firmware for warehouse rovers.",
    },
    Milestone {
        period: "2015 - 2019",
        title: "B.Sc. Computer Science",
        place: "State University",
        detail: "Focus on compilers and operating systems.",
    },
];

pub struct SectionInfo {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [SectionInfo; 6] = [
    SectionInfo { id: "home", label: "Home" },
    SectionInfo { id: "about", label: "About" },
    SectionInfo { id: "skills", label: "Skills" },
    SectionInfo { id: "projects", label: "Projects" },
    SectionInfo { id: "journey", label: "Journey" },
    SectionInfo { id: "contact", label: "Contact" },
];
