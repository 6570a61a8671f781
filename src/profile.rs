pub const OWNER: &str = "Creed Warf";
pub const FIRST_NAME: &str = "Creed";
pub const SITE_TITLE: &str = "Creed Warf | Portfolio";
pub const SITE_DESCRIPTION: &str = "Professional portfolio of Creed Warf - Computer Scientist";
pub const TAGLINE: &str = "I build exceptional digital experiences with clean code and modern technologies. Turning complex problems into elegant solutions is what I do best.";
pub const PORTRAIT: &str = "/placeholder.svg?height=400&width=400";

pub const HERO_PHRASES: &[&str] = &["Software Developer", "Computer Scientist", "IT Professional"];

pub const EMAIL: &str = "contact@creedwarf.dev";
pub const LOCATION: &str = "United States";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: "devicon-twitter-original",
    },
];

/// An in-page anchor target, in the order sections appear on the page.
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "home",
        label: "Home",
    },
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "tech-stack",
        label: "Tech Stack",
    },
    NavSection {
        id: "projects",
        label: "Projects",
    },
    NavSection {
        id: "blog",
        label: "Blog",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a computer scientist who enjoys working close to the metal as much as building polished user-facing applications. Most of my work lives somewhere between systems programming, desktop tooling, and the web.",
    "I care about software that is fast, predictable, and easy to reason about. Compilers, databases, and monitoring tools taught me to respect every layer of the stack.",
    "Outside of work I'm usually reading about language design, tinkering with home-lab servers, or writing small tools to scratch my own itches.",
];

pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        value: "6+",
        label: "Featured projects",
    },
    Highlight {
        value: "10+",
        label: "Languages & tools",
    },
    Highlight {
        value: "B.S.",
        label: "Computer Science",
    },
];

pub struct TechGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const TECH_STACK: &[TechGroup] = &[
    TechGroup {
        title: "Languages",
        items: &["C", "C++", "Rust", "Java", "Python", "TypeScript"],
    },
    TechGroup {
        title: "Frameworks",
        items: &["Qt", "Spring Boot", "React", "Next.js", "LLVM"],
    },
    TechGroup {
        title: "Data",
        items: &["PostgreSQL", "SQLite", "Redis", "gRPC"],
    },
    TechGroup {
        title: "Tooling",
        items: &["Linux", "CMake", "Git", "Docker", "CUDA"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_section_ids_unique() {
        let ids = NAV_SECTIONS.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
        assert!(ids.contains("projects"));
        assert!(ids.contains("contact"));
    }

    #[test]
    fn test_tech_groups_not_empty() {
        for group in TECH_STACK {
            assert!(!group.items.is_empty(), "{} has no items", group.title);
        }
    }
}
