use std::fmt;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const PLACEHOLDER_LINK: &str = "#";

/// Classification of a project. Drives both the gallery tab a record shows
/// up under and the icon next to it in the detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Desktop,
    Systems,
    Database,
    Other(&'static str),
}

impl Category {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Systems => "systems",
            Self::Database => "database",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The gallery filter tabs.
///
/// There is no `Database` tab: database projects are only reachable through
/// `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryTab {
    #[default]
    All,
    Web,
    Desktop,
    Systems,
}

impl CategoryTab {
    pub const ALL: [CategoryTab; 4] = [Self::All, Self::Web, Self::Desktop, Self::Systems];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Web => "Web",
            Self::Desktop => "Desktop",
            Self::Systems => "Systems",
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Web => *category == Category::Web,
            Self::Desktop => *category == Category::Desktop,
            Self::Systems => *category == Category::Systems,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Layers,
    Code,
    Server,
    Database,
}

impl Icon {
    pub fn css_class(&self) -> &'static str {
        match self {
            Icon::Layers => "extra-layers",
            Icon::Code => "extra-code",
            Icon::Server => "extra-server",
            Icon::Database => "extra-database",
        }
    }
}

pub fn category_icon(category: &Category) -> Icon {
    match category {
        Category::Web => Icon::Layers,
        Category::Desktop => Icon::Code,
        Category::Systems => Icon::Server,
        Category::Database => Icon::Database,
        Category::Other(_) => Icon::Code,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    /// One entry per paragraph.
    pub full_description: &'static [&'static str],
    pub image: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub category: Category,
    pub features: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
}

/// The leading tags shown on a card plus how many were left off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub shown: &'static [&'static str],
    pub hidden: usize,
}

impl ProjectRecord {
    pub fn image_src(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn demo_href(&self) -> &'static str {
        self.demo_link.unwrap_or(PLACEHOLDER_LINK)
    }

    pub fn github_href(&self) -> &'static str {
        self.github_link.unwrap_or(PLACEHOLDER_LINK)
    }

    pub fn icon(&self) -> Icon {
        category_icon(&self.category)
    }

    pub fn tag_summary(&self, limit: usize) -> TagSummary {
        let tags = self.tags;
        let split = limit.min(tags.len());
        TagSummary {
            shown: &tags[..split],
            hidden: tags.len() - split,
        }
    }
}

/// Returns the records whose category matches `tab`, in their original order.
pub fn filter<'a, I>(records: I, tab: CategoryTab) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    records
        .into_iter()
        .filter(|record| tab.matches(&record.category))
        .collect()
}

/// Holds the record currently open in the detail dialog, if any.
///
/// Selection is independent of the active tab: a record stays open when the
/// filter changes, even if the new tab would hide its card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailSelector<'a> {
    slot: Option<&'a ProjectRecord>,
}

impl<'a> DetailSelector<'a> {
    pub fn select(&mut self, record: &'a ProjectRecord) {
        self.slot = Some(record);
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn current(&self) -> Option<&'a ProjectRecord> {
        self.slot
    }

    pub fn is_open(&self) -> bool {
        self.slot.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum GalleryEvent<'a> {
    TabActivated(CategoryTab),
    RecordSelected(&'a ProjectRecord),
    DetailDismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel<'a> {
    pub visible: Vec<&'a ProjectRecord>,
    pub selected: Option<&'a ProjectRecord>,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectGallery<'a> {
    catalog: &'a [ProjectRecord],
    active: CategoryTab,
    selector: DetailSelector<'a>,
}

impl<'a> ProjectGallery<'a> {
    pub fn new(catalog: &'a [ProjectRecord]) -> Self {
        Self {
            catalog,
            active: CategoryTab::default(),
            selector: DetailSelector::default(),
        }
    }

    pub fn handle(&mut self, event: GalleryEvent<'a>) {
        match event {
            GalleryEvent::TabActivated(tab) => self.active = tab,
            GalleryEvent::RecordSelected(record) => self.selector.select(record),
            GalleryEvent::DetailDismissed => self.selector.clear(),
        }
    }

    pub fn active_tab(&self) -> CategoryTab {
        self.active
    }

    pub fn visible(&self) -> Vec<&'a ProjectRecord> {
        filter(self.catalog, self.active)
    }

    pub fn selected(&self) -> Option<&'a ProjectRecord> {
        self.selector.current()
    }

    pub fn is_detail_open(&self) -> bool {
        self.selector.is_open()
    }

    pub fn render_model(&self) -> RenderModel<'a> {
        RenderModel {
            visible: self.visible(),
            selected: self.selected(),
        }
    }
}

pub fn catalog() -> &'static [ProjectRecord] {
    CATALOG
}

static CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-Commerce Platform",
        short_description: "A full-featured e-commerce platform with product management.",
        description: "A full-featured e-commerce platform with product management, cart functionality, and payment processing.",
        full_description: &[
            "This e-commerce platform provides businesses with a complete solution for selling products online. Built with C++ and Qt for high performance and cross-platform compatibility.",
            "Features include a responsive design, product catalog with filtering and search capabilities, shopping cart functionality, secure checkout integration, user authentication, and an admin dashboard for managing products, orders, and customers.",
        ],
        image: Some("/placeholder.svg?height=400&width=600"),
        tags: &["C++", "Qt", "SQLite", "CMake"],
        category: Category::Desktop,
        features: &[
            "Inventory management system",
            "Real-time stock tracking",
            "Secure payment processing",
            "Order management dashboard",
            "Customer analytics",
        ],
        demo_link: None,
        github_link: None,
    },
    ProjectRecord {
        id: 2,
        title: "Task Management System",
        short_description: "A collaborative task management application with real-time updates.",
        description: "A collaborative task management application with real-time updates and team workspaces.",
        full_description: &[
            "This task management system helps teams organize and track their work efficiently. Built with Java Spring Boot for the backend and React for the frontend, it provides robust task management capabilities.",
            "Features include task creation and assignment, due dates and reminders, progress tracking, file attachments, comments and discussions, team workspaces, and real-time updates.",
        ],
        image: Some("/placeholder.svg?height=400&width=600"),
        tags: &["Java", "Spring Boot", "React", "PostgreSQL"],
        category: Category::Web,
        features: &[
            "Real-time collaboration",
            "Task dependencies",
            "Resource allocation",
            "Progress tracking",
            "Team management",
        ],
        demo_link: None,
        github_link: None,
    },
    ProjectRecord {
        id: 3,
        title: "System Resource Monitor",
        short_description: "A comprehensive system monitoring tool with real-time analytics.",
        description: "A comprehensive system monitoring tool with real-time analytics and performance tracking.",
        full_description: &[
            "This system resource monitor provides real-time insights into system performance. Built primarily in C++ with Python for data analysis, it offers comprehensive monitoring capabilities.",
            "The application tracks CPU usage, memory consumption, network traffic, and disk operations, providing detailed analytics and alerts for system administrators.",
        ],
        image: Some("/placeholder.svg?height=400&width=600"),
        tags: &["C++", "Python", "Qt", "Linux"],
        category: Category::Desktop,
        features: &[
            "CPU/Memory monitoring",
            "Process management",
            "Network analytics",
            "Disk usage tracking",
            "Performance alerts",
        ],
        demo_link: None,
        github_link: None,
    },
    ProjectRecord {
        id: 4,
        title: "Compiler Design Project",
        short_description: "A custom programming language compiler with optimization features.",
        description: "A custom programming language compiler with advanced optimization features.",
        full_description: &[
            "This compiler project implements a custom programming language with modern features and optimizations. Built using C and LLVM, it includes comprehensive error handling and code optimization capabilities.",
            "The compiler performs lexical analysis, syntax parsing, semantic analysis, and generates optimized assembly code.",
        ],
        image: Some("/placeholder.svg?height=400&width=600"),
        tags: &["C", "LLVM", "Assembly", "Python"],
        category: Category::Systems,
        features: &[
            "Lexical analysis",
            "Syntax parsing",
            "Code optimization",
            "Error handling",
            "Assembly generation",
        ],
        demo_link: None,
        github_link: None,
    },
    ProjectRecord {
        id: 5,
        title: "Distributed Database System",
        short_description: "A distributed database system with high availability.",
        description: "A distributed database system with high availability and fault tolerance.",
        full_description: &[
            "This distributed database system provides high availability and fault tolerance for large-scale applications. Built with C++ and Rust for performance, it implements advanced features such as data replication, sharding, and automatic failover.",
            "The system includes comprehensive monitoring and management tools.",
        ],
        image: Some("/placeholder.svg?height=400&width=600"),
        tags: &["C++", "Rust", "gRPC", "Redis"],
        category: Category::Systems,
        features: &[
            "Data replication",
            "Sharding",
            "Fault tolerance",
            "Load balancing",
            "Transaction management",
        ],
        demo_link: None,
        github_link: None,
    },
    ProjectRecord {
        id: 6,
        title: "Neural Network Framework",
        short_description: "A deep learning framework optimized for performance.",
        description: "A deep learning framework with CUDA acceleration and optimization features.",
        full_description: &[
            "This neural network framework provides high-performance deep learning capabilities. Built primarily in C++ with CUDA acceleration, it offers comprehensive tools for building and training neural networks.",
            "Features include automatic differentiation, model optimization, and detailed performance profiling.",
        ],
        image: Some("/placeholder.svg?height=400&width=600"),
        tags: &["C++", "CUDA", "Python", "CMake"],
        category: Category::Systems,
        features: &[
            "CUDA acceleration",
            "Automatic differentiation",
            "Model optimization",
            "Training pipelines",
            "Performance profiling",
        ],
        demo_link: None,
        github_link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(id: u32, category: Category) -> ProjectRecord {
        ProjectRecord {
            id,
            title: "Test Project",
            short_description: "short",
            description: "description",
            full_description: &["paragraph one", "paragraph two"],
            image: None,
            tags: &["Rust", "Leptos", "Axum"],
            category,
            features: &[],
            demo_link: None,
            github_link: None,
        }
    }

    fn mixed_catalog() -> Vec<ProjectRecord> {
        vec![
            record(1, Category::Desktop),
            record(2, Category::Web),
            record(3, Category::Desktop),
            record(4, Category::Systems),
            record(5, Category::Database),
            record(6, Category::Systems),
            record(7, Category::Other("embedded")),
        ]
    }

    fn ids(records: &[&ProjectRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids = catalog().iter().map(|r| r.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_catalog_records_well_formed() {
        for r in catalog() {
            assert!(!r.title.is_empty(), "record {} has no title", r.id);
            assert!(!r.full_description.is_empty());
            assert!(!matches!(r.category, Category::Other(_)));
        }
    }

    #[test]
    fn test_filter_systems_keeps_order() {
        let categories = catalog().iter().map(|r| r.category).collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                Category::Desktop,
                Category::Web,
                Category::Desktop,
                Category::Systems,
                Category::Systems,
                Category::Systems,
            ]
        );

        let systems = filter(catalog(), CategoryTab::Systems);
        assert_eq!(ids(&systems), vec![4, 5, 6]);
        assert!(std::ptr::eq(systems[0], &catalog()[3]));
    }

    #[test]
    fn test_filter_is_exact_subsequence() {
        let catalog = mixed_catalog();
        for tab in CategoryTab::ALL {
            let wanted = match tab {
                CategoryTab::All => None,
                CategoryTab::Web => Some(Category::Web),
                CategoryTab::Desktop => Some(Category::Desktop),
                CategoryTab::Systems => Some(Category::Systems),
            };
            let result = filter(&catalog, tab);
            let expected = catalog
                .iter()
                .filter(|r| wanted.is_none_or(|c| r.category == c))
                .map(|r| r.id)
                .collect::<Vec<_>>();
            assert_eq!(ids(&result), expected, "tab {:?}", tab);
            assert!(result.len() <= catalog.len());
        }
        assert_eq!(filter(&catalog, CategoryTab::All).len(), catalog.len());
    }

    #[test]
    fn test_filter_idempotent() {
        let catalog = mixed_catalog();
        for tab in CategoryTab::ALL {
            let once = filter(&catalog, tab);
            let twice = filter(once.clone(), tab);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_empty_tab() {
        let catalog = vec![record(1, Category::Desktop), record(2, Category::Systems)];
        assert!(filter(&catalog, CategoryTab::Web).is_empty());
        assert!(filter(Vec::<&ProjectRecord>::new(), CategoryTab::All).is_empty());
    }

    #[test]
    fn test_database_only_under_all() {
        let catalog = mixed_catalog();
        let db = &catalog[4];
        assert_eq!(db.category, Category::Database);

        assert!(filter(&catalog, CategoryTab::All).contains(&db));
        for tab in [CategoryTab::Web, CategoryTab::Desktop, CategoryTab::Systems] {
            assert!(!filter(&catalog, tab).contains(&db), "tab {:?}", tab);
        }
    }

    #[test]
    fn test_category_icons() {
        assert_eq!(category_icon(&Category::Web), Icon::Layers);
        assert_eq!(category_icon(&Category::Desktop), Icon::Code);
        assert_eq!(category_icon(&Category::Systems), Icon::Server);
        assert_eq!(category_icon(&Category::Database), Icon::Database);
        assert_eq!(category_icon(&Category::Other("mobile")), Icon::Code);
    }

    #[test]
    fn test_category_slugs() {
        let known = [
            (Category::Web, "web"),
            (Category::Desktop, "desktop"),
            (Category::Systems, "systems"),
            (Category::Database, "database"),
        ];
        for (category, slug) in known {
            assert_eq!(category.slug(), slug);
            assert_eq!(category.to_string(), slug);
        }
        assert_eq!(Category::Other("mobile").slug(), "mobile");
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let r = record(1, Category::Web);
        assert_eq!(r.image_src(), PLACEHOLDER_IMAGE);
        assert_eq!(r.demo_href(), "#");
        assert_eq!(r.github_href(), "#");

        let mut gallery = ProjectGallery::new(std::slice::from_ref(&r));
        gallery.handle(GalleryEvent::RecordSelected(&r));
        let selected = gallery.selected().expect("record should be selected");
        assert_eq!(selected.image_src(), "/placeholder.svg");
    }

    #[test]
    fn test_tag_summary() {
        let r = record(1, Category::Web);
        let summary = r.tag_summary(2);
        assert_eq!(summary.shown, &["Rust", "Leptos"]);
        assert_eq!(summary.hidden, 1);

        let summary = r.tag_summary(10);
        assert_eq!(summary.shown.len(), 3);
        assert_eq!(summary.hidden, 0);
    }

    #[test]
    fn test_selector_round_trip() {
        for r in catalog() {
            let mut selector = DetailSelector::default();
            selector.select(r);
            assert!(selector.is_open());
            selector.clear();
            assert_eq!(selector, DetailSelector::default());
            assert!(!selector.is_open());
        }
    }

    #[test]
    fn test_selector_last_write_wins() {
        let (r1, r2) = (&catalog()[0], &catalog()[1]);
        let mut selector = DetailSelector::default();
        selector.select(r1);
        selector.select(r2);
        assert_eq!(selector.current().map(|r| r.id), Some(2));

        selector.select(r2);
        assert_eq!(selector.current().map(|r| r.id), Some(2));
        assert!(selector.is_open());
    }

    #[test]
    fn test_selection_survives_tab_change() {
        let mut gallery = ProjectGallery::new(catalog());
        let web = &catalog()[1];
        gallery.handle(GalleryEvent::RecordSelected(web));
        gallery.handle(GalleryEvent::TabActivated(CategoryTab::Systems));

        let model = gallery.render_model();
        assert_eq!(ids(&model.visible), vec![4, 5, 6]);
        assert_eq!(model.selected.map(|r| r.id), Some(2));
        assert!(gallery.is_detail_open());

        gallery.handle(GalleryEvent::DetailDismissed);
        assert!(gallery.selected().is_none());
        assert_eq!(gallery.active_tab(), CategoryTab::Systems);
    }

    #[test]
    fn test_gallery_initial_state() {
        let gallery = ProjectGallery::new(catalog());
        assert_eq!(gallery.active_tab(), CategoryTab::All);
        assert_eq!(gallery.visible().len(), catalog().len());
        assert!(!gallery.is_detail_open());
    }
}
