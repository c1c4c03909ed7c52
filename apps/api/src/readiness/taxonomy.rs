//! Keyword taxonomy — the fixed skill categories, target roles, and the keyword
//! lists each category is scored against.
//!
//! Built once at startup via `Taxonomy::standard()` and shared read-only as
//! `Arc<Taxonomy>`. There is no mutation path after construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Categories, roles, levels
// ────────────────────────────────────────────────────────────────────────────

/// One of the five skill dimensions a resume is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "DSA")]
    Dsa,
    #[serde(rename = "System Design")]
    SystemDesign,
    #[serde(rename = "Core Programming")]
    CoreProgramming,
    #[serde(rename = "Role Stack")]
    RoleStack,
    #[serde(rename = "Projects / Experience")]
    ProjectsExperience,
}

impl Category {
    /// Evaluation order. Reports always list categories in this order.
    pub const ALL: [Category; 5] = [
        Category::Dsa,
        Category::SystemDesign,
        Category::CoreProgramming,
        Category::RoleStack,
        Category::ProjectsExperience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Dsa => "DSA",
            Category::SystemDesign => "System Design",
            Category::CoreProgramming => "Core Programming",
            Category::RoleStack => "Role Stack",
            Category::ProjectsExperience => "Projects / Experience",
        }
    }
}

/// Target role. Selects which keyword list backs the Role Stack category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Backend Engineer")]
    Backend,
    #[serde(rename = "Full Stack Engineer")]
    FullStack,
    #[serde(rename = "Data Engineer")]
    DataEngineer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Backend, Role::FullStack, Role::DataEngineer];

    pub fn label(self) -> &'static str {
        match self {
            Role::Backend => "Backend Engineer",
            Role::FullStack => "Full Stack Engineer",
            Role::DataEngineer => "Data Engineer",
        }
    }

    /// Exact match against the display label. Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Like `from_label`, but unknown labels resolve to Backend Engineer.
    pub fn resolve(label: &str) -> Role {
        Role::from_label(label).unwrap_or(Role::Backend)
    }
}

/// Keyword-density level for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword lists
// ────────────────────────────────────────────────────────────────────────────

const DSA_KEYWORDS: &[&str] = &[
    "data structures", "algorithms", "dsa", "arrays", "linked list", "tree", "graph",
    "dynamic programming", "dp", "recursion", "sorting", "searching", "hash", "heap",
    "stack", "queue", "binary search", "bfs", "dfs", "leetcode", "hackerrank",
    "competitive programming",
];

const SYSTEM_DESIGN_KEYWORDS: &[&str] = &[
    "system design", "scalability", "distributed", "microservices", "api design",
    "load balancing", "caching", "database design", "rest", "messaging", "queue",
    "cap theorem", "consistency", "availability", "latency", "throughput", "cdns",
    "sharding", "replication", "design patterns", "high level design", "hld", "lld",
];

const CORE_PROGRAMMING_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "typescript", "go", "golang", "c++", "c#", "rust",
    "oop", "object oriented", "multithreading", "concurrency", "async", "memory management",
    "git", "debugging", "testing", "unit test", "code review", "clean code", "refactoring",
];

const PROJECTS_KEYWORDS: &[&str] = &[
    "project", "experience", "built", "developed", "implemented", "deployed",
    "years", "internship", "work experience", "portfolio", "github", "contributed",
    "led", "designed", "architected", "launched", "production", "real-world",
];

const BACKEND_STACK: &[&str] = &[
    "backend", "server", "node", "express", "django", "flask", "spring", "fastapi",
    "sql", "database", "postgres", "mysql", "mongodb", "redis", "elasticsearch",
    "aws", "docker", "kubernetes", "ci/cd", "rest api", "graphql", "grpc",
    "authentication", "authorization", "jwt", "oauth", "message queue", "kafka", "rabbitmq",
];

const FULL_STACK_STACK: &[&str] = &[
    "frontend", "backend", "react", "vue", "angular", "next.js", "html", "css", "javascript",
    "node", "express", "full stack", "fullstack", "rest api", "database", "sql",
    "redux", "state management", "responsive", "ui", "ux", "typescript", "spa",
    "aws", "deployment", "docker", "vercel", "netlify",
];

const DATA_ENGINEER_STACK: &[&str] = &[
    "etl", "data pipeline", "spark", "airflow", "sql", "python", "data warehouse",
    "snowflake", "bigquery", "redshift", "kafka", "hadoop", "hive", "presto",
    "data modeling", "dimensional", "batch", "streaming", "dbt", "databricks",
    "data quality", "metadata", "data lake", "elt",
];

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Immutable keyword configuration shared by every scoring call.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    shared: HashMap<Category, Vec<String>>,
    role_stacks: HashMap<Role, Vec<String>>,
    expected: HashMap<Category, Level>,
}

/// Keyword lists for one role: four shared lists plus that role's stack list.
#[derive(Debug, Clone, Copy)]
pub struct Framework<'a> {
    taxonomy: &'a Taxonomy,
    role: Role,
}

impl Taxonomy {
    /// The built-in taxonomy. Every category expects a High level.
    pub fn standard() -> Self {
        let to_owned = |list: &[&str]| list.iter().map(|k| k.to_lowercase()).collect::<Vec<_>>();

        let shared = HashMap::from([
            (Category::Dsa, to_owned(DSA_KEYWORDS)),
            (Category::SystemDesign, to_owned(SYSTEM_DESIGN_KEYWORDS)),
            (Category::CoreProgramming, to_owned(CORE_PROGRAMMING_KEYWORDS)),
            (Category::ProjectsExperience, to_owned(PROJECTS_KEYWORDS)),
        ]);
        let role_stacks = HashMap::from([
            (Role::Backend, to_owned(BACKEND_STACK)),
            (Role::FullStack, to_owned(FULL_STACK_STACK)),
            (Role::DataEngineer, to_owned(DATA_ENGINEER_STACK)),
        ]);
        let expected = Category::ALL.iter().map(|&c| (c, Level::High)).collect();

        Self {
            shared,
            role_stacks,
            expected,
        }
    }

    /// Framework for a role label; unrecognized labels get the Backend stack.
    pub fn framework(&self, role: &str) -> Framework<'_> {
        self.framework_for(Role::resolve(role))
    }

    pub fn framework_for(&self, role: Role) -> Framework<'_> {
        Framework {
            taxonomy: self,
            role,
        }
    }

    pub fn expected_level(&self, category: Category) -> Level {
        self.expected.get(&category).copied().unwrap_or(Level::High)
    }
}

impl<'a> Framework<'a> {
    /// Keywords for a category. Empty if the category has nothing configured.
    pub fn keywords(&self, category: Category) -> &'a [String] {
        let list = match category {
            Category::RoleStack => self.taxonomy.role_stacks.get(&self.role),
            other => self.taxonomy.shared.get(&other),
        };
        list.map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn expected_level(&self, category: Category) -> Level {
        self.taxonomy.expected_level(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_fixed() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "DSA",
                "System Design",
                "Core Programming",
                "Role Stack",
                "Projects / Experience"
            ]
        );
    }

    #[test]
    fn test_role_resolution() {
        assert_eq!(Role::from_label("Data Engineer"), Some(Role::DataEngineer));
        assert_eq!(Role::from_label("data engineer"), None);
        assert_eq!(Role::resolve("Astronaut"), Role::Backend);
    }

    #[test]
    fn test_only_role_stack_varies_by_role() {
        let taxonomy = Taxonomy::standard();
        let backend = taxonomy.framework_for(Role::Backend);

        for role in Role::ALL {
            let framework = taxonomy.framework_for(role);
            for category in Category::ALL {
                if category == Category::RoleStack {
                    continue;
                }
                assert_eq!(framework.keywords(category), backend.keywords(category));
            }
        }

        let full_stack = taxonomy.framework_for(Role::FullStack);
        let data = taxonomy.framework_for(Role::DataEngineer);
        assert_ne!(
            backend.keywords(Category::RoleStack),
            full_stack.keywords(Category::RoleStack)
        );
        assert_ne!(
            backend.keywords(Category::RoleStack),
            data.keywords(Category::RoleStack)
        );
    }

    #[test]
    fn test_unknown_role_uses_backend_stack() {
        let taxonomy = Taxonomy::standard();
        let fallback = taxonomy.framework("Chief Vibes Officer");
        assert_eq!(
            fallback.keywords(Category::RoleStack),
            taxonomy.framework_for(Role::Backend).keywords(Category::RoleStack)
        );
    }

    #[test]
    fn test_list_sizes() {
        let taxonomy = Taxonomy::standard();
        let fw = taxonomy.framework_for(Role::Backend);
        assert_eq!(fw.keywords(Category::Dsa).len(), 22);
        assert_eq!(fw.keywords(Category::SystemDesign).len(), 23);
        assert_eq!(fw.keywords(Category::CoreProgramming).len(), 22);
        assert_eq!(fw.keywords(Category::ProjectsExperience).len(), 18);
        assert_eq!(fw.keywords(Category::RoleStack).len(), 29);
        assert_eq!(
            taxonomy.framework_for(Role::FullStack).keywords(Category::RoleStack).len(),
            28
        );
        assert_eq!(
            taxonomy.framework_for(Role::DataEngineer).keywords(Category::RoleStack).len(),
            24
        );
    }

    #[test]
    fn test_every_category_expects_high() {
        let taxonomy = Taxonomy::standard();
        for category in Category::ALL {
            assert_eq!(taxonomy.expected_level(category), Level::High);
        }
    }
}
