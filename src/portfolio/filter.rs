use std::fmt;
use std::str::FromStr;

use super::project::Project;

/// A portfolio tab: everything, or one named category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("all"),
            Category::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Category::All)
        } else {
            Ok(Category::Named(s.to_string()))
        }
    }
}

/// Tabs to offer: `All` first, then each category in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<Category> {
    let mut tabs = vec![Category::All];
    for project in projects {
        let category = Category::Named(project.category.clone());
        if !tabs.contains(&category) {
            tabs.push(category);
        }
    }
    tabs
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    active: Category,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &Category {
        &self.active
    }

    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    pub fn matches(&self, project: &Project) -> bool {
        match &self.active {
            Category::All => true,
            Category::Named(name) => project.category == *name,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
