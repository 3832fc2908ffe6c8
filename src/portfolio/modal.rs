use super::project::Project;

/// Which project the detail view shows and whether it is open.
///
/// Closing hides the view but keeps the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectModal {
    selected: Option<String>,
    open: bool,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, project_id: &str) {
        self.selected = Some(project_id.to_string());
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected.as_deref()?;
        projects.iter().find(|p| p.id == id)
    }

    /// The project to draw right now, if the modal is open.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        if self.open { self.selected(projects) } else { None }
    }

    /// Text of the open detail view: a header line, then the long details.
    pub fn detail_text(&self, projects: &[Project]) -> Option<String> {
        let project = self.visible(projects)?;
        Some(format!(
            "{} ({} | Client: {} | Completed: {})\n{}",
            project.title,
            project.category,
            project.client,
            project.completion_date,
            project.details_or_description()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::default_projects;

    #[test]
    fn starts_closed_with_nothing_selected() {
        let projects = default_projects();
        let modal = ProjectModal::new();
        assert!(!modal.is_open());
        assert_eq!(modal.selected(&projects), None);
    }

    #[test]
    fn close_keeps_selection() {
        let projects = default_projects();
        let mut modal = ProjectModal::new();

        modal.open("3");
        assert_eq!(
            modal.visible(&projects).map(|p| p.title.as_str()),
            Some("Highway Bridge Expansion")
        );

        modal.close();
        assert_eq!(modal.visible(&projects), None);
        assert_eq!(
            modal.selected(&projects).map(|p| p.id.as_str()),
            Some("3")
        );
    }

    #[test]
    fn detail_text_shows_long_details() {
        let projects = default_projects();
        let mut modal = ProjectModal::new();
        assert_eq!(modal.detail_text(&projects), None);

        modal.open("1");
        let text = modal.detail_text(&projects).expect("project 1 exists");
        assert!(text.starts_with("Modern Office Building (Commercial | Client: TechCorp Inc."));
        assert!(text.contains("LEED Platinum"));

        modal.close();
        assert_eq!(modal.detail_text(&projects), None);
    }

    #[test]
    fn unknown_project_resolves_to_nothing() {
        let projects = default_projects();
        let mut modal = ProjectModal::new();
        modal.open("99");
        assert!(modal.is_open());
        assert_eq!(modal.visible(&projects), None);
    }
}
