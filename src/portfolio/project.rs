#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub completion_date: String,
    pub client: String,
    pub details: Option<String>,
}

impl Project {
    /// Long description for the detail view, falling back to the summary.
    pub fn details_or_description(&self) -> &str {
        self.details.as_deref().unwrap_or(&self.description)
    }

    fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    image_url: &str,
    completion_date: &str,
    client: &str,
) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        image_url: image_url.into(),
        completion_date: completion_date.into(),
        client: client.into(),
        details: None,
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Modern Office Building",
            "A state-of-the-art commercial office building with sustainable features and modern design.",
            "Commercial",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80",
            "June 2023",
            "TechCorp Inc.",
        )
        .with_details(
            "This 12-story commercial building features floor-to-ceiling windows, a green roof, solar panels, and a modern open floor plan. The project was completed on schedule and within budget, earning LEED Platinum certification for its sustainable design and energy efficiency.",
        ),
        project(
            "2",
            "Luxury Residential Complex",
            "An upscale residential development featuring premium amenities and contemporary architecture.",
            "Residential",
            "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?w=800&q=80",
            "March 2023",
            "Elite Homes LLC",
        )
        .with_details(
            "This luxury residential complex includes 45 premium units with high-end finishes, a rooftop pool, fitness center, and landscaped gardens. The project incorporates smart home technology throughout and was designed with a focus on creating a sense of community among residents.",
        ),
        project(
            "3",
            "Highway Bridge Expansion",
            "A major infrastructure project expanding a critical highway bridge to improve traffic flow.",
            "Infrastructure",
            "https://images.unsplash.com/photo-1545558014-8692077e9b5c?w=800&q=80",
            "November 2022",
            "State Transportation Department",
        )
        .with_details(
            "This infrastructure project involved expanding a four-lane bridge to six lanes, including pedestrian walkways and bike lanes. The project required careful planning to minimize traffic disruption and was completed two months ahead of schedule.",
        ),
        project(
            "4",
            "Shopping Mall Renovation",
            "Complete renovation and modernization of an existing shopping mall with expanded retail space.",
            "Commercial",
            "https://images.unsplash.com/photo-1519567241046-7f570eee3ce6?w=800&q=80",
            "January 2023",
            "Metro Retail Group",
        )
        .with_details(
            "This renovation project transformed an outdated shopping center into a modern retail destination. The scope included structural reinforcements, a new façade, expanded food court, and improved accessibility features throughout the 120,000 square foot facility.",
        ),
        project(
            "5",
            "Elementary School Building",
            "A new elementary school designed with modern educational needs and safety in mind.",
            "Institutional",
            "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&q=80",
            "August 2022",
            "Westside School District",
        )
        .with_details(
            "This 85,000 square foot elementary school features 32 classrooms, a library media center, gymnasium, cafeteria, and specialized learning spaces. The building incorporates natural lighting, energy-efficient systems, and was designed with security as a priority.",
        ),
        project(
            "6",
            "Industrial Manufacturing Facility",
            "A large-scale manufacturing facility built to precise specifications for a leading industrial company.",
            "Industrial",
            "https://images.unsplash.com/photo-1565636252854-41b5c59c3bb4?w=800&q=80",
            "May 2023",
            "Advanced Manufacturing Inc.",
        )
        .with_details(
            "This 200,000 square foot manufacturing facility includes production areas, warehousing, office space, and specialized equipment foundations. The project required precise coordination with equipment vendors and was delivered with zero safety incidents.",
        ),
    ]
}
