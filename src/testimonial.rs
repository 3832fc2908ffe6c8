use serde::Deserialize;

pub const MAX_RATING: u8 = 5;

/// A client quote shown in the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub avatar: String,
    pub content: String,
    pub rating: u8,
}

impl Testimonial {
    /// One flag per star, filled for positions below the rating.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = self.rating.min(MAX_RATING) as usize;
        std::array::from_fn(|i| i < filled)
    }

    /// "Role, Company", or just the role when there is no company.
    pub fn byline(&self) -> String {
        match self.company.as_deref() {
            Some(company) if !company.is_empty() => format!("{}, {}", self.role, company),
            _ => self.role.clone(),
        }
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson".into(),
            role: "Project Manager".into(),
            company: Some("NYC Skyline Developments".into()),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah".into(),
            content: "Building and Constitution Concepts delivered our office complex on time and under budget. Their attention to detail and quality craftsmanship exceeded our expectations.".into(),
            rating: 5,
        },
        Testimonial {
            id: 2,
            name: "Michael Chen".into(),
            role: "Property Developer".into(),
            company: Some("Manhattan Urban Living".into()),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=michael".into(),
            content: "We've worked with many construction firms over the years, but none have matched the professionalism and expertise of this team. They transformed our vision into reality.".into(),
            rating: 5,
        },
        Testimonial {
            id: 3,
            name: "Emily Rodriguez".into(),
            role: "Homeowner".into(),
            company: Some("Queens Residential Client".into()),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=emily".into(),
            content: "From the initial consultation to the final walkthrough, the entire process was smooth and transparent. Our dream home is everything we hoped for and more.".into(),
            rating: 4,
        },
    ]
}
