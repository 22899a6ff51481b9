//! Static copy for every section of the page.
//!
//! Nothing here is mutated at runtime; sections borrow these slices directly.

pub const OWNER_NAME: &str = "Ashwani Singh";
pub const JOB_TITLE: &str = "Data Analyst and Software Developer";
pub const TAGLINE: &str = "Transforming Data into Insights | Building Scalable Web Solutions";
pub const BIO: &str = "Data Analyst and Software Developer with expertise in machine learning, \
    full-stack development, and data visualization. Currently pursuing MCA in Data Science \
    at Career Point University.";
pub const SUMMARY: &str = "Expert in data analytics, machine learning, and full-stack web development";
pub const ALMA_MATER: &str = "Career Point University";

pub const EMAIL: &str = "ashwani.chauhan366@gmail.com";
pub const PHONE: &str = "+91-8840073762";
pub const PHONE_HREF: &str = "tel:+918840073762";
pub const LOCATION: &str = "Kanpur, Uttar Pradesh, India";
pub const GITHUB_URL: &str = "https://github.com/Ashwani1456";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ashwani-singh-7b8a9228b/";

/// Small glyphs standing in for an icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    GraduationCap,
    Award,
    BarChart,
    Code,
    Brain,
    Database,
    Layout,
    Zap,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::GraduationCap => "🎓",
            Icon::Award => "🏆",
            Icon::BarChart => "📊",
            Icon::Code => "💻",
            Icon::Brain => "🧠",
            Icon::Database => "🗄️",
            Icon::Layout => "🧩",
            Icon::Zap => "⚡",
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
            Icon::MapPin => "📍",
            Icon::Github => "🐙",
            Icon::Linkedin => "🔗",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Education {
    pub degree: &'static str,
    pub specialization: Option<&'static str>,
    pub institution: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: Icon,
    /// Accent class for the icon tile.
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    /// Stable id, used as the reveal key and the list key.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// Footer shortcut to a section, by fragment.
pub struct QuickLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const HERO_SKILLS: &[&str] = &[
    "Python",
    "Django",
    "React",
    "Machine Learning",
    "Data Analytics",
    "SQL",
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Computer Applications (MCA)",
        specialization: Some("Data Science"),
        institution: "Career Point University",
        year: "2025",
    },
    Education {
        degree: "Bachelor of Science (B.Sc.)",
        specialization: None,
        institution: "DAV College",
        year: "2023",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Generative AI Research",
        description: "Award-winning research paper on Generative AI for Sustainable Future",
        icon: Icon::Award,
    },
    Achievement {
        title: "Data Analytics Internship",
        description: "Completed internship at Dataplay, Jaipur with recognition",
        icon: Icon::BarChart,
    },
    Achievement {
        title: "Full-Stack Development",
        description: "Expertise in Django, React, and REST API development",
        icon: Icon::Code,
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming Languages",
        skills: &["Python", "Java", "JavaScript", "SQL"],
    },
    SkillGroup {
        category: "Web Development",
        skills: &["Django", "React", "HTML5", "CSS3", "REST APIs"],
    },
    SkillGroup {
        category: "Data Science",
        skills: &["Machine Learning", "Data Analytics", "Data Visualization"],
    },
    SkillGroup {
        category: "Tools & Technologies",
        skills: &["Power BI", "Excel", "OpenCV", "Git", "Linux"],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Data Analytics & Visualization",
        description: "Transform complex data into actionable insights using Power BI, Excel, and Python. Create interactive dashboards and comprehensive reports.",
        features: &["Real-time Analytics", "Custom Dashboards", "Data Mining", "Statistical Analysis"],
        icon: Icon::BarChart,
        accent: "accent-primary",
    },
    Service {
        title: "Web Development",
        description: "Build scalable web applications using Django, React, and modern technologies. Full-stack development with responsive design.",
        features: &["Django Backend", "React Frontend", "REST APIs", "Responsive Design"],
        icon: Icon::Code,
        accent: "accent-secondary",
    },
    Service {
        title: "Machine Learning Solutions",
        description: "Develop predictive models and classification systems to solve business problems using advanced ML algorithms.",
        features: &["Predictive Modeling", "Classification", "Data Preprocessing", "Model Optimization"],
        icon: Icon::Brain,
        accent: "accent-accent",
    },
    Service {
        title: "API Development & Integration",
        description: "Design and implement robust APIs for seamless data exchange and system integration across platforms.",
        features: &["REST API Design", "Third-party Integration", "Database Optimization", "Security Implementation"],
        icon: Icon::Database,
        accent: "accent-success",
    },
    Service {
        title: "Dashboard Design",
        description: "Create intuitive and interactive dashboards with real-time data visualization and user-friendly interfaces.",
        features: &["Real-time Updates", "Interactive Charts", "KPI Monitoring", "Custom Widgets"],
        icon: Icon::Layout,
        accent: "accent-warning",
    },
    Service {
        title: "Custom Software Development",
        description: "Build tailored software solutions to meet specific business requirements with modern technologies.",
        features: &["Custom Applications", "System Integration", "Performance Optimization", "Maintenance & Support"],
        icon: Icon::Zap,
        accent: "accent-primary",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "railway-reservation",
        title: "Railway Reservation System",
        description: "Django-based comprehensive train booking platform with Google Maps integration for route visualization and complex journey support.",
        image: "/assets/railway-system.jpg",
        category: "Web Development",
        tech: &["Django", "Python", "Google Maps API", "PostgreSQL", "HTML/CSS"],
        github: GITHUB_URL,
        demo: "#",
        features: &["Real-time booking", "Route visualization", "Payment integration", "Admin dashboard"],
    },
    Project {
        id: "data-dashboard",
        title: "Dynamic Data Visualization Dashboard",
        description: "Interactive real-time analytics dashboard with advanced filtering capabilities and comprehensive KPI monitoring.",
        image: "/assets/data-dashboard.jpg",
        category: "Data Analytics",
        tech: &["Python", "Power BI", "Pandas", "Matplotlib", "SQL"],
        github: GITHUB_URL,
        demo: "#",
        features: &["Real-time updates", "Interactive charts", "Custom filters", "Export capabilities"],
    },
    Project {
        id: "churn-prediction",
        title: "Customer Churn Prediction Model",
        description: "Machine learning model using logistic regression to predict customer attrition with high accuracy and actionable insights.",
        image: "/assets/ml-model.jpg",
        category: "Machine Learning",
        tech: &["Python", "Scikit-learn", "Pandas", "NumPy", "Jupyter"],
        github: GITHUB_URL,
        demo: "#",
        features: &["Predictive modeling", "Feature engineering", "Model evaluation", "Business insights"],
    },
    Project {
        id: "air-canvas",
        title: "Air Canvas Application",
        description: "Innovative gesture-based drawing tool using computer vision to enable drawing in the air with hand movements.",
        image: "/assets/ml-model.jpg",
        category: "Machine Learning",
        tech: &["Python", "OpenCV", "NumPy", "MediaPipe"],
        github: GITHUB_URL,
        demo: "#",
        features: &["Hand tracking", "Real-time processing", "Multiple colors", "Save functionality"],
    },
    Project {
        id: "generative-ai-research",
        title: "Generative AI Research",
        description: "Award-winning research paper on Generative AI for Sustainable Future, exploring innovative applications in environmental solutions.",
        image: "/assets/data-dashboard.jpg",
        category: "Research",
        tech: &["Python", "TensorFlow", "Research", "Documentation"],
        github: GITHUB_URL,
        demo: "#",
        features: &["Original research", "AI applications", "Sustainability focus", "Academic publication"],
    },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: EMAIL,
        href: Some("mailto:ashwani.chauhan366@gmail.com"),
        icon: Icon::Mail,
    },
    ContactInfo {
        label: "Phone",
        value: PHONE,
        href: Some(PHONE_HREF),
        icon: Icon::Phone,
    },
    ContactInfo {
        label: "Location",
        value: LOCATION,
        href: None,
        icon: Icon::MapPin,
    },
];

pub const PROFILE_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: LINKEDIN_URL, icon: Icon::Linkedin },
    SocialLink { label: "GitHub", href: GITHUB_URL, icon: Icon::Github },
];

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink { name: "About", href: "#about" },
    QuickLink { name: "Services", href: "#services" },
    QuickLink { name: "Portfolio", href: "#portfolio" },
    QuickLink { name: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: GITHUB_URL, icon: Icon::Github },
    SocialLink { label: "LinkedIn", href: LINKEDIN_URL, icon: Icon::Linkedin },
    SocialLink { label: "Email", href: "mailto:ashwani.chauhan366@gmail.com", icon: Icon::Mail },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_shows_at_least_three_features() {
        assert!(PROJECTS.iter().all(|p| p.features.len() >= 3));
    }

    #[test]
    fn only_location_has_no_link() {
        let unlinked: Vec<_> = CONTACT_INFO
            .iter()
            .filter(|info| info.href.is_none())
            .map(|info| info.label)
            .collect();
        assert_eq!(unlinked, vec!["Location"]);
    }

    #[test]
    fn quick_links_land_on_their_sections() {
        use crate::anchor::Anchor;

        let targets: Vec<_> = QUICK_LINKS
            .iter()
            .map(|link| Anchor::from_href(link.href))
            .collect();
        assert_eq!(
            targets,
            vec![
                Some(Anchor::About),
                Some(Anchor::Services),
                Some(Anchor::Portfolio),
                Some(Anchor::Contact),
            ]
        );
        for link in QUICK_LINKS {
            assert_eq!(Anchor::from_href(link.href).map(Anchor::label), Some(link.name));
        }
    }
}
