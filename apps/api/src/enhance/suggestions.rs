//! Static suggestion tables served without a completion provider.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    SoftwareEngineering,
    DataScience,
    ProductManagement,
    Marketing,
    Default,
}

const ACTION_VERBS: [&str; 22] = [
    "Developed",
    "Implemented",
    "Designed",
    "Led",
    "Managed",
    "Created",
    "Optimized",
    "Increased",
    "Reduced",
    "Improved",
    "Launched",
    "Built",
    "Coordinated",
    "Analyzed",
    "Achieved",
    "Delivered",
    "Established",
    "Streamlined",
    "Spearheaded",
    "Executed",
    "Collaborated",
    "Directed",
];

pub fn action_verbs() -> &'static [&'static str] {
    &ACTION_VERBS
}

pub fn technical_skill_suggestions(category: SkillCategory) -> &'static [&'static str] {
    match category {
        SkillCategory::SoftwareEngineering => &[
            "JavaScript",
            "TypeScript",
            "Python",
            "Java",
            "C++",
            "React",
            "Node.js",
            "Docker",
            "Kubernetes",
            "AWS",
            "Git",
            "CI/CD",
            "REST APIs",
            "GraphQL",
        ],
        SkillCategory::DataScience => &[
            "Python",
            "R",
            "SQL",
            "TensorFlow",
            "PyTorch",
            "Pandas",
            "NumPy",
            "Machine Learning",
            "Deep Learning",
            "Data Visualization",
            "Statistics",
        ],
        SkillCategory::ProductManagement => &[
            "Agile",
            "Scrum",
            "JIRA",
            "Product Strategy",
            "User Research",
            "A/B Testing",
            "Analytics",
            "Roadmapping",
            "Stakeholder Management",
        ],
        SkillCategory::Marketing => &[
            "SEO",
            "SEM",
            "Google Analytics",
            "Content Marketing",
            "Social Media",
            "Email Marketing",
            "Marketing Automation",
            "CRM",
            "A/B Testing",
        ],
        SkillCategory::Default => &[
            "Communication",
            "Leadership",
            "Project Management",
            "Problem Solving",
            "Teamwork",
            "Analytical Skills",
            "Time Management",
            "Adaptability",
        ],
    }
}

/// First table whose keywords appear in the title wins.
const TITLE_KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::DataScience,
        &["data scien", "machine learning", "ml engineer", "data analyst", "statistic"],
    ),
    (SkillCategory::ProductManagement, &["product"]),
    (
        SkillCategory::Marketing,
        &["marketing", "seo", "growth", "content", "brand"],
    ),
    (
        SkillCategory::SoftwareEngineering,
        &[
            "software", "developer", "engineer", "programmer", "frontend", "backend",
            "full stack", "full-stack", "devops", "web",
        ],
    ),
];

pub fn category_for_job_title(job_title: &str) -> SkillCategory {
    let title = job_title.to_lowercase();
    TITLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(SkillCategory::Default)
}
