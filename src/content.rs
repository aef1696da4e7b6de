//! Portfolio content: the static dataset the page renders.
//!
//! Content lives in a TOML document supplied by the user (`portfolio.toml`).
//! Every section is optional and defaults to empty, so a partial file still
//! renders. A built-in sample mirrors the layout of a typical data-analyst
//! portfolio and doubles as the `init` template.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::radar::{RADIAL_MAX, SkillRecord};
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub passions: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub counters: Vec<CounterEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Roster entry for the animated counters strip. Pacing comes from
/// config, not content, so the document stays purely declarative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterEntry {
    pub label: String,
    pub target: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Coding,
    DataScience,
}

impl ProjectCategory {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Coding => "Coding Projects",
            Self::DataScience => "Data Science Projects",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A non-fatal finding from [`Content::validate`].
#[derive(Debug, Clone, Serialize)]
pub struct ContentWarning {
    pub field: String,
    pub message: String,
}

impl ContentWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Content {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Content(format!("read {}: {err}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|err| FolioError::Content(format!("parse {}: {err}", path.display())))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| FolioError::Content(format!("serialize content: {err}")))
    }

    /// Sanity findings for `folio validate`. None of these block
    /// rendering; the chart clamps and the page skips what is empty.
    #[must_use]
    pub fn validate(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();

        if self.profile.name.trim().is_empty() {
            warnings.push(ContentWarning::new("profile.name", "name is empty"));
        }

        let mut seen = std::collections::HashSet::new();
        for (i, skill) in self.skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                warnings.push(ContentWarning::new(
                    format!("skills[{i}].name"),
                    "skill name is empty",
                ));
            } else if !seen.insert(skill.name.as_str()) {
                warnings.push(ContentWarning::new(
                    format!("skills[{i}].name"),
                    format!("duplicate skill name '{}'", skill.name),
                ));
            }
            if !(0..=RADIAL_MAX).contains(&skill.proficiency) {
                warnings.push(ContentWarning::new(
                    format!("skills[{i}].proficiency"),
                    format!(
                        "{} is outside 0..={RADIAL_MAX} and will be clamped",
                        skill.proficiency
                    ),
                ));
            }
        }

        for (i, counter) in self.counters.iter().enumerate() {
            if counter.target < 0 {
                warnings.push(ContentWarning::new(
                    format!("counters[{i}].target"),
                    format!("negative target {} cannot be played", counter.target),
                ));
            }
        }

        for (i, link) in self.contact.iter().enumerate() {
            if link.label.trim().is_empty() {
                warnings.push(ContentWarning::new(
                    format!("contact[{i}].label"),
                    "contact label is empty",
                ));
            }
            if let Some(url) = &link.url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    warnings.push(ContentWarning::new(
                        format!("contact[{i}].url"),
                        format!("'{url}' does not look like a URL"),
                    ));
                }
            }
        }

        warnings
    }

    /// Built-in sample used when no portfolio document exists yet, and as
    /// the `init` template.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Alex Rivera".to_string(),
                tagline: "I transform data into actionable insights".to_string(),
                summary: "Data analyst with a focus on sales analytics, dashboarding, \
                          and turning messy datasets into decisions."
                    .to_string(),
            },
            education: vec![
                EducationEntry {
                    degree: "MSc in Applied Statistics & Data Science".to_string(),
                    institution: "Riverside University".to_string(),
                    note: Some("enrolled".to_string()),
                },
                EducationEntry {
                    degree: "BSc in Computer & Communication Engineering".to_string(),
                    institution: "Coastal Technical University".to_string(),
                    note: Some("CGPA 3.61".to_string()),
                },
                EducationEntry {
                    degree: "Higher Secondary Certificate, Science".to_string(),
                    institution: "Harborview College".to_string(),
                    note: None,
                },
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Data Analyst".to_string(),
                    company: "Vibes Retail".to_string(),
                    period: "Feb 2025 - Oct 2025".to_string(),
                    highlights: vec![
                        "Analyzed sales data and prepared dashboards to support decisions"
                            .to_string(),
                        "Evaluated product performance and customer behavior".to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Data & Sales Team Lead".to_string(),
                    company: "Sunnah Dress".to_string(),
                    period: "Jun 2024 - Nov 2024".to_string(),
                    highlights: vec![
                        "Led the sales team and analyzed product trends".to_string(),
                        "Prepared reports to support management decisions".to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Data & Inventory Assistant".to_string(),
                    company: "Craft Emporium (remote)".to_string(),
                    period: "Jul 2023 - Apr 2024".to_string(),
                    highlights: vec![
                        "Maintained inventory and tracked sales performance".to_string(),
                    ],
                },
            ],
            skills: vec![
                SkillRecord::new("Python", 90),
                SkillRecord::new("R", 80),
                SkillRecord::new("SQL", 85),
                SkillRecord::new("ML", 75),
                SkillRecord::new("Visualization", 95),
                SkillRecord::new("EDA", 85),
            ],
            strengths: vec![
                "Problem-solving & analytical thinking".to_string(),
                "Effective communication & collaboration".to_string(),
                "Detail-oriented & results-driven".to_string(),
                "Quick learner & adaptable".to_string(),
            ],
            passions: vec![
                "Transforming data into actionable insights".to_string(),
                "Building interactive dashboards & visualization tools".to_string(),
                "Contributing to innovative AI & data science projects".to_string(),
            ],
            interests: vec![
                "Creative projects".to_string(),
                "Data-driven storytelling".to_string(),
                "Learning new programming techniques".to_string(),
            ],
            counters: vec![
                CounterEntry {
                    label: "Projects Completed".to_string(),
                    target: 8,
                },
                CounterEntry {
                    label: "Datasets Analyzed".to_string(),
                    target: 25,
                },
                CounterEntry {
                    label: "Happy Clients".to_string(),
                    target: 10,
                },
            ],
            projects: vec![
                Project {
                    title: "Python Automation Script".to_string(),
                    summary: "Automated daily tasks with small Python pipelines".to_string(),
                    category: ProjectCategory::Coding,
                    demo_url: None,
                    repo_url: Some("https://github.com/alexr/python-automation".to_string()),
                },
                Project {
                    title: "Web Scraper".to_string(),
                    summary: "Scraped and processed web data for reporting".to_string(),
                    category: ProjectCategory::Coding,
                    demo_url: None,
                    repo_url: Some("https://github.com/alexr/web-scraper".to_string()),
                },
                Project {
                    title: "Sales Dashboard".to_string(),
                    summary: "Interactive dashboard analyzing sales trends and KPIs".to_string(),
                    category: ProjectCategory::DataScience,
                    demo_url: Some("https://dash.example.com/sales".to_string()),
                    repo_url: Some("https://github.com/alexr/sales-dashboard".to_string()),
                },
                Project {
                    title: "Customer Segmentation".to_string(),
                    summary: "Clustered customers for marketing insights".to_string(),
                    category: ProjectCategory::DataScience,
                    demo_url: None,
                    repo_url: Some("https://github.com/alexr/customer-segmentation".to_string()),
                },
            ],
            contact: vec![
                ContactLink {
                    label: "Email".to_string(),
                    value: "alex@example.com".to_string(),
                    url: None,
                },
                ContactLink {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/alexrivera".to_string(),
                    url: Some("https://linkedin.com/in/alexrivera".to_string()),
                },
                ContactLink {
                    label: "GitHub".to_string(),
                    value: "github.com/alexr".to_string(),
                    url: Some("https://github.com/alexr".to_string()),
                },
                ContactLink {
                    label: "Kaggle".to_string(),
                    value: "kaggle.com/alexr".to_string(),
                    url: Some("https://kaggle.com/alexr".to_string()),
                },
            ],
            footer: Some("(c) 2025 Alex Rivera".to_string()),
        }
    }
}
