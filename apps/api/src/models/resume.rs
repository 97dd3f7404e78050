use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// The canonical structured resume. Every section is always present: absent data
/// is an empty string or an empty collection, never a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(deserialize_with = "lenient::object")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient::records")]
    pub experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "lenient::records")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient::skills")]
    pub skills: Skills,
    #[serde(deserialize_with = "lenient::records")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient::string")]
    pub github: String,
    #[serde(deserialize_with = "lenient::string")]
    pub website: String,
    #[serde(deserialize_with = "lenient::string")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    /// Bullet points, in display order.
    #[serde(deserialize_with = "lenient::string_list")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub field: String,
    #[serde(deserialize_with = "lenient::string")]
    pub graduation_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gpa: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "lenient::string_list")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
}

impl Skills {
    /// Technical plus soft skills; languages are not counted.
    pub fn professional_count(&self) -> usize {
        self.technical.len() + self.soft.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub link: String,
}

/// True when an end-date token marks an ongoing role.
pub fn is_ongoing(end_date: &str) -> bool {
    let end = end_date.trim();
    end.eq_ignore_ascii_case("present") || end.eq_ignore_ascii_case("current")
}

impl ResumeRecord {
    /// Downstream consumers only treat a record as populated once it has a name.
    pub fn has_meaningful_data(&self) -> bool {
        !self.personal_info.full_name.trim().is_empty()
    }

    /// Replaces missing or duplicate ids with a per-collection counter ("1", "2", ...).
    /// Ids that are already unique are kept as they are.
    pub fn ensure_unique_ids(&mut self) {
        reassign_ids(self.experience.iter_mut().map(|e| &mut e.id));
        reassign_ids(self.education.iter_mut().map(|e| &mut e.id));
        reassign_ids(self.projects.iter_mut().map(|p| &mut p.id));
    }

    /// Trims every free-text field and drops empty list items.
    pub fn tidy(&mut self) {
        let info = &mut self.personal_info;
        for field in [
            &mut info.full_name,
            &mut info.email,
            &mut info.phone,
            &mut info.location,
            &mut info.linkedin,
            &mut info.github,
            &mut info.website,
            &mut info.summary,
        ] {
            trim_in_place(field);
        }

        for exp in &mut self.experience {
            for field in [
                &mut exp.company,
                &mut exp.position,
                &mut exp.location,
                &mut exp.start_date,
                &mut exp.end_date,
            ] {
                trim_in_place(field);
            }
            tidy_list(&mut exp.description);
            if !exp.current && is_ongoing(&exp.end_date) {
                exp.current = true;
            }
        }

        for edu in &mut self.education {
            for field in [
                &mut edu.institution,
                &mut edu.degree,
                &mut edu.field,
                &mut edu.graduation_date,
                &mut edu.gpa,
                &mut edu.location,
            ] {
                trim_in_place(field);
            }
        }

        for project in &mut self.projects {
            trim_in_place(&mut project.name);
            trim_in_place(&mut project.description);
            trim_in_place(&mut project.link);
            tidy_list(&mut project.technologies);
        }

        tidy_list(&mut self.skills.technical);
        tidy_list(&mut self.skills.soft);
        tidy_list(&mut self.skills.languages);
        tidy_list(&mut self.certifications);
        tidy_list(&mut self.achievements);
    }
}

fn reassign_ids<'a>(ids: impl Iterator<Item = &'a mut String>) {
    let ids: Vec<&mut String> = ids.collect();
    let mut seen = HashSet::new();
    let all_unique = ids
        .iter()
        .all(|id| !id.trim().is_empty() && seen.insert(id.trim().to_string()));
    if all_unique {
        return;
    }
    for (index, id) in ids.into_iter().enumerate() {
        *id = (index + 1).to_string();
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn tidy_list(items: &mut Vec<String>) {
    items.iter_mut().for_each(trim_in_place);
    items.retain(|item| !item.is_empty());
}
