#![allow(dead_code)]
//! Interface for applying an imported record to editor state owned by the
//! caller. The HTTP surface returns records by value; embedders call
//! [`import_into`] with their own [`ResumeState`].

use crate::models::resume::{
    Education, PersonalInfo, Project, ResumeRecord, Skills, WorkExperience,
};

/// The caller-owned resume state a parsed record is merged into.
///
/// Parsing never touches caller state itself; the record is handed back by value
/// and the caller decides when to apply it through this interface.
pub trait ResumeState {
    fn set_personal_info(&mut self, info: PersonalInfo);
    fn append_experience(&mut self, experience: WorkExperience);
    fn append_education(&mut self, education: Education);
    fn set_skills(&mut self, skills: Skills);
    fn append_project(&mut self, project: Project);
    fn set_certifications(&mut self, certifications: Vec<String>);
    fn set_achievements(&mut self, achievements: Vec<String>);
    fn clear_all(&mut self);
}

/// Replaces the caller's resume with an imported record, section by section.
pub fn import_into<S: ResumeState + ?Sized>(state: &mut S, record: ResumeRecord) {
    state.clear_all();
    state.set_personal_info(record.personal_info);
    for experience in record.experience {
        state.append_experience(experience);
    }
    for education in record.education {
        state.append_education(education);
    }
    state.set_skills(record.skills);
    for project in record.projects {
        state.append_project(project);
    }
    state.set_certifications(record.certifications);
    state.set_achievements(record.achievements);
}

impl ResumeState for ResumeRecord {
    fn set_personal_info(&mut self, info: PersonalInfo) {
        self.personal_info = info;
    }

    fn append_experience(&mut self, experience: WorkExperience) {
        self.experience.push(experience);
    }

    fn append_education(&mut self, education: Education) {
        self.education.push(education);
    }

    fn set_skills(&mut self, skills: Skills) {
        self.skills = skills;
    }

    fn append_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    fn set_certifications(&mut self, certifications: Vec<String>) {
        self.certifications = certifications;
    }

    fn set_achievements(&mut self, achievements: Vec<String>) {
        self.achievements = achievements;
    }

    fn clear_all(&mut self) {
        *self = ResumeRecord::default();
    }
}
