use crate::models::resume::Project;
use crate::parsing::offline::sections::{self, find_section};
use crate::parsing::offline::skills::technical_terms_in;
use crate::parsing::offline::{bullet_items, char_len, strip_bullet};

const MAX_PROJECTS: usize = 5;
/// A line with at least this many words reads as a sentence, not a project name.
const SENTENCE_WORDS: usize = 6;

pub fn extract_projects(text: &str) -> Vec<Project> {
    let Some(window) = find_section(text, &sections::PROJECTS) else {
        return Vec::new();
    };

    let mut projects: Vec<Project> = Vec::new();
    // The first line holds the heading itself.
    for line in window.text.lines().skip(1).map(str::trim) {
        if strip_bullet(line).is_some() {
            if let Some(project) = projects.last_mut() {
                for item in bullet_items(line) {
                    append_sentence(&mut project.description, item);
                }
            }
        } else if line.split_whitespace().count() >= SENTENCE_WORDS {
            if let Some(project) = projects.last_mut() {
                append_sentence(&mut project.description, line);
            }
        } else if is_project_name(line) {
            if projects.len() == MAX_PROJECTS {
                break;
            }
            projects.push(Project {
                id: (projects.len() + 1).to_string(),
                name: line.to_string(),
                ..Default::default()
            });
        }
    }

    for project in &mut projects {
        project.technologies =
            technical_terms_in(&format!("{}\n{}", project.name, project.description));
    }
    projects
}

fn is_project_name(line: &str) -> bool {
    let len = char_len(line);
    len > 5 && len < 100 && line.starts_with(|c: char| c.is_uppercase())
}

fn append_sentence(description: &mut String, sentence: &str) {
    if !description.is_empty() {
        description.push(' ');
    }
    description.push_str(sentence);
}
