use crate::content::{Skill, SkillCategory};

/// A closed set of options shown as a row of tab buttons.
pub trait Selectable: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EducationTab {
    #[default]
    Education,
    Achievements,
}

impl Selectable for EducationTab {
    const ALL: &'static [Self] = &[EducationTab::Education, EducationTab::Achievements];

    fn label(self) -> &'static str {
        match self {
            EducationTab::Education => "Education",
            EducationTab::Achievements => "Achievements",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillFilter {
    #[default]
    All,
    Language,
    Framework,
    Tool,
}

impl SkillFilter {
    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Language => category == SkillCategory::Language,
            SkillFilter::Framework => category == SkillCategory::Framework,
            SkillFilter::Tool => category == SkillCategory::Tool,
        }
    }
}

impl Selectable for SkillFilter {
    const ALL: &'static [Self] = &[
        SkillFilter::All,
        SkillFilter::Language,
        SkillFilter::Framework,
        SkillFilter::Tool,
    ];

    fn label(self) -> &'static str {
        match self {
            SkillFilter::All => "All",
            SkillFilter::Language => "Languages",
            SkillFilter::Framework => "Frameworks",
            SkillFilter::Tool => "Tools",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState<T> {
    active: T,
}

impl<T: Selectable> TabState<T> {
    pub fn new(active: T) -> Self {
        Self { active }
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, option: T) -> bool {
        self.active == option
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, option: T) -> bool {
        if self.active == option {
            return false;
        }
        self.active = option;
        true
    }
}

pub fn visible_skills(filter: SkillFilter, skills: &[Skill]) -> Vec<&Skill> {
    skills.iter().filter(|s| filter.matches(s.category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            name: name.to_string(),
            category,
            description: String::new(),
        }
    }

    fn sample() -> Vec<Skill> {
        vec![
            skill("Rust", SkillCategory::Language),
            skill("Leptos", SkillCategory::Framework),
            skill("Git", SkillCategory::Tool),
            skill("Axum", SkillCategory::Framework),
            skill("Go", SkillCategory::Language),
            skill("Tokio", SkillCategory::Framework),
        ]
    }

    #[test]
    fn framework_filter_keeps_order() {
        let skills = sample();
        let names = visible_skills(SkillFilter::Framework, &skills)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Leptos", "Axum", "Tokio"]);
    }

    #[test]
    fn all_filter_is_identity() {
        let skills = sample();
        assert_eq!(visible_skills(SkillFilter::All, &skills).len(), skills.len());
    }

    #[test]
    fn filters_partition_the_list() {
        let skills = sample();
        let total: usize = SkillFilter::ALL
            .iter()
            .filter(|f| **f != SkillFilter::All)
            .map(|f| visible_skills(*f, &skills).len())
            .sum();
        assert_eq!(total, skills.len());
    }

    #[test]
    fn tab_selection_is_single() {
        let mut tabs = TabState::new(EducationTab::default());
        assert!(tabs.is_active(EducationTab::Education));
        assert!(tabs.select(EducationTab::Achievements));
        assert!(!tabs.select(EducationTab::Achievements));
        assert!(!tabs.is_active(EducationTab::Education));
        assert_eq!(tabs.active(), EducationTab::Achievements);
    }

    #[test]
    fn labels() {
        let labels = SkillFilter::ALL.iter().map(|f| f.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Languages", "Frameworks", "Tools"]);
    }
}
