//! Profile progress report shown on the progress page.

use crate::models::{Role, User, UserProfile};

/// One line of the progress checklist.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub milestones: Vec<Milestone>,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl ProgressReport {
    /// Build the checklist for `user`; a missing profile counts as empty.
    pub fn from_profile(user: &User, profile: Option<&UserProfile>) -> Self {
        let empty = UserProfile::default();
        let p = profile.unwrap_or(&empty);

        let education = filled(&p.major) && (p.graduation_year.is_some() || user.role == Role::Student);
        let career_label = match user.role {
            Role::Alumni => "Add your current company and role",
            _ => "Add career interests or an internship",
        };
        let career = match user.role {
            Role::Alumni => filled(&p.company) && filled(&p.job_title),
            _ => filled(&p.company) || filled(&p.job_title) || !p.interests.is_empty(),
        };

        let milestones = vec![
            Milestone { label: "Verify your email address", done: user.is_verified.unwrap_or(false) },
            Milestone { label: "Write a short bio", done: filled(&p.bio) },
            Milestone { label: "Add a headline", done: filled(&p.headline) },
            Milestone { label: "List at least three skills", done: p.skills.len() >= 3 },
            Milestone { label: "Share your interests", done: !p.interests.is_empty() },
            Milestone { label: "Fill in your education", done: education },
            Milestone { label: career_label, done: career },
            Milestone { label: "Link LinkedIn or GitHub", done: filled(&p.linkedin_url) || filled(&p.github_url) },
            Milestone { label: "Upload a profile photo", done: filled(&p.avatar_url) },
        ];
        Self { milestones }
    }

    pub fn completed(&self) -> usize {
        self.milestones.iter().filter(|m| m.done).count()
    }

    pub fn total(&self) -> usize {
        self.milestones.len()
    }

    /// Completion as a rounded percentage in `0..=100`.
    pub fn percent(&self) -> u8 {
        if self.milestones.is_empty() {
            return 100;
        }
        let pct = (self.completed() as f64 / self.total() as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    pub fn next_steps(&self) -> Vec<&'static str> {
        self.milestones.iter().filter(|m| !m.done).map(|m| m.label).collect()
    }
}
