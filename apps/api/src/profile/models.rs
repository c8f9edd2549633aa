use crate::profile::normalize::normalize;
use crate::profile::sanitize::{sanitize, FALLBACK_TOKEN};

/// Raw `POST /generate` body. Every field is optional; absent means empty.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub about: String,
    pub skills: String,
    pub education: String,
    pub projects: String,
    pub certifications: String,
    pub achievements: String,
    pub interests: String,
}

/// Normalized profile for one submission. Built once per request, never mutated.
///
/// Scalar fields are trimmed. List fields hold no empty or single-character items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub about: String,
    pub education: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    pub interests: Vec<String>,
}

impl ProfileForm {
    /// Builds the form from decoded `key=value` pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = ProfileForm::default();
        let mut seen: Vec<String> = Vec::new();
        for (key, value) in pairs {
            if seen.contains(&key) {
                continue;
            }
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "linkedin" => &mut form.linkedin,
                "github" => &mut form.github,
                "website" => &mut form.website,
                "about" => &mut form.about,
                "skills" => &mut form.skills,
                "education" => &mut form.education,
                "projects" => &mut form.projects,
                "certifications" => &mut form.certifications,
                "achievements" => &mut form.achievements,
                "interests" => &mut form.interests,
                _ => continue,
            };
            *slot = value;
            seen.push(key);
        }
        form
    }
}

impl ProfileRecord {
    pub fn from_form(form: &ProfileForm) -> Self {
        ProfileRecord {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            linkedin: form.linkedin.trim().to_string(),
            github: form.github.trim().to_string(),
            website: form.website.trim().to_string(),
            about: form.about.trim().to_string(),
            education: form.education.trim().to_string(),
            skills: normalize(&form.skills, true),
            projects: normalize(&form.projects, true),
            certifications: normalize(&form.certifications, true),
            achievements: normalize(&form.achievements, true),
            interests: normalize(&form.interests, true),
        }
    }

    /// Labelled contact fields that are present, in fixed order.
    pub fn contact_parts(&self) -> Vec<String> {
        [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect()
    }

    /// Present contact fields joined by `" | "`, or `None` when there are none.
    pub fn contact_line(&self) -> Option<String> {
        let parts = self.contact_parts();
        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    /// Heading shown on the document: the name, or a placeholder.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Your Name"
        } else {
            &self.name
        }
    }

    /// Storage name of the generated document, `{slug}.pdf`.
    ///
    /// Two profiles with the same name share a file; the later write wins.
    pub fn file_name(&self) -> String {
        let source = if self.name.is_empty() {
            FALLBACK_TOKEN
        } else {
            &self.name
        };
        format!("{}.pdf", sanitize(source))
    }
}
