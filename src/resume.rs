//! Plain-text resume offered by the "Download Resume" actions.

use std::fmt::Write;

use crate::content::{PROFILE, PROJECTS, SKILL_CATEGORIES};

const EXPERIENCE: &[&str] = &[
    "Self-taught Full Stack Developer",
    "Passionate about building real-time applications",
    "Seeking opportunities in full-stack development",
];

pub fn resume_file_name() -> String {
    let name = PROFILE.name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{name}_Resume.txt")
}

pub fn resume_text() -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_resume(&mut out);
    out
}

fn write_resume(out: &mut String) -> std::fmt::Result {
    writeln!(out, "{}", PROFILE.name.to_uppercase())?;
    writeln!(out, "{}", PROFILE.headline)?;
    writeln!(out)?;
    writeln!(out, "Email: {}", PROFILE.email)?;
    writeln!(out, "Phone: {}", PROFILE.phone)?;
    writeln!(out, "Location: {}", PROFILE.location)?;
    writeln!(out, "LinkedIn: {}", PROFILE.linkedin)?;
    writeln!(out, "GitHub: {}", PROFILE.github)?;
    writeln!(out)?;

    writeln!(out, "SKILLS:")?;
    for category in SKILL_CATEGORIES {
        let skills = category
            .skills
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "- {}: {}", category.category, skills)?;
    }
    writeln!(out)?;

    writeln!(out, "PROJECTS:")?;
    for (i, project) in PROJECTS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, project.title)?;
        for feature in project.features {
            writeln!(out, "   - {}", strip_emoji(feature))?;
        }
        writeln!(out, "   - Built with {}", project.tags.join(", "))?;
        writeln!(out)?;
    }

    writeln!(out, "EXPERIENCE:")?;
    for line in EXPERIENCE {
        writeln!(out, "- {line}")?;
    }
    Ok(())
}

// features lead with an emoji for the page, which reads badly in a text file
fn strip_emoji(feature: &str) -> &str {
    match feature.split_once(' ') {
        Some((lead, rest)) if !lead.chars().any(|c| c.is_ascii_alphanumeric()) => rest,
        _ => feature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactForm, Field};

    #[test]
    fn test_file_name() {
        assert_eq!(resume_file_name(), "Sujoy_Sarkar_Resume.txt");
    }

    #[test]
    fn test_resume_sections() {
        let text = resume_text();
        assert!(text.starts_with("SUJOY SARKAR\nFull Stack Developer\n"));
        for heading in ["SKILLS:", "PROJECTS:", "EXPERIENCE:"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("- Frontend: HTML5, CSS3, JavaScript, React, Tailwind CSS, Vite"));
        assert!(text.contains("1. Real-Time News App (SS News)"));
        assert!(text.contains("   - Role-based authentication (Admin/User)"));
        assert_eq!(text, resume_text());
    }

    #[test]
    fn test_resume_leaves_form_alone() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada".to_string());
        let before = form.message().clone();
        let _ = resume_text();
        assert_eq!(form.message(), &before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_strip_emoji() {
        assert_eq!(strip_emoji("📰 Real-time news updates"), "Real-time news updates");
        assert_eq!(strip_emoji("Plain feature"), "Plain feature");
        assert_eq!(strip_emoji("👨‍⚕️ Doctor selection"), "Doctor selection");
    }

    #[test]
    fn test_skills_follow_page_categories() {
        let text = resume_text();
        for category in SKILL_CATEGORIES {
            let line = format!("- {}: ", category.category);
            assert!(text.contains(&line), "missing {line}");
        }
    }
}
