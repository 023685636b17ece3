// src/jd_generator.rs
//! Job description drafting. Pure templating, no model is called.

use crate::error::{ApiError, ApiResult};

pub fn generate(title: &str, technologies: &[String]) -> ApiResult<String> {
    let title = title.trim();
    let technologies: Vec<&str> = technologies
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if title.is_empty() || technologies.is_empty() {
        return Err(ApiError::validation("Title and technologies are required"));
    }

    let tech_stack = technologies.join(", ");

    Ok(format!(
        r#"{title} Position

We are looking for an experienced {title} to join our team.

Key Responsibilities:
- Lead the development of core features
- Collaborate with cross-functional teams
- Mentor junior engineers
- Contribute to architecture decisions
- Ensure code quality and best practices

Required Skills:
- Expertise in {tech_stack}
- 5+ years of professional experience
- Strong problem-solving abilities
- Excellent communication skills

Nice to Have:
- Experience with scalable systems
- Open source contributions
- Technical leadership experience
- Knowledge of DevOps practices

We offer competitive salary, remote work options, and growth opportunities."#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fills_title_and_stack() {
        let text = generate("Rust Engineer", &["Rust".into(), " Tokio ".into()]).unwrap();
        assert!(text.starts_with("Rust Engineer Position"));
        assert!(text.contains("experienced Rust Engineer"));
        assert!(text.contains("Expertise in Rust, Tokio"));
    }

    #[test]
    fn test_generate_requires_inputs() {
        assert!(matches!(
            generate("  ", &["Rust".into()]),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            generate("Rust Engineer", &[" ".into()]),
            Err(ApiError::Validation(_))
        ));
    }
}
