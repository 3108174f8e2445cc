/// Recognized skill keywords, lowercase.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "node",
    "django",
    "flask",
    "html",
    "css",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "machine learning",
    "data science",
    "tensorflow",
    "keras",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "android",
    "ios",
    "flutter",
    "react native",
    "vue",
    "express",
    "spring",
    "hibernate",
    "bootstrap",
    "jquery",
    "typescript",
];

/// Upper bound on the number of skills reported.
pub const MAX_SKILLS: usize = 10;

/// Skill keywords contained anywhere in the text, ignoring case.
///
/// Matching is plain substring containment, so `java` is also reported for
/// text that only mentions JavaScript. Results are title-cased, follow keyword
/// list order and are capped at [`MAX_SKILLS`].
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut skills: Vec<String> = Vec::new();

    for keyword in SKILL_KEYWORDS {
        if skills.len() == MAX_SKILLS {
            break;
        }
        if text_lower.contains(keyword) {
            let skill = title_case(keyword);
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }
    }

    skills
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
///
/// `scikit-learn` becomes `Scikit-Learn`, `c#` becomes `C#`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
