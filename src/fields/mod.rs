//! Heuristic field extractors
//!
//! Each extractor is a pure function of the document text.

mod email;
mod name;
mod phone;
mod skills;

pub use email::extract_email;
pub use name::{extract_name, NAME_FALLBACK};
pub use phone::extract_mobile;
pub use skills::{extract_skills, title_case, MAX_SKILLS, SKILL_KEYWORDS};
