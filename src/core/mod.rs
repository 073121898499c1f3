// Core algorithm exports
pub mod matcher;
pub mod normalizer;
pub mod scoring;
pub mod skills;
pub mod stemmer;

pub use matcher::{Matcher, RankResult};
pub use normalizer::{normalize, normalize_str, tokenize, STOPWORDS};
pub use scoring::{job_match, job_match_with_weights, location_score, title_score};
pub use skills::{matched_skills, skill_match};
pub use stemmer::stem;
