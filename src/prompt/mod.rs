mod builder;
mod engine;

pub use builder::{
    REVIEW_GENERATION, STYLE_EXTRACTION, build_review_prompt, build_style_extraction_prompt,
    default_engine,
};
pub use engine::TeraEngine;
