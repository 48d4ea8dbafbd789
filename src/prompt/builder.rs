use super::engine::TeraEngine;
use crate::chain::ReviewRequest;
use crate::error::PromptError;
use tera::Context;

const STYLE_EXTRACTION_TEMPLATE: &str = "
Analyze the following restaurant review and extract key style elements:

{{ review }}

Provide a detailed analysis covering:
1. Tone (e.g., enthusiastic, casual)
2. Language and word choices (e.g., informal, use of slang, simplicity of vocabulary)
3. Content structure (beginning, middle, end focus)
4. Descriptive language
5. Personal touch
6. Engagement techniques
7. Unique phrases or hashtags
8. Humor style
9. Use of emphasis (e.g., capitalization, punctuation)
10. Average word count of the entire script
11. Average sentence length
12. How the script begins
13. What the script focuses on in the middle
14. How the script ends
15. Simplicity of language (lack of high vocabulary words)
16. Any other notable stylistic elements

Format your response as a numbered list. For word count and sentence length, provide specific numbers.
";

const REVIEW_GENERATION_TEMPLATE: &str = "
Use the following style guidelines to create a new restaurant review:

```{{ style_guidelines }}```

Restaurant Name: ```{{ restaurant_name }}```
Cuisine Type: ```{{ cuisine_type }}```
Location: ```{{ location }}```
Special Feature: ```{{ special_feature }}```

Dishes she ate:
```{{ dishes }}```

Additional notes for the script:
```{{ notes }}```

Write a review that incorporates ALL the style elements mentioned above. Make sure to:
- Use the same word count and sentence length as specified
- Begin the script in the same style
- Focus on similar elements in the middle
- End the script in the same manner
- Use simple language throughout, avoiding high vocabulary words.
";

pub const STYLE_EXTRACTION: &str = "style_extraction";
pub const REVIEW_GENERATION: &str = "review_generation";

/// Engine with both pipeline templates registered.
pub fn default_engine() -> Result<TeraEngine, PromptError> {
    let mut engine = TeraEngine::new();
    engine.add_template(STYLE_EXTRACTION, STYLE_EXTRACTION_TEMPLATE)?;
    engine.add_template(REVIEW_GENERATION, REVIEW_GENERATION_TEMPLATE)?;
    Ok(engine)
}

/// Build the stage-one prompt around the rendered reference corpus.
pub fn build_style_extraction_prompt(
    engine: &TeraEngine,
    corpus_fragment: &str,
) -> Result<String, PromptError> {
    let mut ctx = Context::new();
    ctx.insert("review", corpus_fragment);

    engine.render(STYLE_EXTRACTION, &ctx)
}

/// Build the stage-two prompt from a style profile and the six request fields.
pub fn build_review_prompt(
    engine: &TeraEngine,
    style_profile: &str,
    request: &ReviewRequest,
) -> Result<String, PromptError> {
    let mut ctx = Context::new();
    ctx.insert("style_guidelines", style_profile);
    ctx.insert("restaurant_name", &request.restaurant_name);
    ctx.insert("cuisine_type", &request.cuisine_type);
    ctx.insert("location", &request.location);
    ctx.insert("special_feature", &request.special_feature);
    ctx.insert("dishes", &request.dishes);
    ctx.insert("notes", &request.notes);

    engine.render(REVIEW_GENERATION, &ctx)
}
