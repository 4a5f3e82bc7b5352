// All LLM prompt constants for concept generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Persona for concept generation. Combined with `JSON_ONLY_SYSTEM` at call time.
pub const CONCEPT_SYSTEM_PERSONA: &str = "You are an expert marketing strategist.";

/// Placeholder text for optional audience fields left blank on the form.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Concept prompt template.
/// Replace: {name}, {age_range}, {location}, {income}, {interests},
///          {pain_points}, {goals}, {additional_context}
pub const CONCEPT_PROMPT_TEMPLATE: &str = r#"Create a comprehensive marketing concept for the following target audience:

**Target Audience**: {name}
**Demographics**: {age_range} years old, living in {location}, income range: {income}
**Interests**: {interests}
**Pain Points**: {pain_points}
**Goals**: {goals}
{additional_context}
Please provide a structured marketing concept with:
1. **Title**: A compelling main message
2. **Description**: A detailed overview
3. **Value Proposition**: How your product/service addresses their pain points and helps achieve their goals
4. **Key Messages**: 3-4 core messages that resonate with this audience
5. **Recommended Channels**: Best marketing channels to reach this demographic
6. **Tone & Style**: Communication approach that fits their profile
7. **Call-to-Action**: Specific action you want them to take

Format the response as a JSON object with these exact keys: title, description, value_proposition, key_messages (array of strings), channels (array of strings), tone, call_to_action."#;

/// Section inserted into `{additional_context}` on remix. Replace: {context}
pub const ADDITIONAL_CONTEXT_SECTION: &str = r#"**Additional Context**: {context}
Use this additional context to take the concept in a fresh direction.
"#;
