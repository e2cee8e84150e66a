// All LLM prompt constants for the advisor calls.

pub const RESUME_SKILLS_SYSTEM: &str = "You are a resume analysis assistant.";

/// Resume text is appended directly after this prefix.
pub const RESUME_SKILLS_PROMPT_PREFIX: &str = "You are an expert resume analyzer. \
    Extract only the relevant skills from the following resume text:\n\n";

pub const CAREER_SUGGESTION_SYSTEM: &str = "You are a helpful career counselor.";

/// Career suggestion prompt template. Replace `{skills}` before sending.
pub const CAREER_SUGGESTION_PROMPT_TEMPLATE: &str = "You are a helpful career counselor. \
    Based on these skills: {skills}, suggest 5 suitable career paths with a short description for each.";

pub const LEARNING_RESOURCES_SYSTEM: &str = "You are a learning advisor.";

/// Learning resources prompt template. Replace `{career}` before sending.
pub const LEARNING_RESOURCES_PROMPT_TEMPLATE: &str = "For someone interested in becoming a {career}, recommend:
1. 2 Indian YouTube videos
2. 2 International YouTube videos
3. 2-3 relevant websites
4. Free/Paid Online Courses

Please include clickable links.";
