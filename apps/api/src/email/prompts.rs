/// System prompt for follow-up email drafting.
pub const FOLLOW_UP_SYSTEM: &str = "You are a career coach who writes short, polite, \
    professional follow-up emails on behalf of job applicants.";

/// Follow-up email prompt template.
/// Replace `{company}`, `{job_title}` and `{greeting}` before sending.
pub const FOLLOW_UP_PROMPT_TEMPLATE: &str = r#"Write a follow-up email about my application for the {job_title} position at {company}.

Requirements:
- Start with a subject line formatted as "Subject: ..." followed by a blank line.
- Open with: {greeting}
- Thank them for considering my application and restate my interest in the {job_title} role.
- Ask politely whether there is an update on the hiring timeline.
- Keep the body under 150 words.
- End with "Best regards," followed by the placeholder "[Your Name]" on its own line."#;
