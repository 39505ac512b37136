// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs alongside it and pulls cross-cutting pieces from here.

/// Forces bare text output that can be pasted straight into a mail client.
pub const PLAIN_TEXT_ONLY: &str = "Respond with the requested text only. \
    Do NOT use markdown formatting or code fences. \
    Do NOT add commentary before or after the text.";

/// Keeps drafts from inventing facts the user never supplied.
pub const NO_FABRICATION: &str = "Only use the facts provided. \
    Do NOT invent names, dates, interview details, or accomplishments. \
    Where a detail would normally go but is not provided, write around it.";
