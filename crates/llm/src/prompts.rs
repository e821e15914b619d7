//! Prompt templates for decision digests

use crate::types::{ConversationInput, PromptMessages};

/// Bumped whenever either template changes wording
pub const PROMPT_TEMPLATE_VERSION: &str = "digest-v1";

/// Placeholder rendered when no participants were given
pub const PARTICIPANTS_NOT_PROVIDED: &str = "N/A";

/// Fallback lines the model is told to use for empty sections
pub const NO_DECISIONS: &str = "No clear decisions made.";
pub const NO_OPEN_QUESTIONS: &str = "All major topics appear resolved.";
pub const NO_ACTION_ITEMS: &str = "No explicit action items identified.";

/// Section headings of the digest, in output order
pub const SECTION_HEADINGS: [&str; 4] = [
    "## Chat Summary:",
    "## Key Decisions Made:",
    "## Unresolved Topics / Open Questions:",
    "## Action Items (Whose Table It Is On):",
];

/// System instruction. Placeholders: `{participants}`, `{no_decisions}`,
/// `{no_open_questions}`, `{no_action_items}`.
pub const INSTRUCTION_TEMPLATE: &str = r#"You are an expert meeting facilitator and summarizer. Your task is to analyze the provided group chat or email thread and extract key information.

Key People Involved (for identifying ownership, if provided): {participants}

Instructions:
1.  **Summarize the core topic(s)** discussed in 2-4 sentences. Focus on the main points and progression of the conversation.
2.  **Identify all clear decisions or agreements made.** For each decision, state what was decided and who is responsible (if mentioned). If a decision implies a concrete action, list it under "Action Items" instead.
3.  **List all topics or questions that are still unresolved/undecided.** These are items that were discussed but no final conclusion was reached.
4.  **Identify clear action items**, specifying the task and the person responsible (if mentioned), and any deadlines. If no specific person is mentioned, note it as "Team/Unassigned".
5.  Maintain a professional, objective, and concise tone throughout the summary.
6.  Output the information in the following structured Markdown format:

## Chat Summary:
[Concise, 2-4 sentence overview of the main points and progression of the conversation.]

## Key Decisions Made:
- [Decision 1. Responsible: [Person/Team]]
- [Decision 2. Responsible: [Person/Team]]
... (If no clear decisions, state "{no_decisions}")

## Unresolved Topics / Open Questions:
- [Unresolved Topic/Question 1]
- [Unresolved Topic/Question 2]
... (If all major topics appear resolved, state "{no_open_questions}")

## Action Items (Whose Table It Is On):
- [ACTION]: [Responsible Person/Team] (Due: [Date/Time if specified])
- [ACTION]: [Responsible Person/Team] (Due: [Date/Time if specified])
... (If no explicit action items, state "{no_action_items}")
"#;

/// User message. Placeholders: `{fence}`, `{conversation}`.
pub const CONVERSATION_TEMPLATE: &str =
    "Here is the group chat/email thread to summarize:\n{fence}\n{conversation}\n{fence}";

/// Build the instruction and conversation messages for one request
pub fn build_prompt(input: &ConversationInput) -> PromptMessages {
    let participants = participants_line(&input.participants);
    let instruction = render(
        INSTRUCTION_TEMPLATE,
        &[
            ("participants", &participants),
            ("no_decisions", NO_DECISIONS),
            ("no_open_questions", NO_OPEN_QUESTIONS),
            ("no_action_items", NO_ACTION_ITEMS),
        ],
    );

    let fence = fence_for(&input.text);
    let conversation = render(
        CONVERSATION_TEMPLATE,
        &[("fence", &fence), ("conversation", &input.text)],
    );

    PromptMessages::new(instruction, conversation)
}

/// Render the participant list, or the sentinel when there is none
pub fn participants_line(participants: &[String]) -> String {
    let names: Vec<&str> = participants
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        PARTICIPANTS_NOT_PROVIDED.to_string()
    } else {
        names.join(", ")
    }
}

/// Code fence longer than any backtick run inside `text`
fn fence_for(text: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    "`".repeat((longest + 1).max(3))
}

/// Single-pass `{name}` substitution.
///
/// Substituted values are copied as-is and never rescanned, so braces inside
/// user text stay literal.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let hit = tail.find('}').and_then(|end| {
            let name = &tail[..end];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });

        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
