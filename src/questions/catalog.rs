//! Static question definitions.

use super::Question;

const CORE_QUESTIONS: &[Question] = &[
    Question {
        key: "goal",
        prompt: "What should the final deliverable accomplish?",
        hint: "Define success in one sentence.",
    },
    Question {
        key: "audience",
        prompt: "Who is the target user or audience?",
        hint: "Be specific (e.g., junior developers, finance analysts, parents).",
    },
    Question {
        key: "output_format",
        prompt: "What output format do you want from the AI?",
        hint: "Examples: bullet list, JSON, markdown table, code files.",
    },
    Question {
        key: "constraints",
        prompt: "What hard constraints must be followed?",
        hint: "Include time, budget, stack, legal, style, or platform limits.",
    },
    Question {
        key: "quality_bar",
        prompt: "How should quality be measured?",
        hint: "Define acceptance criteria or test expectations.",
    },
    Question {
        key: "non_goals",
        prompt: "What should explicitly NOT be included?",
        hint: "List boundaries to avoid scope creep.",
    },
];

const EXTRA_QUESTIONS: &[Question] = &[
    Question {
        key: "data_inputs",
        prompt: "What inputs/data should the solution use?",
        hint: "Mention sources, schema, sample records, or allowed assumptions.",
    },
    Question {
        key: "edge_cases",
        prompt: "What edge cases or failure modes must be handled?",
        hint: "Think null values, outages, security, scaling, ambiguous user input.",
    },
    Question {
        key: "tone",
        prompt: "What tone/style should the response use?",
        hint: "Examples: concise technical, friendly coach, executive summary.",
    },
    Question {
        key: "examples",
        prompt: "Do you have examples of ideal output?",
        hint: "Optional but high-leverage.",
    },
];

/// Topic keywords (lowercase) and the supplemental keys they trigger.
/// Order matters: it decides the order supplemental questions are asked in.
const KEYWORD_TRIGGERS: &[(&str, &[&str])] = &[
    ("web", &["ui_framework", "deployment_target"]),
    ("api", &["api_style", "auth_requirements"]),
    ("data", &["data_volume", "privacy_requirements"]),
    ("agent", &["tool_access", "memory_strategy"]),
];

const SUPPLEMENTAL_QUESTIONS: &[Question] = &[
    Question {
        key: "ui_framework",
        prompt: "Which UI framework or frontend stack should be used?",
        hint: "E.g., React, Vue, Svelte, plain HTML/CSS.",
    },
    Question {
        key: "deployment_target",
        prompt: "Where will this run in production?",
        hint: "E.g., Vercel, AWS Lambda, on-prem, local desktop.",
    },
    Question {
        key: "api_style",
        prompt: "What API style is required?",
        hint: "REST, GraphQL, gRPC, webhook-first, etc.",
    },
    Question {
        key: "auth_requirements",
        prompt: "What authentication/authorization requirements exist?",
        hint: "OAuth, API keys, RBAC, SSO, public/no auth.",
    },
    Question {
        key: "data_volume",
        prompt: "What data scale should the system handle?",
        hint: "Approx rows/events/users and expected growth.",
    },
    Question {
        key: "privacy_requirements",
        prompt: "Any compliance or privacy requirements?",
        hint: "PII handling, GDPR, HIPAA, retention limits, audit trails.",
    },
    Question {
        key: "tool_access",
        prompt: "What tools can the agent call?",
        hint: "Browser, filesystem, code interpreter, internal APIs, none.",
    },
    Question {
        key: "memory_strategy",
        prompt: "Should the agent maintain memory between sessions?",
        hint: "No memory, short-term only, long-term profile, vector DB, etc.",
    },
];

/// Questions asked on every run, before anything else.
pub fn core_questions() -> &'static [Question] {
    CORE_QUESTIONS
}

/// Questions appended to the end of every run.
pub fn extra_questions() -> &'static [Question] {
    EXTRA_QUESTIONS
}

/// The keyword trigger table in declaration order.
pub fn keyword_triggers() -> &'static [(&'static str, &'static [&'static str])] {
    KEYWORD_TRIGGERS
}

/// Look up a supplemental question by key.
pub fn supplemental_question(key: &str) -> Option<&'static Question> {
    SUPPLEMENTAL_QUESTIONS.iter().find(|q| q.key == key)
}
