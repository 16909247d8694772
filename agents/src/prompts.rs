//! Prompt text for each step.

use indoc::formatdoc;

use crate::classify::Classification;

/// Ask the model to answer with exactly one label.
pub fn classification(query: &str) -> String {
    let [technical, greeting, general] = Classification::ALL.map(Classification::as_str);
    formatdoc! {"
        Classify this user query into one of these categories:
        - '{technical}' if it's about programming, code, or technical concepts
        - '{greeting}' if it's a greeting or casual conversation
        - '{general}' for everything else

        Query: {query}

        Respond with ONLY ONE WORD: {technical}, {greeting}, or {general}"
    }
}

pub fn analysis(query: &str) -> String {
    formatdoc! {"
        You are a technical analyst. Analyze this query and provide:
        1. Key concepts involved
        2. Difficulty level (beginner/intermediate/advanced)
        3. A brief technical breakdown

        Query: {query}

        Keep your analysis concise (2-3 sentences)."
    }
}

/// Final answer prompt, grounded in `analysis` when there is one.
pub fn response(query: &str, analysis: Option<&str>) -> String {
    match analysis {
        Some(analysis) => formatdoc! {"
            Based on this analysis:
            {analysis}

            Provide a clear, helpful response to the user's query: {query}

            Keep your response concise and practical."
        },
        None => formatdoc! {"
            Provide a helpful response to this query: {query}

            Keep your response friendly and concise."
        },
    }
}
