//! Prompt templates for SQL synthesis and insight summarization, plus the
//! fence-stripping heuristic applied to raw completions.

/// Instruction prompt asking for a single SQLite statement.
///
/// Embeds the retrieved schemas, the rendered conversation (callers pass the
/// no-history marker when empty), and the question.
#[must_use]
pub fn sql_generation_prompt(schemas_text: &str, history_text: &str, question: &str) -> String {
    format!(
        "You are an expert SQL assistant working against a SQLite database.\n\
         Write a single SQL query that answers the user's question.\n\n\
         Relevant table schemas:\n{schemas_text}\n\n\
         Conversation so far:\n{history_text}\n\n\
         Question: {question}\n\n\
         Rules:\n\
         - Use only the tables and columns shown above.\n\
         - Return ONLY the SQL query, with no explanation or commentary."
    )
}

/// Prompt asking for a short plain-language insight over an executed query's
/// result text.
#[must_use]
pub fn insight_prompt(sql_query: &str, results_text: &str) -> String {
    format!(
        "A user's question was answered by running this SQL query:\n{sql_query}\n\n\
         It returned:\n{results_text}\n\n\
         In one or two sentences, state the key takeaway from these results in \
         plain business language. Do not restate the SQL."
    )
}

/// Strip a Markdown code fence from a completion.
///
/// If the trimmed text opens with a triple-backtick fence, the entire first
/// line (language tag included) is discarded and a trailing fence is
/// removed; otherwise the text is returned trimmed and untouched. Purely
/// textual; no SQL parsing happens here.
#[must_use]
pub fn strip_sql_fences(response: &str) -> String {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_owned();
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => "",
    };
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim().to_owned()
}
