use serde_json::Value;

use crate::api::ScoredTask;
use crate::task::Task;

const PLACEHOLDER: &str = "—";

pub fn score_label(score: f64) -> &'static str {
    if score >= 0.7 {
        "high"
    } else if score >= 0.4 {
        "medium"
    } else {
        "low"
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders scored entries as HTML blocks, one per entry, bucketed by
/// score into a `high`/`medium`/`low` class. All interpolated text is
/// escaped. The `emphasize` flag is requested by the suggest path but
/// currently has no effect on the markup.
#[tracing::instrument(skip_all)]
pub fn render_results(results: &[ScoredTask], _emphasize: bool) -> String {
    if results.is_empty() {
        return "<div class='small'>No results yet.</div>".to_string();
    }

    results.iter().map(render_result_block).collect()
}

fn render_result_block(result: &ScoredTask) -> String {
    let label = score_label(result.score);
    let title = if result.title.is_empty() {
        &result.id
    } else {
        &result.title
    };
    let due = raw_field(&result.raw, "due_date");
    let hours = raw_field(&result.raw, "estimated_hours");
    let importance = raw_field(&result.raw, "importance");

    format!(
        concat!(
            r#"<div class="task {label}">"#,
            r#"<div class="score">{title} <span class="small">({id})</span></div>"#,
            r#"<div class="small">Due: {due} | Hours: {hours} | Importance: {importance}</div>"#,
            r#"<div>Score: {score}</div>"#,
            r#"<div class="small">{explanation}</div>"#,
            "</div>"
        ),
        label = label,
        title = escape_html(title),
        id = escape_html(&result.id),
        due = escape_html(&due),
        hours = escape_html(&hours),
        importance = escape_html(&importance),
        score = escape_html(&result.score.to_string()),
        explanation = escape_html(&result.explanation),
    )
}

/// Local task listing: count heading first, then one block per task,
/// most recent on top.
pub fn render_local(tasks: &[Task]) -> String {
    let items: String = tasks
        .iter()
        .map(|task| {
            format!(
                r#"<div class="task small"><strong>{title}</strong> <div class="small">ID: {id}</div></div>"#,
                title = escape_html(&task.title),
                id = escape_html(&task.id),
            )
        })
        .collect();

    format!("<h3>Local tasks ({})</h3>{items}", tasks.len())
}

// Reads a display field from the raw echo of the submitted record.
// Missing, null, and empty values all fall back to the placeholder dash.
fn raw_field(raw: &Value, key: &str) -> String {
    let shown = match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.is_empty() => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    };
    shown.unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::Suggestion;
    use crate::task::FormDraft;

    fn scored(id: &str, title: &str, score: f64, raw: Value, explanation: &str) -> ScoredTask {
        ScoredTask {
            id: id.to_string(),
            title: title.to_string(),
            score,
            raw,
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn score_label_buckets_on_thresholds() {
        assert_eq!(score_label(0.7), "high");
        assert_eq!(score_label(0.92), "high");
        assert_eq!(score_label(0.4), "medium");
        assert_eq!(score_label(0.69), "medium");
        assert_eq!(score_label(0.39), "low");
        assert_eq!(score_label(0.0), "low");
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b>"A & B"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn analyze_result_renders_bucket_and_escaped_title() {
        let results = [scored("a", "T", 0.8, json!({}), "x")];
        let html = render_results(&results, false);

        assert!(html.contains(r#"class="task high""#));
        assert!(html.contains("T"));
        assert!(html.contains("(a)"));
        assert!(html.contains("x"));
    }

    #[test]
    fn suggestion_renders_medium_bucket_with_why_text() {
        let suggestion = Suggestion {
            id: "b".to_string(),
            title: "S".to_string(),
            score: 0.5,
            why: "y".to_string(),
        };
        let html = render_results(&[ScoredTask::from(suggestion)], true);

        assert!(html.contains(r#"class="task medium""#));
        assert!(html.contains("S"));
        assert!(html.contains("y"));
    }

    #[test]
    fn markup_in_titles_is_escaped() {
        let results = [scored("a", "<script>alert(1)</script>", 0.1, json!({}), "")];
        let html = render_results(&results, false);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_title_falls_back_to_id() {
        let results = [scored("task-9", "", 0.2, json!({}), "")];
        let html = render_results(&results, false);

        assert!(html.contains(r#"<div class="score">task-9"#));
    }

    #[test]
    fn raw_echo_fields_are_shown_with_dash_fallback() {
        let raw = json!({"due_date": "2026-09-01", "importance": 7});
        let results = [scored("a", "T", 0.5, raw, "")];
        let html = render_results(&results, false);

        assert!(html.contains("Due: 2026-09-01"));
        assert!(html.contains("Hours: —"));
        assert!(html.contains("Importance: 7"));
    }

    #[test]
    fn no_results_renders_placeholder() {
        assert_eq!(
            render_results(&[], false),
            "<div class='small'>No results yet.</div>"
        );
    }

    #[test]
    fn local_listing_shows_count_and_escapes_titles() {
        let tasks = [
            FormDraft {
                title: "Newest <task>".to_string(),
                ..FormDraft::default()
            }
            .into_task("local-2".to_string()),
            FormDraft {
                title: "Older".to_string(),
                ..FormDraft::default()
            }
            .into_task("local-1".to_string()),
        ];
        let html = render_local(&tasks);

        assert!(html.starts_with("<h3>Local tasks (2)</h3>"));
        assert!(html.contains("Newest &lt;task&gt;"));
        let newest = html.find("local-2").expect("newest id");
        let older = html.find("local-1").expect("older id");
        assert!(newest < older);
    }
}
