use tasklens_core::api::{AnalyzeResponse, ScoredTask, SuggestResponse};
use tasklens_core::payload::build_request;
use tasklens_core::render::render_results;
use tasklens_core::task::FormDraft;

#[test]
fn form_submission_through_rendered_analysis() {
    let first = FormDraft {
        title: "Draft the report".to_string(),
        estimated_hours: "3".to_string(),
        importance: "6".to_string(),
        dependencies: "collect-data".to_string(),
        ..FormDraft::default()
    }
    .into_task("local-100".to_string());

    let second = FormDraft {
        title: "Collect data".to_string(),
        ..FormDraft::default()
    }
    .into_task("local-200".to_string());

    // Most recent first, as the form prepends.
    let locals = vec![second, first];

    let bulk = r#"[{"id": "ext-1", "title": "Imported", "importance": 9}]"#;
    let request = build_request(bulk, &locals, "deadline_driven").expect("request");

    assert_eq!(request.strategy, "deadline_driven");
    assert_eq!(request.tasks.len(), 3);
    assert_eq!(request.tasks[0]["id"], "ext-1");
    assert_eq!(request.tasks[1]["id"], "local-200");
    assert_eq!(request.tasks[2]["id"], "local-100");

    let body = serde_json::to_string(&request).expect("encode request");
    assert!(body.contains(r#""strategy":"deadline_driven""#));

    let response: AnalyzeResponse = serde_json::from_str(
        r#"{
            "strategy": "deadline_driven",
            "results": [
                {
                    "id": "ext-1",
                    "title": "Imported",
                    "score": 0.74,
                    "raw": {"importance": 9},
                    "explanation": "No due date provided (treated as low-urgency).",
                    "components": {"urgency": 0.1},
                    "circular": false
                },
                {
                    "id": "local-100",
                    "title": "Draft the report",
                    "score": 0.31,
                    "raw": {"estimated_hours": 3},
                    "explanation": "Due in 12 day(s)."
                }
            ]
        }"#,
    )
    .expect("decode analyze response");

    let html = render_results(&response.results, false);
    assert!(html.contains(r#"class="task high""#));
    assert!(html.contains(r#"class="task low""#));
    assert!(html.contains("Importance: 9"));
    assert!(html.contains("Hours: 3"));
}

#[test]
fn suggest_response_maps_into_shared_rendering() {
    let response: SuggestResponse = serde_json::from_str(
        r#"{
            "strategy": "smart_balance",
            "suggestions": [
                {"id": "b", "title": "S", "score": 0.5, "why": "y"}
            ]
        }"#,
    )
    .expect("decode suggest response");

    let scored: Vec<ScoredTask> = response
        .suggestions
        .into_iter()
        .map(ScoredTask::from)
        .collect();
    let html = render_results(&scored, true);

    assert!(html.contains(r#"class="task medium""#));
    assert!(html.contains("S"));
    assert!(html.contains("y"));
}
