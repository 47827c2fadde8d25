use tasklens_core::api::ScoredTask;
use tasklens_core::payload;
use tasklens_core::render;
use tasklens_core::task::{FormDraft, Task};
use yew::{Callback, Html, MouseEvent, SubmitEvent, function_component, html, use_state};

use crate::api;
use crate::components::{AnalysisControls, ResultsPane, TaskForm};

// Console is the only message sink; the pane is reserved for rendered
// task fragments.
fn show_message(message: &str, is_error: bool) {
    if is_error {
        tracing::error!("{message}");
    } else {
        tracing::info!("{message}");
    }
}

fn local_task_id() -> String {
    format!("local-{}", js_sys::Date::now() as u64)
}

#[function_component(App)]
pub fn app() -> Html {
    let draft = use_state(FormDraft::default);
    let local_tasks = use_state(Vec::<Task>::new);
    let bulk = use_state(String::new);
    let strategy = use_state(|| "smart_balance".to_string());
    let results_html = use_state(String::new);

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |next| draft.set(next))
    };

    let on_bulk = {
        let bulk = bulk.clone();
        Callback::from(move |next| bulk.set(next))
    };

    let on_strategy = {
        let strategy = strategy.clone();
        Callback::from(move |next| strategy.set(next))
    };

    let on_submit = {
        let draft = draft.clone();
        let local_tasks = local_tasks.clone();
        let results_html = results_html.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let task = (*draft).clone().into_task(local_task_id());
            let mut next = (*local_tasks).clone();
            next.insert(0, task);

            show_message("Task added locally.", false);
            results_html.set(render::render_local(&next));
            local_tasks.set(next);
            draft.set(FormDraft::default());
        })
    };

    let on_analyze = {
        let local_tasks = local_tasks.clone();
        let bulk = bulk.clone();
        let strategy = strategy.clone();
        let results_html = results_html.clone();
        Callback::from(move |_: MouseEvent| {
            let request =
                match payload::build_request(bulk.as_str(), local_tasks.as_slice(), strategy.as_str())
                {
                    Ok(request) => request,
                    Err(err) => {
                        show_message(&err.to_string(), true);
                        return;
                    }
                };

            show_message("Analyzing...", false);
            let results_html = results_html.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::analyze(&request).await {
                    Ok(body) => {
                        results_html.set(render::render_results(&body.results, false));
                        show_message("Analysis complete.", false);
                    }
                    Err(api::ApiError::Server { status: _, body }) => show_message(&body, true),
                    Err(err) => show_message(&err.to_string(), true),
                }
            });
        })
    };

    let on_suggest = {
        let local_tasks = local_tasks.clone();
        let bulk = bulk.clone();
        let strategy = strategy.clone();
        let results_html = results_html.clone();
        Callback::from(move |_: MouseEvent| {
            let request =
                match payload::build_request(bulk.as_str(), local_tasks.as_slice(), strategy.as_str())
                {
                    Ok(request) => request,
                    Err(err) => {
                        show_message(&err.to_string(), true);
                        return;
                    }
                };

            show_message("Fetching suggestions...", false);
            let results_html = results_html.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::suggest(&request).await {
                    Ok(body) => {
                        let scored: Vec<ScoredTask> =
                            body.suggestions.into_iter().map(ScoredTask::from).collect();
                        results_html.set(render::render_results(&scored, true));
                        show_message("Top 3 suggestions displayed.", false);
                    }
                    Err(api::ApiError::Server { status: _, body }) => show_message(&body, true),
                    Err(err) => show_message(&err.to_string(), true),
                }
            });
        })
    };

    html! {
        <div class="layout">
            <TaskForm
                draft={(*draft).clone()}
                on_change={on_change}
                on_submit={on_submit}
            />
            <AnalysisControls
                bulk={(*bulk).clone()}
                strategy={(*strategy).clone()}
                on_bulk={on_bulk}
                on_strategy={on_strategy}
                on_analyze={on_analyze}
                on_suggest={on_suggest}
            />
            <ResultsPane html={(*results_html).clone()} />
        </div>
    }
}
