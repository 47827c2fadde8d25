use tasklens_core::task::FormDraft;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{
    AttrValue, Callback, Html, InputEvent, MouseEvent, Properties, SubmitEvent, TargetCast,
    function_component, html,
};

/// The strategies the scoring backend implements. The string is opaque
/// here; the backend owns its meaning.
pub const STRATEGIES: [(&str, &str); 4] = [
    ("smart_balance", "Smart balance"),
    ("fastest_wins", "Fastest wins"),
    ("high_impact", "High impact"),
    ("deadline_driven", "Deadline driven"),
];

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    pub draft: FormDraft,
    pub on_change: Callback<FormDraft>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let field = |apply: fn(&mut FormDraft, String)| {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = draft.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        })
    };

    let on_title = field(|draft, value| draft.title = value);
    let on_due_date = field(|draft, value| draft.due_date = value);
    let on_hours = field(|draft, value| draft.estimated_hours = value);
    let on_importance = field(|draft, value| draft.importance = value);
    let on_dependencies = field(|draft, value| draft.dependencies = value);

    html! {
        <form id="task-form" class="panel" onsubmit={props.on_submit.clone()}>
            <div class="header">{ "Add a task" }</div>
            <label>{ "Title" }</label>
            <input id="title" value={props.draft.title.clone()} oninput={on_title} required={true} />
            <label>{ "Due date" }</label>
            <input id="due_date" type="date" value={props.draft.due_date.clone()} oninput={on_due_date} />
            <label>{ "Estimated hours" }</label>
            <input id="estimated_hours" type="number" min="0" step="0.25"
                value={props.draft.estimated_hours.clone()} oninput={on_hours} />
            <label>{ "Importance (1-10)" }</label>
            <input id="importance" type="number" min="1" max="10" step="1"
                value={props.draft.importance.clone()} oninput={on_importance} />
            <label>{ "Dependencies" }</label>
            <input id="dependencies" placeholder="comma-separated task ids"
                value={props.draft.dependencies.clone()} oninput={on_dependencies} />
            <button type="submit">{ "Add task" }</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalysisControlsProps {
    pub bulk: String,
    pub strategy: String,
    pub on_bulk: Callback<String>,
    pub on_strategy: Callback<String>,
    pub on_analyze: Callback<MouseEvent>,
    pub on_suggest: Callback<MouseEvent>,
}

#[function_component(AnalysisControls)]
pub fn analysis_controls(props: &AnalysisControlsProps) -> Html {
    let on_bulk_input = {
        let on_bulk = props.on_bulk.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_bulk.emit(area.value());
        })
    };

    let on_strategy_change = {
        let on_strategy = props.on_strategy.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_strategy.emit(select.value());
        })
    };

    html! {
        <div class="panel">
            <div class="header">{ "Analyze" }</div>
            <label>{ "Bulk tasks" }</label>
            <textarea id="bulk" placeholder="Paste a JSON array of tasks"
                value={props.bulk.clone()} oninput={on_bulk_input} />
            <label>{ "Strategy" }</label>
            <select id="strategy" onchange={on_strategy_change}>
                {
                    for STRATEGIES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={props.strategy == *value}>{ *label }</option>
                    })
                }
            </select>
            <div class="actions">
                <button id="analyze" onclick={props.on_analyze.clone()}>{ "Analyze" }</button>
                <button id="suggest" onclick={props.on_suggest.clone()}>{ "Suggest top 3" }</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsPaneProps {
    pub html: String,
}

/// The pane the rendered fragments land in. Fragments arrive fully
/// escaped from `tasklens_core::render`.
#[function_component(ResultsPane)]
pub fn results_pane(props: &ResultsPaneProps) -> Html {
    let inner = Html::from_html_unchecked(AttrValue::from(props.html.clone()));

    html! {
        <div id="results" class="panel">{ inner }</div>
    }
}
