use crate::components::answer::AnswerPanel;
use leptos::prelude::*;
use sensei_core::{Answer, Persona, PersonaTable};

#[server]
pub async fn ask_expert(persona_id: String, question: String) -> Result<Answer, ServerFnError> {
    use crate::server::ask;

    ask::submit(persona_id, question)
        .await
        .map_err(ServerFnError::new)
}

#[component]
pub fn Home() -> impl IntoView {
    let table = StoredValue::new(PersonaTable::builtin());
    let personas: Vec<Persona> = table.with_value(|t| t.personas().to_vec());
    let default_id = table.with_value(|t| t.default_persona().id.clone());

    let (persona_id, set_persona_id) = signal(default_id);
    let (question, set_question) = signal(String::new());
    let (response, set_response) = signal(Option::<Answer>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Label of the currently selected persona
    let selected_label = move || {
        let id = persona_id.get();
        table.with_value(|t| t.get(&id).map(|p| p.label.clone()))
            .unwrap_or_else(|| "expert".to_string())
    };

    // Example question changes with the selected persona
    let placeholder = move || {
        let id = persona_id.get();
        table.with_value(|t| t.get(&id).map(|p| p.placeholder.clone()))
            .unwrap_or_default()
    };

    // Shared submit function
    let do_ask = move |question_text: String| {
        if question_text.trim().is_empty() || loading.get() {
            return;
        }

        let selected = persona_id.get();

        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match ask_expert(selected, question_text).await {
                Ok(answer) => {
                    set_response.set(Some(answer));
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("⚠️ {}", e)));
                    leptos::logging::error!("API Error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_ask(question.get());
    };

    // Handle Enter key (Shift+Enter for new line)
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_ask(question.get());
        }
    };

    view! {
        <div class="home-container">
            <header class="hero">
                <h1>"💡 Sensei"</h1>
                <p class="tagline">"Pick an expert, ask your question, get an expert answer"</p>
            </header>

            <section class="usage">
                <p>
                    "This app switches the persona a language model adopts before answering. "
                    "Choose the expert you want on the left, type your question below, and press "
                    <strong>"Ask the expert"</strong> "."
                </p>
            </section>

            <div class="ask-layout">
                <fieldset class="persona-picker">
                    <legend>"👤 Choose an expert"</legend>
                    <For
                        each=move || personas.clone()
                        key=|p| p.id.clone()
                        children=move |p: Persona| {
                            let id = p.id.clone();
                            let checked_id = p.id.clone();
                            view! {
                                <label class="persona-option">
                                    <input
                                        type="radio"
                                        name="persona"
                                        prop:checked=move || persona_id.get() == checked_id
                                        on:change=move |_| set_persona_id.set(id.clone())
                                        prop:disabled=loading
                                    />
                                    <span>{p.label.clone()}</span>
                                </label>
                            }
                        }
                    />
                    <p class="persona-current">
                        "Currently selected: " <strong>{selected_label}</strong>
                    </p>
                </fieldset>

                <form class="ask-form" on:submit=on_submit>
                    <textarea
                        class="question-input"
                        placeholder=placeholder
                        rows="5"
                        prop:value=question
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        prop:disabled=loading
                    />

                    <button
                        type="submit"
                        class="ask-button"
                        prop:disabled=move || loading.get() || question.get().trim().is_empty()
                    >
                        {move || if loading.get() {
                            "🚀 Asking..."
                        } else {
                            "🚀 Ask the expert"
                        }}
                    </button>
                </form>
            </div>

            // Busy indicator naming the persona
            {move || loading.get().then(|| view! {
                <div class="busy-message">
                    "The " <strong>{selected_label}</strong> " is preparing an answer... please wait."
                </div>
            })}

            // Errors render in the same display region as answers
            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span>{err}</span>
                </div>
            })}

            {move || response.get().map(|answer| view! {
                <AnswerPanel answer=answer />
            })}

            // Idle hint before the first submission
            {move || (response.get().is_none() && error.get().is_none() && !loading.get()).then(|| view! {
                <div class="idle-hint">
                    "↑ Select an expert, enter a question, and press the button."
                </div>
            })}
        </div>
    }
}
