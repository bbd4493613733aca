use leptos::prelude::*;
use sensei_core::Answer;

/// Display panel for one answer
#[component]
pub fn AnswerPanel(answer: Answer) -> impl IntoView {
    view! {
        <div class="answer-panel">
            <h2 class="answer-heading">"✅ Answer from the " {answer.persona_label}</h2>
            <p class="answer-text">{answer.text}</p>
        </div>
    }
}
