use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Quick Translator"</h1>
            <p class="hero__subtitle">
                "Type some text, pick two languages and let the AI translate it"
            </p>
        </div>
    }
}
