use leptos::prelude::*;

#[component]
pub fn TranslationDisplay(#[prop(into)] output: String, is_error: bool) -> impl IntoView {
    let class = if is_error {
        "translation translation--error"
    } else {
        "translation"
    };

    view! {
        <div class=class>
            <p class="translation__text">{output}</p>
        </div>
    }
}
