use leptos::prelude::*;

#[component]
pub fn TextInput(#[prop(into)] value: String) -> impl IntoView {
    view! {
        <textarea
            name="text"
            class="translate-form__input"
            rows="6"
            placeholder="Type the text you want to translate..."
        >
            {value}
        </textarea>
    }
}
