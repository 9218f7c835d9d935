use super::{LanguagePicker, TextInput, TranslationDisplay};
use leptos::prelude::*;
use translator_app::domain::TranslatorView;

/// The whole translator screen. Submits to `/translate`, which answers with
/// the same screen re-rendered from the settled state.
#[component]
pub fn TranslatorForm(screen: TranslatorView) -> impl IntoView {
    view! {
        <form action="/translate" method="post" class="translate-form">
            <div class="translate-form__languages">
                <LanguagePicker name="source" label={screen.source_label} selected={screen.source}/>
                <button type="submit" name="action" value="swap" class="translate-form__swap">
                    "⇄"
                </button>
                <LanguagePicker name="target" label={screen.target_label} selected={screen.target}/>
            </div>

            <TextInput value={screen.input}/>

            <button
                type="submit"
                name="action"
                value="translate"
                class="translate-form__button"
                disabled={!screen.trigger_enabled}
            >
                {screen.trigger_label}
            </button>
        </form>

        <TranslationDisplay output={screen.output} is_error={screen.output_is_error}/>
    }
}
