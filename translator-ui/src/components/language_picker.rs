use leptos::prelude::*;
use translator_app::domain::Language;

#[component]
pub fn LanguagePicker(
    name: &'static str,
    #[prop(into)] label: String,
    selected: Language,
) -> impl IntoView {
    view! {
        <label class="language-picker">
            <span class="language-picker__label">{label}</span>
            <select name=name class="language-picker__select">
                {Language::ALL
                    .into_iter()
                    .map(|language| {
                        view! {
                            <option value={language.display_name()} selected={language == selected}>
                                {language.display_name()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
