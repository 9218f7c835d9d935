use leptos::prelude::*;
use translator_app::domain::TranslatorView;
use translator_ui::pages::HomeScreen;

/// Full HTML document for the `/translate` answer. The body is the same
/// Leptos screen `/` serves, rendered without hydration.
pub fn render_translator_page(screen: TranslatorView) -> String {
    let body = Owner::new().with(|| {
        view! {
            <main class="container">
                <HomeScreen screen=screen/>
            </main>
        }
        .to_html()
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Quick Translator</title>
    <style>{CSS}</style>
</head>
<body>
    {body}
    <script>{TRIGGER_SCRIPT}</script>
</body>
</html>"#
    )
}

/// Disables the trigger while the form is in flight; the answer page comes
/// back with it enabled again.
pub const TRIGGER_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    const form = document.querySelector('.translate-form');
    const button = document.querySelector('.translate-form__button');
    if (!form || !button) return;

    form.addEventListener('submit', function(ev) {
        if (ev.submitter && ev.submitter.value === 'swap') return;
        button.disabled = true;
        button.textContent = 'Translating...';
        button.style.cursor = 'wait';
    });
});
"#;

pub const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --pine: #286983;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 720px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 2.5rem 0 1.5rem; }
.hero__title { font-size: clamp(2rem, 5vw, 2.75rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.05rem; }
.translate-form { display: flex; flex-direction: column; gap: 1rem; margin: 1.5rem 0; }
.translate-form__languages { display: flex; align-items: flex-end; gap: 0.75rem; }
.language-picker { flex: 1; display: flex; flex-direction: column; gap: 0.35rem; }
.language-picker__label { font-size: 0.9rem; color: var(--subtle); }
.language-picker__select {
    padding: 0.6rem 0.75rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--surface); color: var(--text); font-size: 1rem;
}
.translate-form__swap {
    padding: 0.6rem 0.9rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--surface); color: var(--pine); font-size: 1.1rem; cursor: pointer;
}
.translate-form__input {
    padding: 1rem 1.25rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--surface); color: var(--text); font-size: 1rem; font-family: inherit; resize: vertical;
}
.translate-form__input:focus { outline: none; border-color: var(--pine); }
.translate-form__button {
    padding: 0.9rem 2rem; background: var(--pine); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.translate-form__button:disabled { background: var(--muted); cursor: not-allowed; }
.translation {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.25rem; min-height: 4rem;
}
.translation__text { white-space: pre-wrap; line-height: 1.7; }
.translation--error { background: #fce8ec; border-color: var(--love); color: #8b3d4d; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use translator_app::domain::{Language, LanguageSelection, TranslatorState};

    fn screen_of(page: &str) -> &str {
        let start = page.find("<main").unwrap();
        let end = page.find("</main>").unwrap();
        &page[start..end]
    }

    fn option_tag<'a>(screen: &'a str, language: &str) -> &'a str {
        let start = screen.find(&format!(r#"value="{}""#, language)).unwrap();
        let end = start + screen[start..].find('>').unwrap();
        &screen[start..end]
    }

    #[test]
    fn test_page_marks_selected_languages() {
        let state = TranslatorState::new(LanguageSelection::new(Language::Spanish, Language::German));
        let page = render_translator_page(state.render());
        let screen = screen_of(&page);

        assert!(screen.contains("From: Spanish"));
        assert!(screen.contains("To: German"));
        assert!(option_tag(screen, "Spanish").contains("selected"));
        assert!(!option_tag(screen, "English").contains("selected"));
    }

    #[test]
    fn test_page_shares_the_home_screen() {
        let page = render_translator_page(TranslatorState::default().render());
        let screen = screen_of(&page);
        assert!(screen.contains("Quick Translator"));
        assert!(screen.contains("Type some text, pick two languages and let the AI translate it"));
        assert!(screen.contains(r#"action="/translate""#));
    }

    #[test]
    fn test_page_escapes_user_text() {
        let state = TranslatorState::default().with_input("<b>hi</b>");
        let page = render_translator_page(state.render());
        assert!(screen_of(&page).contains("&lt;b"));
        assert!(!page.contains("<b>hi</b>"));
    }

    #[test]
    fn test_busy_page_disables_trigger() {
        let mut state = TranslatorState::default().with_input("Hello");
        state.begin();
        let page = render_translator_page(state.render());
        let screen = screen_of(&page);
        assert!(screen.contains("Translating..."));
        assert!(screen.contains("disabled"));

        let idle = render_translator_page(TranslatorState::default().render());
        assert!(!screen_of(&idle).contains("disabled"));
    }
}
