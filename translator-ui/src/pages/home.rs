use crate::components::{Hero, TranslatorForm};
use leptos::prelude::*;
use server_fn::ServerFnError;
use translator_app::domain::{Language, Translation, TranslatorState, TranslatorView};

#[server(TranslateFn, "/api", endpoint = "translate")]
pub async fn translate(
    text: String,
    source: String,
    target: String,
) -> Result<Translation, ServerFnError> {
    use translator_app::domain::TranslationRequest;
    use translator_app::AppContext;

    let ctx = expect_context::<AppContext>();

    let parse = |name: &str| {
        name.parse::<Language>()
            .map_err(|e| ServerFnError::new(e.user_message()))
    };
    let source = parse(&source)?;
    let target = parse(&target)?;
    tracing::debug!("TranslateFn: {} -> {}", source, target);

    ctx.translate_text
        .execute(TranslationRequest::new(source, target, text))
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HomeScreen screen={TranslatorState::default().render()}/> }
}

/// The single translator screen. `/` shows it in its initial state and the
/// `/translate` form endpoint re-renders it after each press.
#[component]
pub fn HomeScreen(screen: TranslatorView) -> impl IntoView {
    view! {
        <Hero/>
        <TranslatorForm screen=screen/>
    }
}
