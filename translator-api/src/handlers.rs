use crate::render::render_translator_page;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use translator_app::domain::{
    Language, LanguageSelection, Translation, TranslationRequest, TranslatorState,
};
use translator_app::AppContext;
use translator_errors::TranslationError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TranslateForm {
    text: String,
    source: Option<String>,
    target: Option<String>,
    action: Option<String>,
}

impl TranslateForm {
    fn selection(&self) -> Result<LanguageSelection, TranslationError> {
        let defaults = LanguageSelection::default();
        let source = parse_language(self.source.as_deref())?.unwrap_or(defaults.source);
        let target = parse_language(self.target.as_deref())?.unwrap_or(defaults.target);
        Ok(LanguageSelection::new(source, target))
    }

    fn is_swap(&self) -> bool {
        self.action.as_deref() == Some("swap")
    }
}

/// JSON body of `/v1/translate`. Languages arrive as plain strings so an
/// unknown one is answered with `UnsupportedLanguage` instead of a body
/// rejection.
#[derive(Debug, Deserialize)]
pub struct TranslateJson {
    source_language: String,
    target_language: String,
    #[serde(default)]
    text: String,
}

impl TranslateJson {
    fn into_request(self) -> Result<TranslationRequest, TranslationError> {
        Ok(TranslationRequest::new(
            self.source_language.parse()?,
            self.target_language.parse()?,
            self.text,
        ))
    }
}

fn parse_language(value: Option<&str>) -> Result<Option<Language>, TranslationError> {
    value.map(str::parse).transpose()
}

/// Routes for the plain form and the JSON endpoint. Both share the
/// application context through axum state.
pub fn translate_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/translate", get(translate_query).post(translate_form))
        .route("/v1/translate", post(translate_json))
        .with_state(ctx)
}

async fn translate_query(
    State(ctx): State<AppContext>,
    Query(form): Query<TranslateForm>,
) -> Html<String> {
    handle_translate_form(ctx, form).await
}

async fn translate_form(
    State(ctx): State<AppContext>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    handle_translate_form(ctx, form).await
}

async fn translate_json(
    State(ctx): State<AppContext>,
    Json(body): Json<TranslateJson>,
) -> Result<Json<Translation>, TranslationError> {
    let request = body.into_request()?;
    ctx.translate_text.execute(request).await.map(Json)
}

/// One press of the trigger: begin, await the translation, settle, render.
pub async fn handle_translate_form(ctx: AppContext, form: TranslateForm) -> Html<String> {
    let selection = match form.selection() {
        Ok(selection) => selection,
        Err(e) => {
            let mut state = TranslatorState::default().with_input(form.text);
            state.settle(Err(e));
            return Html(render_translator_page(state.render()));
        }
    };

    let mut state = TranslatorState::new(selection).with_input(form.text.as_str());

    if form.is_swap() {
        state.swap_languages();
        return Html(render_translator_page(state.render()));
    }

    if let Some(request) = state.begin() {
        let result = ctx.translate_text.execute(request).await;
        state.settle(result);
    }

    Html(render_translator_page(state.render()))
}
