use axum::response::Html;

use crate::domain::tts::LANGUAGES;

const PAGE_TEMPLATE: &str = include_str!("../../static/index.html");

/// GET / - the single page, with the language dropdown filled in
pub async fn index() -> Html<String> {
    Html(PAGE_TEMPLATE.replace("{{language_options}}", &language_options()))
}

fn language_options() -> String {
    LANGUAGES
        .iter()
        .map(|language| format!(r#"<option value="{0}">{0}</option>"#, language.name))
        .collect::<Vec<_>>()
        .join("\n        ")
}
