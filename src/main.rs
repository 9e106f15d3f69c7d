use folio_core::{Locale, DEFAULT_LOCALE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = folio_lib::init()?;

    let locale = std::env::args()
        .nth(1)
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or(DEFAULT_LOCALE);
    let switch = app.switch_locale(locale.to_code()).await;

    let view = app.projects().view();
    let (all, featured, categories) = view
        .catalog()
        .map(|c| (c.all().len(), c.featured().len(), c.categories().join(", ")))
        .unwrap_or_default();
    tracing::info!(
        locale = %switch.locale,
        projects = all,
        featured,
        categories = %categories,
        messages_fallback = switch.messages.as_ref().map(|m| m.is_fallback()).unwrap_or(true),
        "content loaded"
    );
    Ok(())
}
