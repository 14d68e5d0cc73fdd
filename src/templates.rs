use once_cell::sync::Lazy;
use tera::{Context, Tera};

pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::new("views/**/*").expect("Failed to initialize Tera templates");
    tera.autoescape_on(vec![".html"]);
    tera
});

pub const WELCOME_EMAIL_SUBJECT: &str = "Welcome to Afrigem Beauty!";

/// The fixed welcome email as (html, text) bodies. Same for every
/// recipient; the only template variable is the site link.
pub fn welcome_email(base_url: &str) -> Result<(String, String), tera::Error> {
    let mut ctx = Context::new();
    ctx.insert("base_url", base_url);
    let html = TEMPLATES.render("welcome_email.html", &ctx)?;
    let text = TEMPLATES.render("welcome_email.txt", &ctx)?;
    Ok((html, text))
}
