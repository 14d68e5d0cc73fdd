use actix_web::{HttpResponse, http::header::ContentType};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tera::Context as TeraContext;

use crate::content::LandingContent;
use crate::templates::TEMPLATES;

use super::helpers::e500;

/// A pending notification for the page's toast stack.
#[derive(Serialize)]
pub struct Toast {
    pub level: &'static str,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: "success",
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: "warning",
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: "error",
            text: text.into(),
        }
    }
}

/// Values echoed back into the signup forms when a submission fails.
#[derive(Default, Serialize)]
pub struct FormValues {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn home(flash_messages: IncomingFlashMessages) -> Result<HttpResponse, actix_web::Error> {
    let mut toasts = Vec::new();
    let mut subscribed = false;
    for m in flash_messages.iter() {
        match m.level() {
            Level::Success => {
                // A success flash doubles as the subscribed flag.
                subscribed = true;
                toasts.push(Toast::success(m.content()));
            }
            Level::Warning => toasts.push(Toast::warning(m.content())),
            Level::Error => toasts.push(Toast::error(m.content())),
            _ => {}
        }
    }

    landing_page(&toasts, None, &FormValues::default(), subscribed).map_err(e500)
}

pub(super) fn landing_page(
    toasts: &[Toast],
    email_error: Option<&str>,
    form: &FormValues,
    subscribed: bool,
) -> Result<HttpResponse, tera::Error> {
    let mut ctx = TeraContext::new();
    ctx.insert("content", &LandingContent::default());
    ctx.insert("toasts", toasts);
    ctx.insert("email_error", &email_error);
    ctx.insert("form", form);
    ctx.insert("subscribed", &subscribed);
    ctx.insert("year", &Utc::now().year());

    let page = TEMPLATES.render("index.html", &ctx)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
