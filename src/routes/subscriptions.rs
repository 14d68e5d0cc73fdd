use actix_web::{HttpResponse, web};
use actix_web_flash_messages::FlashMessage;
use anyhow::Context;

use crate::{
    domain::SubscriptionRequest,
    email_client::EmailClient,
    mailing_list::{MailingListClient, SubscribeOutcome},
    startup::ApplicationBaseUrl,
    templates::{WELCOME_EMAIL_SUBJECT, welcome_email},
};

use super::{
    helpers::see_other,
    home::{FormValues, Toast, landing_page},
};

#[derive(serde::Deserialize)]
pub struct FormData {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[tracing::instrument(
    name = "Handling a newsletter signup",
    skip(form, mailing_list, email_client, base_url),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    mailing_list: web::Data<MailingListClient>,
    email_client: web::Data<EmailClient>,
    base_url: web::Data<ApplicationBaseUrl>,
) -> HttpResponse {
    match handle_submission(form.0, &mailing_list, &email_client, &base_url.0).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Newsletter signup failed unexpectedly"
            );
            FlashMessage::error("Something went wrong. Please try again.".to_string()).send();
            see_other("/")
        }
    }
}

async fn handle_submission(
    form: FormData,
    mailing_list: &MailingListClient,
    email_client: &EmailClient,
    base_url: &str,
) -> Result<HttpResponse, anyhow::Error> {
    let entered = FormValues {
        email: form.email.clone(),
        first_name: form.first_name.clone().unwrap_or_default(),
        last_name: form.last_name.clone().unwrap_or_default(),
    };

    // An invalid address is reported inline and never reaches the provider.
    let request = match SubscriptionRequest::new(form.email, form.first_name, form.last_name) {
        Ok(request) => request,
        Err(_) => {
            return landing_page(&[], Some("Invalid email address"), &entered, false)
                .context("Failed to render the landing page");
        }
    };

    match mailing_list.subscribe(&request).await {
        SubscribeOutcome::Subscribed => {
            // Best effort: the subscription already succeeded, whatever
            // happens to the welcome email.
            send_welcome_email(email_client, &request, base_url).await;
            FlashMessage::success(SubscribeOutcome::Subscribed.message().to_string()).send();
            Ok(see_other("/"))
        }
        outcome @ SubscribeOutcome::AlreadySubscribed => {
            landing_page(&[Toast::warning(outcome.message())], None, &entered, false)
                .context("Failed to render the landing page")
        }
        outcome @ SubscribeOutcome::Failed => {
            landing_page(&[Toast::error(outcome.message())], None, &entered, false)
                .context("Failed to render the landing page")
        }
    }
}

#[tracing::instrument(
    name = "Sending the welcome email",
    skip(email_client, request, base_url),
    fields(subscriber_email = %request.email)
)]
async fn send_welcome_email(
    email_client: &EmailClient,
    request: &SubscriptionRequest,
    base_url: &str,
) -> bool {
    let outcome = async {
        let (html, text) =
            welcome_email(base_url).context("Failed to render the welcome email")?;
        email_client
            .send_email(&request.email, WELCOME_EMAIL_SUBJECT, &html, &text)
            .await
            .context("Failed to deliver the welcome email")?;
        Ok::<(), anyhow::Error>(())
    }
    .await;

    match outcome {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Welcome email was not sent"
            );
            false
        }
    }
}
