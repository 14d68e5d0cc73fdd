use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::SubscriptionRequest;
use crate::routes::error_chain_fmt;

/// Client for the mailing-list provider's add-member operation.
#[derive(Clone)]
pub struct MailingListClient {
    http_client: Client,
    base_url: Url,
    api_key: SecretString,
    list_id: String,
}

/// Every way a subscription attempt can end, as a value. Callers match on
/// the variant instead of catching provider errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
    Failed,
}

impl SubscribeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubscribeOutcome::Subscribed => {
                "Thank you for subscribing! Check your email for confirmation."
            }
            SubscribeOutcome::AlreadySubscribed => {
                "This email is already subscribed to our newsletter."
            }
            SubscribeOutcome::Failed => "Failed to subscribe. Please try again later.",
        }
    }
}

#[derive(Serialize)]
struct AddMemberRequest<'a> {
    email_address: &'a str,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge_fields: Option<MergeFields<'a>>,
}

#[derive(Serialize)]
struct MergeFields<'a> {
    #[serde(rename = "FNAME", skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(rename = "LNAME", skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
}

#[derive(serde::Deserialize)]
struct ProviderErrorBody {
    title: String,
}

#[derive(thiserror::Error)]
pub enum MailingListError {
    #[error("Failed to reach the mailing-list provider")]
    Transport(#[source] reqwest::Error),
    #[error("The provider rejection could not be parsed")]
    MalformedRejection(#[source] reqwest::Error),
}

impl std::fmt::Debug for MailingListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl MailingListClient {
    pub fn new(
        base_url: String,
        api_key: SecretString,
        list_id: String,
        timeout: Duration,
    ) -> Self {
        // A trailing slash keeps the versioned path prefix when joining.
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{base_url}/")
        };
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing the mailing-list provider url."),
            api_key,
            list_id,
        }
    }

    /// One add-member attempt, no retries. Transport failures and provider
    /// rejections never escape; they are logged and folded into the outcome.
    #[tracing::instrument(
        name = "Registering an email with the mailing-list provider",
        skip(self, request),
        fields(subscriber_email = %request.email)
    )]
    pub async fn subscribe(&self, request: &SubscriptionRequest) -> SubscribeOutcome {
        match self.add_list_member(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "The provider call did not complete"
                );
                SubscribeOutcome::Failed
            }
        }
    }

    async fn add_list_member(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscribeOutcome, MailingListError> {
        let url = self
            .base_url
            .join(&format!("lists/{}/members", self.list_id))
            .expect("Failed joining the add-member route to the provider url.");

        let merge_fields = if request.first_name.is_some() || request.last_name.is_some() {
            Some(MergeFields {
                first_name: request.first_name.as_deref(),
                last_name: request.last_name.as_deref(),
            })
        } else {
            None
        };
        let body = AddMemberRequest {
            email_address: request.email.as_ref(),
            status: "subscribed",
            merge_fields,
        };

        let response = self
            .http_client
            .post(url)
            .basic_auth("apikey", Some(self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(MailingListError::Transport)?;

        if response.status().is_success() {
            return Ok(SubscribeOutcome::Subscribed);
        }
        if response.status() == StatusCode::BAD_REQUEST {
            let error: ProviderErrorBody = response
                .json()
                .await
                .map_err(MailingListError::MalformedRejection)?;
            if error.title == "Member Exists" {
                return Ok(SubscribeOutcome::AlreadySubscribed);
            }
            tracing::warn!(
                provider_error = %error.title,
                "The provider rejected the subscription"
            );
            return Ok(SubscribeOutcome::Failed);
        }
        tracing::warn!(
            status = %response.status(),
            "The provider returned an unexpected status"
        );
        Ok(SubscribeOutcome::Failed)
    }
}
