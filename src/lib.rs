pub mod configuration;
pub mod content;
pub mod domain;
pub mod email_client;
pub mod mailing_list;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
