use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;

use super::validate::ContactFields;
use crate::config;

/// Hands a validated submission to whatever persists it. Delivery is fire
/// and forget; the visitor has already been thanked.
pub trait SubmissionSink {
    fn deliver(&self, fields: ContactFields);
}

pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, fields: ContactFields) {
        info!(
            "Contact form submitted: {} <{}> re {:?} ({} chars)",
            fields.name,
            fields.email,
            fields.subject,
            fields.message.len()
        );
    }
}

pub struct HttpSink {
    endpoint: &'static str,
}

impl SubmissionSink for HttpSink {
    fn deliver(&self, fields: ContactFields) {
        let endpoint = self.endpoint;
        spawn_local(async move {
            let request = match Request::post(endpoint).json(&fields) {
                Ok(request) => request,
                Err(e) => {
                    warn!("Failed to encode contact submission: {}", e);
                    return;
                }
            };
            match request.send().await {
                Ok(response) if response.ok() => info!("Contact submission delivered"),
                Ok(response) => warn!("Contact endpoint returned {}", response.status()),
                Err(e) => warn!("Contact submission failed: {}", e),
            }
        });
    }
}

pub fn configured_sink() -> Box<dyn SubmissionSink> {
    match config::contact_endpoint() {
        Some(endpoint) => Box::new(HttpSink { endpoint }),
        None => Box::new(LogSink),
    }
}
