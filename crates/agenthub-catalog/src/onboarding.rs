//! Onboarding submission relay.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::client::RemoteClient;
use crate::models::{OnboardAck, OnboardRequest};
use crate::service::{Source, Sourced};

/// Relays onboarding form submissions to the remote catalog API.
///
/// When the remote is unreachable the submission is acknowledged with
/// a locally minted id so the signup flow completes either way; the
/// `fallback` tag tells operators the record never reached upstream.
#[derive(Debug, Clone)]
pub struct OnboardingService {
    client: RemoteClient,
}

impl OnboardingService {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    pub async fn submit(&self, request: OnboardRequest) -> Sourced<OnboardAck> {
        match self
            .client
            .submit::<OnboardRequest, OnboardAck>("onboard", &request)
            .await
        {
            Ok(ack) => Sourced {
                source: Source::Live,
                record: ack,
            },
            Err(e) => {
                warn!(error = %e, "remote onboarding failed, acknowledging locally");
                Sourced {
                    source: Source::Fallback,
                    record: OnboardAck {
                        id: Uuid::new_v4().to_string(),
                        status: "received".to_string(),
                        submitted_at: Utc::now(),
                    },
                }
            }
        }
    }
}
