//! Typed calls for the endpoints the dashboard reads.

use crate::dashboard::{AnalyticsCounts, IncidentStatusCounts};
use crate::fetch::{FetchClient, FetchError, Transport};
use crate::session::UserProfile;

pub const ANALYTICS_COUNTS_PATH: &str = "dashboard/analytics-counts/";
pub const INCIDENT_STATUS_COUNTS_PATH: &str = "incidents/status-counts/";
pub const PROFILE_PATH: &str = "users/me/";

/// An empty response renders as all zeroes.
pub async fn fetch_analytics_counts<T: Transport>(
    client: &FetchClient<T>,
    token: Option<&str>,
) -> Result<AnalyticsCounts, FetchError> {
    client
        .fetch(ANALYTICS_COUNTS_PATH, token)
        .await
        .map(Option::unwrap_or_default)
}

pub async fn fetch_incident_status_counts<T: Transport>(
    client: &FetchClient<T>,
    token: Option<&str>,
) -> Result<IncidentStatusCounts, FetchError> {
    client
        .fetch(INCIDENT_STATUS_COUNTS_PATH, token)
        .await
        .map(Option::unwrap_or_default)
}

pub async fn fetch_profile<T: Transport>(
    client: &FetchClient<T>,
    token: Option<&str>,
) -> Result<Option<UserProfile>, FetchError> {
    client.fetch(PROFILE_PATH, token).await
}
