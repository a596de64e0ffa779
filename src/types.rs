//! Wire and rendered shapes of the GitHub `/rate_limit` document.
//!
//! Upstream payloads decode into [`RateLimitResponse`], whose `reset` fields
//! are absolute instants. [`RateLimitResponse::render`] turns that into a
//! [`RenderedResponse`] where every `reset` is a relative, human-readable
//! string computed against a caller-supplied "now".

use crate::humanize::human_duration;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid epoch seconds {literal:?}: {source}")]
    NotAnInteger {
        literal: String,
        source: std::num::ParseIntError,
    },
    #[error("epoch seconds {0} out of range")]
    OutOfRange(i64),
}

/// Decode a raw JSON literal holding Unix seconds into an instant.
///
/// The literal is parsed as-is, so a quoted number is rejected just like any
/// other non-integer token.
pub fn decode_timestamp(raw: &[u8]) -> Result<DateTime<Utc>, ParseError> {
    let literal = String::from_utf8_lossy(raw);
    let secs = literal
        .parse::<i64>()
        .map_err(|source| ParseError::NotAnInteger {
            literal: literal.to_string(),
            source,
        })?;
    DateTime::<Utc>::from_timestamp(secs, 0).ok_or(ParseError::OutOfRange(secs))
}

/// Relative, lower-cased rendering of `instant` as seen from `now`.
/// Anything not strictly in the future renders as an empty string.
pub fn encode_timestamp(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = instant.signed_duration_since(now);
    match delta.to_std() {
        Ok(d) if !d.is_zero() => human_duration(d).to_lowercase(),
        _ => String::new(),
    }
}

fn deserialize_epoch<'de, D>(de: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Box<RawValue> = Deserialize::deserialize(de)?;
    decode_timestamp(raw.get().as_bytes()).map_err(D::Error::custom)
}

/// One quota bucket as GitHub reports it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: i64,
    pub remaining: i64,
    #[serde(deserialize_with = "deserialize_epoch")]
    pub reset: DateTime<Utc>,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            limit: 0,
            remaining: 0,
            reset: DateTime::<Utc>::default(),
        }
    }
}

// Missing buckets decode as a zero quota that reset at the epoch.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Resources {
    #[serde(default)]
    pub core: RateLimit,
    #[serde(default)]
    pub search: RateLimit,
    #[serde(default)]
    pub graphql: RateLimit,
    #[serde(default)]
    pub integration_manifest: RateLimit,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RateLimitResponse {
    pub resources: Resources,
    pub rate: RateLimit,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedRateLimit {
    pub limit: i64,
    pub remaining: i64,
    pub reset: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedResources {
    pub core: RenderedRateLimit,
    pub search: RenderedRateLimit,
    pub graphql: RenderedRateLimit,
    pub integration_manifest: RenderedRateLimit,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedResponse {
    pub resources: RenderedResources,
    pub rate: RenderedRateLimit,
}

impl RateLimit {
    pub fn render(&self, now: DateTime<Utc>) -> RenderedRateLimit {
        RenderedRateLimit {
            limit: self.limit,
            remaining: self.remaining,
            reset: encode_timestamp(self.reset, now),
        }
    }
}

impl RateLimitResponse {
    pub fn render(&self, now: DateTime<Utc>) -> RenderedResponse {
        RenderedResponse {
            resources: RenderedResources {
                core: self.resources.core.render(now),
                search: self.resources.search.render(now),
                graphql: self.resources.graphql.render(now),
                integration_manifest: self.resources.integration_manifest.render(now),
            },
            rate: self.rate.render(now),
        }
    }
}
