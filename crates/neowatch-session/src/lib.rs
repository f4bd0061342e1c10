pub mod filter;

use std::cmp::Ordering;

use chrono::NaiveDate;
use thiserror::Error;

use neowatch_ai::{chat_prompt, explainer_prompt, Audience, GenerateRequest, TextProvider};
use neowatch_core::{digest, summarize, NeoRecord, RiskSummary};
use neowatch_feed::{normalize, FeedError, FeedProvider, FeedRequest};

pub use filter::RiskFilter;

const GREETING: &str =
    "Hi! I'm NeoAstroBot. Adjust the filters, then ask me anything about these asteroids.";
const NO_MATCH_REPLY: &str = "Right now no asteroids match your filters. \
    Try reducing the risk filter or increasing the max asteroids, then ask again.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no asteroid data loaded; fetch a date range first")]
    NotLoaded,

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Text(#[from] neowatch_ai::ProviderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Assistant => "ASSISTANT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// One fetched record set plus the request dates, echoed for display.
#[derive(Debug, Clone)]
pub struct LoadedFeed {
    pub records: Vec<NeoRecord>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Explicit session context: the most recently loaded record set and the
/// chat transcript. Passed to whoever needs the data instead of living as
/// ambient global state, so normalization and scoring stay pure.
#[derive(Debug)]
pub struct Session {
    loaded: Option<LoadedFeed>,
    transcript: Vec<ChatTurn>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            loaded: None,
            transcript: vec![ChatTurn {
                role: Role::Assistant,
                content: GREETING.to_string(),
            }],
        }
    }

    /// Fetches and normalizes one date window, replacing any previously held
    /// record set wholesale. On any failure the previous set is kept as-is.
    pub async fn load(
        &mut self,
        provider: &dyn FeedProvider,
        request: FeedRequest,
    ) -> Result<usize, SessionError> {
        let feed = provider.fetch(request).await?;
        let records = normalize(&feed).map_err(FeedError::from)?;
        let count = records.len();
        self.loaded = Some(LoadedFeed {
            records,
            start_date: request.start_date,
            end_date: request.end_date,
        });
        Ok(count)
    }

    pub fn records(&self) -> Option<&[NeoRecord]> {
        self.loaded.as_ref().map(|loaded| loaded.records.as_slice())
    }

    /// The request dates of the current set, for display only.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.loaded
            .as_ref()
            .map(|loaded| (loaded.start_date, loaded.end_date))
    }

    pub fn summary(&self) -> Option<RiskSummary> {
        self.records().and_then(summarize)
    }

    /// Records passing `filter`, sorted by descending risk score. Empty both
    /// when nothing matches and when nothing is loaded.
    pub fn filtered(&self, filter: RiskFilter) -> Vec<NeoRecord> {
        let mut records: Vec<NeoRecord> = self
            .records()
            .unwrap_or_default()
            .iter()
            .filter(|record| filter.keeps(record))
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            b.risk_score
                .partial_cmp(&a.risk_score)
                .unwrap_or(Ordering::Equal)
        });
        records
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    fn history_text(&self) -> String {
        let mut out = String::new();
        for turn in &self.transcript {
            out.push_str(turn.role.as_str());
            out.push_str(": ");
            out.push_str(&turn.content);
            out.push('\n');
        }
        out
    }

    /// One chatbot turn over the filtered record set. The model sees at most
    /// `max_rows` digest lines. When the filter leaves nothing, a canned
    /// reply is recorded without calling the provider. On provider failure
    /// the transcript is left unchanged.
    pub async fn ask(
        &mut self,
        provider: &dyn TextProvider,
        filter: RiskFilter,
        max_rows: usize,
        user_message: &str,
    ) -> Result<String, SessionError> {
        if self.loaded.is_none() {
            return Err(SessionError::NotLoaded);
        }

        self.transcript.push(ChatTurn {
            role: Role::User,
            content: user_message.to_string(),
        });

        let filtered = self.filtered(filter);
        let reply = if filtered.is_empty() {
            NO_MATCH_REPLY.to_string()
        } else {
            let summary = digest(&filtered, max_rows);
            let prompt = chat_prompt(&summary, &self.history_text(), user_message);
            match provider.generate(GenerateRequest::new(prompt)).await {
                Ok(response) => response.text,
                Err(e) => {
                    self.transcript.pop();
                    return Err(e.into());
                }
            }
        };

        self.transcript.push(ChatTurn {
            role: Role::Assistant,
            content: reply.clone(),
        });
        Ok(reply)
    }

    /// One-off explainer briefing for a single record. Does not touch the
    /// chat transcript.
    pub async fn explain(
        &self,
        provider: &dyn TextProvider,
        record: &NeoRecord,
        audience: Audience,
        location: Option<&str>,
    ) -> Result<String, SessionError> {
        let prompt = explainer_prompt(record, audience, location);
        let response = provider.generate(GenerateRequest::new(prompt)).await?;
        Ok(response.text)
    }
}
