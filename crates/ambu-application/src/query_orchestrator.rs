use ambu_core::AmbuError;
use ambu_core::disclosure::{DetailDisclosure, DetailRow};
use ambu_core::messages;
use ambu_core::search::{Engine, LookupGateway, SearchRequest, SearchResult, classify};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Where the search surface stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Pending {
        request: SearchRequest,
    },
    Settled(SearchResult),
    /// Transport or server failure. Only the generic message is exposed.
    Failed {
        message: &'static str,
    },
}

impl QueryPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryPhase::Pending { .. })
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            QueryPhase::Settled(result) => Some(result),
            _ => None,
        }
    }
}

/// Everything the search surface renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPanel {
    pub phase: QueryPhase,
    pub disclosure: DetailDisclosure,
}

impl SearchPanel {
    pub fn visible_rows(&self) -> Option<Vec<DetailRow<'_>>> {
        self.phase
            .result()
            .and_then(|result| self.disclosure.visible_rows(result))
    }
}

/// What became of one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank query; nothing was sent and the panel is unchanged.
    Ignored,
    /// A newer submission started before this one resolved; its outcome was dropped.
    Superseded,
    /// This submission's outcome is now on the panel.
    Settled(QueryPhase),
}

/// Runs lookups against the gateway and owns the search panel.
///
/// Each submission takes a ticket. Only the outcome carrying the latest
/// ticket may update the panel, so a slow earlier request can never
/// overwrite a later one.
pub struct QueryOrchestrator {
    gateway: Arc<dyn LookupGateway>,
    default_engine: Engine,
    timeout: Duration,
    latest: AtomicU64,
    panel: Mutex<SearchPanel>,
}

impl QueryOrchestrator {
    pub fn new(gateway: Arc<dyn LookupGateway>, default_engine: Engine, timeout: Duration) -> Self {
        Self {
            gateway,
            default_engine,
            timeout,
            latest: AtomicU64::new(0),
            panel: Mutex::new(SearchPanel::default()),
        }
    }

    pub fn default_engine(&self) -> Engine {
        self.default_engine
    }

    /// Current panel state.
    pub fn snapshot(&self) -> SearchPanel {
        self.lock_panel().clone()
    }

    /// Flips the detail breakdown; returns whether it is now open.
    pub fn toggle_details(&self) -> bool {
        self.lock_panel().disclosure.toggle()
    }

    pub async fn submit(&self, query: &str, engine: Option<Engine>) -> Submission {
        let Some(request) = SearchRequest::new(query, engine.unwrap_or(self.default_engine)) else {
            return Submission::Ignored;
        };

        let ticket = {
            let mut panel = self.lock_panel();
            let ticket = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
            panel.phase = QueryPhase::Pending {
                request: request.clone(),
            };
            panel.disclosure.close();
            ticket
        };
        tracing::debug!(ticket, query = request.query(), engine = request.engine.as_ref(), "Search submitted");

        let outcome = match tokio::time::timeout(self.timeout, self.gateway.lookup(&request)).await {
            Ok(result) => result,
            Err(_) => Err(AmbuError::network(format!(
                "no response within {}s",
                self.timeout.as_secs_f32()
            ))),
        };

        let phase = match outcome {
            Ok(payload) => QueryPhase::Settled(classify(payload)),
            Err(err) => {
                tracing::warn!(ticket, error = %err, "Search failed");
                QueryPhase::Failed {
                    message: messages::search_failure(&err),
                }
            }
        };

        let mut panel = self.lock_panel();
        if self.latest.load(Ordering::Acquire) != ticket {
            tracing::debug!(ticket, "Discarding superseded search outcome");
            return Submission::Superseded;
        }
        panel.phase = phase.clone();
        Submission::Settled(phase)
    }

    fn lock_panel(&self) -> MutexGuard<'_, SearchPanel> {
        self.panel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
