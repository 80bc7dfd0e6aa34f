//! Background worker performing storage I/O.
//!
//! Persistence is fire-and-forget from the plugin's point of view: the plugin
//! posts a request and keeps handling input, and the response only updates
//! state when a candidate was loaded. The storage backend is opened lazily on
//! the first request that needs it.

use crate::domain::error::{Result, TaggerError};
use crate::infrastructure::paths;
use crate::storage::models::DEFAULT_SEED_ROLES;
use crate::storage::{load_registry_or_seed, load_selection, save_selection, JsonStorage, TagStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Worker state.
///
/// Runs on a thread spawned by Zellij. Only the configuration survives
/// serialization; the storage handle is reopened on demand.
#[derive(Serialize, Deserialize, Default)]
pub struct RoleWorker {
    /// Store location, `None` until configured.
    data_file: Option<PathBuf>,

    /// Vocabulary used when no registry is stored; empty means the defaults.
    seed_roles: Vec<String>,

    #[serde(skip)]
    storage: Option<Box<dyn TagStore>>,
}

impl RoleWorker {
    /// Creates a worker over an already opened store.
    #[must_use]
    pub fn with_store(storage: Box<dyn TagStore>, seed_roles: Vec<String>) -> Self {
        Self {
            data_file: None,
            seed_roles,
            storage: Some(storage),
        }
    }

    fn storage(&mut self) -> Result<&mut (dyn TagStore + 'static)> {
        if self.storage.is_none() {
            let path = self
                .data_file
                .clone()
                .unwrap_or_else(|| paths::get_data_dir().join("roles.json"));
            tracing::debug!(path = ?path, "opening storage");
            self.storage = Some(Box::new(JsonStorage::new(path)?));
        }

        self.storage
            .as_deref_mut()
            .ok_or_else(|| TaggerError::Worker("storage not initialized".to_string()))
    }

    fn seeds(&self) -> Vec<String> {
        if self.seed_roles.is_empty() {
            DEFAULT_SEED_ROLES.iter().map(ToString::to_string).collect()
        } else {
            self.seed_roles.clone()
        }
    }

    /// Maps a storage result onto a response, logging the outcome.
    fn respond<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_configure(&mut self, data_file: String, seed_roles: Vec<String>) -> WorkerResponse {
        let path = PathBuf::from(data_file);
        if self.data_file.as_ref() != Some(&path) {
            // Reopen on the next request that touches storage.
            self.storage = None;
        }
        tracing::debug!(path = ?path, seed_count = seed_roles.len(), "worker configured");
        self.data_file = Some(path);
        self.seed_roles = seed_roles;
        WorkerResponse::Configured
    }

    fn handle_load_registry(&mut self) -> WorkerResponse {
        let seeds = self.seeds();
        Self::respond(
            "load registry",
            self.storage()
                .and_then(|storage| load_registry_or_seed(storage, &seeds)),
            |registry| WorkerResponse::RegistryLoaded {
                registry: registry.labels(),
            },
        )
    }

    fn handle_load_candidate(&mut self, candidate_id: String) -> WorkerResponse {
        let seeds = self.seeds();
        let result = self.storage().and_then(|storage| {
            let registry = load_registry_or_seed(storage, &seeds)?;
            let selection = load_selection(storage, &candidate_id)?;
            Ok((registry, selection))
        });

        Self::respond("load candidate", result, |(registry, selection)| {
            tracing::debug!(
                candidate_id = %candidate_id,
                registry_count = registry.len(),
                role_count = selection.len(),
                "candidate loaded"
            );
            WorkerResponse::CandidateLoaded {
                candidate_id,
                registry: registry.labels(),
                roles: selection.labels(),
            }
        })
    }

    fn handle_save_registry(&mut self, tags: &[String]) -> WorkerResponse {
        let count = tags.len();
        Self::respond(
            "save registry",
            self.storage().and_then(|storage| storage.save_registry(tags)),
            |()| WorkerResponse::RegistrySaved { count },
        )
    }

    fn handle_save_selection(&mut self, candidate_id: String, tags: &[String]) -> WorkerResponse {
        Self::respond(
            "save selection",
            self.storage()
                .and_then(|storage| save_selection(storage, &candidate_id, tags)),
            |count| WorkerResponse::SelectionSaved { candidate_id, count },
        )
    }

    /// Rebuilds the sender's OpenTelemetry context so worker spans become its
    /// children. The returned guard must outlive the handling span.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(opentelemetry::Context::current().with_remote_span_context(remote).attach())
    }

    /// Processes one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = message.name()).entered();

        match message {
            WorkerMessage::Configure {
                data_file,
                seed_roles,
                ..
            } => self.handle_configure(data_file, seed_roles),
            WorkerMessage::LoadRegistry { .. } => self.handle_load_registry(),
            WorkerMessage::LoadCandidate { candidate_id, .. } => self.handle_load_candidate(candidate_id),
            WorkerMessage::SaveRegistry { tags, .. } => self.handle_save_registry(&tags),
            WorkerMessage::SaveSelection {
                candidate_id, tags, ..
            } => self.handle_save_selection(candidate_id, &tags),
        }
    }
}

#[cfg(feature = "plugin")]
mod zellij {
    use super::RoleWorker;
    use crate::worker::{WorkerMessage, WorkerResponse};
    use std::sync::atomic::{AtomicBool, Ordering};
    use zellij_tile::prelude::{PluginMessage, ZellijWorker};
    use zellij_tile::shim::post_message_to_plugin;

    static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

    fn reply(name: String, response: &WorkerResponse) {
        match serde_json::to_string(response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }

    impl ZellijWorker<'_> for RoleWorker {
        fn on_message(&mut self, message: String, payload: String) {
            if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
                crate::observability::init_tracing(&crate::Config::default());
            }

            let response = match serde_json::from_str::<WorkerMessage>(&payload) {
                Ok(request) => self.handle_message(request),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker message");
                    WorkerResponse::Error {
                        message: format!("malformed worker message: {e}"),
                    }
                }
            };

            reply(message, &response);
        }
    }
}
