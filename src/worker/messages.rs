//! Worker protocol.
//!
//! Requests travel from the plugin to the background worker as JSON and every
//! request is answered with one [`WorkerResponse`]. Requests carry an optional
//! [`TraceContext`] so the worker's spans join the trace of the event that
//! caused them.

use serde::{Deserialize, Serialize};

/// Trace and parent span identifiers of the sending span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID, 32 hex digits.
    pub trace_id: String,

    /// Span ID of the sender, 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current `tracing` span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not being recorded.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` request carrying the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    configure(Configure { data_file: String, seed_roles: Vec<String> }),
    load_registry(LoadRegistry {}),
    load_candidate(LoadCandidate { candidate_id: String }),
    save_registry(SaveRegistry { tags: Vec<String> }),
    save_selection(SaveSelection { candidate_id: String, tags: Vec<String> }),
}

/// Requests sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Sets the store location and seed vocabulary. Sent once at startup.
    Configure {
        /// Path of the JSON store, already tilde-expanded.
        data_file: String,

        /// Vocabulary used when no registry is stored.
        seed_roles: Vec<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Loads the shared registry, seeding it if nothing is stored.
    LoadRegistry {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Loads the registry and the candidate's selected roles.
    LoadCandidate {
        /// Candidate whose roles to load.
        candidate_id: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Overwrites the stored registry.
    SaveRegistry {
        /// Full registry in order.
        tags: Vec<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Overwrites a candidate's selected roles.
    SaveSelection {
        /// Candidate whose roles changed.
        candidate_id: String,

        /// Full selection in order.
        tags: Vec<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to this request.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Configure { trace_context, .. }
            | Self::LoadRegistry { trace_context }
            | Self::LoadCandidate { trace_context, .. }
            | Self::SaveRegistry { trace_context, .. }
            | Self::SaveSelection { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Short name used as the Zellij worker message name and in span fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Configure { .. } => "configure",
            Self::LoadRegistry { .. } => "load_registry",
            Self::LoadCandidate { .. } => "load_candidate",
            Self::SaveRegistry { .. } => "save_registry",
            Self::SaveSelection { .. } => "save_selection",
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The worker accepted its configuration.
    Configured,

    /// The shared registry was loaded.
    RegistryLoaded {
        /// Shared registry, normalized.
        registry: Vec<String>,
    },

    /// A candidate's state was loaded.
    CandidateLoaded {
        /// Candidate the state belongs to.
        candidate_id: String,

        /// Shared registry, normalized.
        registry: Vec<String>,

        /// The candidate's selected roles, normalized.
        roles: Vec<String>,
    },

    /// The registry was written.
    RegistrySaved {
        /// Number of stored tags.
        count: usize,
    },

    /// A candidate's selection was written.
    SelectionSaved {
        /// Candidate the selection belongs to.
        candidate_id: String,

        /// Number of stored roles.
        count: usize,
    },

    /// The request failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
