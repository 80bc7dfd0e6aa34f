//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `role_tagger` library and Zellij. It
//! translates Zellij events into library events, executes the returned
//! actions and registers the persistence worker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, tag controller
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │    RoleWorker    │   │  ← Storage operations
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Once granted, configure the worker, load the registry and
//!    open the configured candidate
//! 3. **Update**: Translate keys, mouse, visibility and worker responses
//! 4. **Pipe**: `open-candidate`, `add-role`, `remove-role`
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Typing mode:
//! - characters: edit the input
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move the highlight
//! - `Enter`: add the highlighted or typed role
//! - `Esc`: dismiss suggestions, or close the pane when none are shown
//! - `Tab`: switch to chips mode
//!
//! Chips mode:
//! - `Left`/`h`, `Right`/`l`: move across selected roles
//! - `Delete`/`Backspace`/`x`: remove the focused role
//! - `Tab`/`i`/`Esc`: back to typing
//! - `q`: close the pane

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use role_tagger::ui::{hit_test, HitTarget};
use role_tagger::worker::{RoleWorker, WorkerMessage, WorkerResponse};
use role_tagger::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(RoleWorker, role_worker, ROLE_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library.
    app: role_tagger::AppState,

    /// Configuration handed to the worker once permissions are granted.
    config: Config,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Pane size from the last render, used for mouse hit-testing.
    size: (usize, usize),
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: role_tagger::initialize(&config),
            config,
            worker_name: "role".to_string(),
            size: (0, 0),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to events.
    ///
    /// Requests:
    /// - `ReadCliPipes`: Receive `zellij pipe` messages
    /// - `ChangeApplicationState`: Hide the pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        role_tagger::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            candidate_id = ?config.candidate_id,
            data_file = ?config.data_file,
            seed_count = config.seed_roles.len(),
            "parsed configuration"
        );
        self.app = role_tagger::initialize(&config);
        self.config = config;

        request_permission(&[PermissionType::ReadCliPipes, PermissionType::ChangeApplicationState]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Visible,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::Visible(false) => Some(Event::FocusLost),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return true;
            }
            _ => None,
        };

        our_event.is_some_and(|event| self.dispatch(&event))
    }

    /// Handles `zellij pipe` messages; the payload is the argument.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
        let _guard = span.entered();

        if let PipeSource::Cli(ref pipe_id) = pipe_message.source {
            unblock_cli_pipe_input(pipe_id);
        }

        let payload = pipe_message.payload.unwrap_or_default();
        let event = match pipe_message.name.as_str() {
            "open-candidate" => Event::OpenCandidate {
                candidate_id: payload.trim().to_string(),
            },
            "close-candidate" => Event::CloseCandidate,
            "add-role" => Event::AddRole(payload),
            "remove-role" => Event::RemoveRole(payload),
            other => {
                tracing::debug!(name = %other, "ignoring unknown pipe");
                return false;
            }
        };

        self.dispatch(&event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.size = (rows, cols);
        role_tagger::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Typing => match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::Enter,
                BareKey::Esc => Event::Escape,
                BareKey::Tab => Event::ToggleChips,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Chips => match key.bare_key {
                BareKey::Left | BareKey::Char('h') => Event::ChipLeft,
                BareKey::Right | BareKey::Char('l') => Event::ChipRight,
                BareKey::Delete | BareKey::Backspace | BareKey::Char('x') => Event::RemoveFocusedChip,
                BareKey::Tab | BareKey::Char('i') => Event::ToggleChips,
                BareKey::Esc => Event::Escape,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    /// Maps pointer events through the layout of the last render.
    ///
    /// Zellij reports 0-indexed lines and columns; the layout is 1-indexed.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let (rows, cols) = self.size;
        let (line, column, is_click) = match mouse {
            Mouse::LeftClick(line, column) => (line, column, true),
            Mouse::Hover(line, column) => (line, column, false),
            _ => return None,
        };
        let row = usize::try_from(line).ok()? + 1;
        let col = column + 1;

        let viewmodel = self.app.compute_viewmodel(rows, cols);
        let target = hit_test(&viewmodel, row, col);
        tracing::trace!(row, col, target = ?target, is_click, "mouse event");

        match (target, is_click) {
            (HitTarget::Suggestion(index), true) => Some(Event::SuggestionClicked(index)),
            (HitTarget::Suggestion(index), false) => Some(Event::SuggestionHovered(index)),
            (HitTarget::ChipRemove(index), true) => Some(Event::ChipRemoveClicked(index)),
            (HitTarget::Outside, true) => Some(Event::FocusLost),
            _ => None,
        }
    }

    /// Configures the worker, loads the registry and opens the configured
    /// candidate.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - configuring worker");
                self.post_worker_message(&WorkerMessage::configure(
                    self.config.data_file.display().to_string(),
                    self.config.seed_roles.clone(),
                ));
                self.post_worker_message(&WorkerMessage::load_registry());
                if let Some(candidate_id) = self.config.candidate_id.clone() {
                    self.dispatch(&Event::OpenCandidate { candidate_id });
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pipes unavailable");
            }
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes a message and posts it to the worker thread. Errors are
    /// logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(message_type = message.name(), payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
        }
    }
}
