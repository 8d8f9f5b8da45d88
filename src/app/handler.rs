//! Event handling and state transition logic.
//!
//! Key presses, startup and worker completions all arrive here as [`Event`]s.
//! [`handle_event`] mutates [`AppState`] through its split-phase transitions
//! and returns whether a redraw is needed plus the actions to run.
//!
//! ```text
//! Key / Startup ─▶ handle_event ─▶ Action::PostToWorker ─▶ worker task
//!                      ▲                                      │
//!                      └──── Event::WorkerResponse ◀──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use product_manager::app::{AppState, Action, Event, handle_event};
//! use product_manager::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Startup);
//! assert!(render);
//! assert!(matches!(actions[..], [Action::PostToWorker(_)]));
//! assert!(state.progress.loading);
//! ```

use crate::app::{Action, AppState};
use crate::worker::{LoadTrigger, WorkerMessage, WorkerResponse};

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Issued once when the UI comes up. Starts the initial load.
    Startup,

    /// Re-fetch the product list. Ignored while a fetch is in flight.
    Refresh,

    /// Validate the form and, if valid, send a create request.
    SubmitForm,

    /// Typed character for the focused input.
    Char(char),

    /// Delete the last character of the focused input.
    Backspace,

    /// Move focus to the other input.
    NextField,

    Quit,

    /// Terminal size changed.
    Resize,

    /// A backend call finished.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates state and returns `(should_render, actions)`.
///
/// Form edits and submission are ignored while a create request is in
/// flight, since the form is disabled then.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Startup => {
            state.begin_initial_load();
            (true, vec![Action::PostToWorker(WorkerMessage::load_products(LoadTrigger::Initial))])
        }
        Event::Refresh => {
            if state.is_list_busy() {
                tracing::debug!(progress = ?state.progress, "list fetch in flight, ignoring refresh");
                return (false, vec![]);
            }
            state.begin_refresh();
            (true, vec![Action::PostToWorker(WorkerMessage::load_products(LoadTrigger::Refresh))])
        }
        Event::SubmitForm => {
            if state.progress.submitting {
                return (false, vec![]);
            }
            match state.form.prepare_submission() {
                Ok(request) => {
                    state.begin_submit();
                    (true, vec![Action::PostToWorker(WorkerMessage::create_product(request))])
                }
                Err(e) => {
                    tracing::debug!(error = %e, "form rejected");
                    (true, vec![])
                }
            }
        }
        Event::Char(c) => {
            if state.progress.submitting || !state.form.input_char(*c) {
                return (false, vec![]);
            }
            (true, vec![])
        }
        Event::Backspace => {
            if state.progress.submitting {
                return (false, vec![]);
            }
            (state.form.backspace(), vec![])
        }
        Event::NextField => {
            if state.progress.submitting {
                return (false, vec![]);
            }
            state.form.focus_next();
            (true, vec![])
        }
        Event::Quit => {
            state.should_quit = true;
            (false, vec![Action::Quit])
        }
        Event::Resize => (true, vec![]),
        Event::WorkerResponse(response) => {
            match response {
                WorkerResponse::ProductsLoaded { trigger: LoadTrigger::Initial, result } => {
                    state.complete_initial_load(result.clone());
                }
                WorkerResponse::ProductsLoaded { trigger: LoadTrigger::Refresh, result } => {
                    state.complete_refresh(result.clone());
                }
                WorkerResponse::ProductCreated { result } => {
                    // failure is already logged and shown on the form
                    let _ = state.complete_form_submission(result.clone());
                }
            }
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormField;
    use crate::domain::{CreateProductRequest, Product, RequestError};
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c));
        }
    }

    #[test]
    fn startup_runs_initial_load_through_worker() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Startup);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::load_products(LoadTrigger::Initial))]
        );

        let response = WorkerResponse::ProductsLoaded {
            trigger: LoadTrigger::Initial,
            result: Ok(vec![Product::new(1, "Widget", 9.99)]),
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response));
        assert!(render);
        assert!(!state.progress.loading);
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn refresh_is_ignored_while_a_fetch_is_in_flight() {
        let mut state = state();
        handle_event(&mut state, &Event::Startup);
        assert_eq!(handle_event(&mut state, &Event::Refresh), (false, vec![]));

        state.progress.loading = false;
        let (_, actions) = handle_event(&mut state, &Event::Refresh);
        assert_eq!(actions.len(), 1);
        assert!(state.progress.refreshing);
        assert_eq!(handle_event(&mut state, &Event::Refresh), (false, vec![]));
    }

    #[test]
    fn refresh_failure_response_keeps_products() {
        let mut state = state();
        state.products = vec![Product::new(1, "Widget", 9.99)];
        handle_event(&mut state, &Event::Refresh);

        let response = WorkerResponse::ProductsLoaded {
            trigger: LoadTrigger::Refresh,
            result: Err(RequestError::status(500)),
        };
        handle_event(&mut state, &Event::WorkerResponse(response));

        assert_eq!(state.products, vec![Product::new(1, "Widget", 9.99)]);
        assert!(!state.progress.refreshing);
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut state = state();
        type_text(&mut state, "Gadget");
        handle_event(&mut state, &Event::NextField);
        type_text(&mut state, "12.5");
        handle_event(&mut state, &Event::Backspace);

        assert_eq!(state.form.name, "Gadget");
        assert_eq!(state.form.price, "12.");
        assert_eq!(state.form.focus, FormField::Price);
    }

    #[test]
    fn invalid_submission_posts_nothing() {
        let mut state = state();
        handle_event(&mut state, &Event::NextField);
        type_text(&mut state, "5");

        let (render, actions) = handle_event(&mut state, &Event::SubmitForm);
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.progress.submitting);
        assert_eq!(state.form.error.as_deref(), Some("Product name is required"));
    }

    #[test]
    fn valid_submission_disables_form_until_response() {
        let mut state = state();
        type_text(&mut state, " Gadget ");
        handle_event(&mut state, &Event::NextField);
        type_text(&mut state, "12.5");

        let (_, actions) = handle_event(&mut state, &Event::SubmitForm);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::create_product(CreateProductRequest {
                name: "Gadget".to_string(),
                price: 12.5,
            }))]
        );
        assert!(state.progress.submitting);

        assert_eq!(handle_event(&mut state, &Event::Char('x')), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Backspace), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::NextField), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::SubmitForm), (false, vec![]));
        assert_eq!(state.form.name, " Gadget ");
        assert_eq!(state.form.price, "12.5");
        assert_eq!(state.form.focus, FormField::Price);

        let response = WorkerResponse::ProductCreated { result: Ok(Product::new(2, "Gadget", 12.5)) };
        handle_event(&mut state, &Event::WorkerResponse(response));
        assert!(!state.progress.submitting);
        assert_eq!(state.products.last().map(|p| p.id), Some(2));
        assert!(state.form.name.is_empty() && state.form.price.is_empty());
    }

    #[test]
    fn failed_creation_keeps_inputs_and_shows_error() {
        let mut state = state();
        type_text(&mut state, "Gadget");
        handle_event(&mut state, &Event::NextField);
        type_text(&mut state, "12.5");
        handle_event(&mut state, &Event::SubmitForm);

        let response = WorkerResponse::ProductCreated { result: Err(RequestError::status(400)) };
        handle_event(&mut state, &Event::WorkerResponse(response));

        assert!(state.products.is_empty());
        assert_eq!(state.form.name, "Gadget");
        assert_eq!(state.form.error.as_deref(), Some("Request failed with status code 400"));
    }

    #[test]
    fn submission_may_overlap_a_refresh() {
        let mut state = state();
        state.products = vec![Product::new(1, "Widget", 9.99)];
        handle_event(&mut state, &Event::Refresh);
        type_text(&mut state, "Gadget");
        handle_event(&mut state, &Event::NextField);
        type_text(&mut state, "3");

        let (_, actions) = handle_event(&mut state, &Event::SubmitForm);
        assert_eq!(actions.len(), 1);
        assert!(state.progress.refreshing && state.progress.submitting);
    }

    #[test]
    fn quit_requests_exit() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Quit), (false, vec![Action::Quit]));
        assert!(state.should_quit);
    }
}
