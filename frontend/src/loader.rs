use std::{cell::Cell, rc::Rc};

use post_table_shared::{FetchError, Post, PostListResponse};
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Posts a loader settled with.
///
/// A failed fetch settles with no results and the error kept in `failure`,
/// so it renders exactly like an empty listing unless a caller opts in to
/// showing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedPosts {
    pub results: Vec<Post>,
    /// Server-reported total across pages, if the listing is paginated.
    pub total: Option<u64>,
    pub failure: Option<FetchError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(LoadedPosts),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            ListState::Loading => None,
            ListState::Loaded(loaded) => loaded.failure.as_ref(),
        }
    }
}

pub enum ListAction {
    Settled(LoadedPosts),
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ListAction::Settled(loaded) = action;
        // Loaded is terminal
        if self.is_loading() {
            Rc::new(ListState::Loaded(loaded))
        } else {
            self
        }
    }
}

/// Receives one record per failed settlement.
pub trait DiagnosticSink {
    fn report(&self, error: &FetchError);
}

/// Writes fetch failures to the browser console.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, error: &FetchError) {
        web_sys::console::error_1(&JsValue::from_str(&format!("Failed to fetch posts: {}", error)));
    }
}

/// Fold a fetch outcome into the loaded state, reporting failures to `sink`.
pub fn settle(outcome: Result<PostListResponse, FetchError>, sink: &dyn DiagnosticSink) -> LoadedPosts {
    match outcome {
        Ok(page) => LoadedPosts {
            results: page.results,
            total: page.count,
            failure: None,
        },
        Err(error) => {
            sink.report(&error);
            LoadedPosts {
                results: Vec::new(),
                total: None,
                failure: Some(error),
            }
        },
    }
}

/// Shared "still mounted" flag between a component and its in-flight request.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn detach(&self) {
        self.0.set(false);
    }

    /// Run `f` only while the owner is still mounted. Returns whether it ran.
    pub fn run_if_mounted(&self, f: impl FnOnce()) -> bool {
        if !self.is_mounted() {
            return false;
        }
        f();
        true
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<FetchError>>);

    impl DiagnosticSink for RecordingSink {
        fn report(&self, error: &FetchError) {
            self.0.borrow_mut().push(error.clone());
        }
    }

    fn post(id: i64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            slug: format!("post-{id}"),
            summary: String::new(),
            tags: Vec::new(),
            hero_image: None,
        }
    }

    fn page(results: Vec<Post>) -> PostListResponse {
        PostListResponse {
            results,
            ..Default::default()
        }
    }

    #[test]
    fn starts_loading() {
        assert!(ListState::default().is_loading());
        assert_eq!(ListState::default().failure(), None);
    }

    #[test]
    fn success_settles_with_results_and_no_report() {
        let sink = RecordingSink::default();
        let loaded = settle(
            Ok(PostListResponse {
                count: Some(10),
                ..page(vec![post(1), post(2)])
            }),
            &sink,
        );
        assert_eq!(loaded.results, vec![post(1), post(2)]);
        assert_eq!(loaded.total, Some(10));
        assert_eq!(loaded.failure, None);
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn failure_settles_empty_and_reports_once() {
        let sink = RecordingSink::default();
        let error = FetchError::Network("offline".to_string());
        let loaded = settle(Err(error.clone()), &sink);
        assert!(loaded.results.is_empty());
        assert_eq!(loaded.failure, Some(error.clone()));
        assert_eq!(*sink.0.borrow(), vec![error]);
    }

    #[test]
    fn transition_happens_once() {
        let state = Rc::new(ListState::Loading);
        let first = LoadedPosts {
            results: vec![post(1)],
            ..Default::default()
        };
        let state = state.reduce(ListAction::Settled(first.clone()));
        assert_eq!(*state, ListState::Loaded(first.clone()));

        let state = state.reduce(ListAction::Settled(LoadedPosts::default()));
        assert_eq!(*state, ListState::Loaded(first));
    }

    #[test]
    fn failure_is_visible_on_state() {
        let error = FetchError::Decode("eof".to_string());
        let state = Rc::new(ListState::Loading).reduce(ListAction::Settled(LoadedPosts {
            failure: Some(error.clone()),
            ..Default::default()
        }));
        assert_eq!(state.failure(), Some(&error));
    }

    #[test]
    fn guard_blocks_late_settlement_after_detach() {
        let guard = MountGuard::new();
        let task_guard = guard.clone();
        let ran = Cell::new(false);

        guard.detach();
        assert!(!task_guard.is_mounted());
        assert!(!task_guard.run_if_mounted(|| ran.set(true)));
        assert!(!ran.get());
    }

    #[test]
    fn guard_runs_while_mounted() {
        let guard = MountGuard::new();
        let ran = Cell::new(false);
        assert!(guard.run_if_mounted(|| ran.set(true)));
        assert!(ran.get());
    }
}
