use super::{
    repository::{RequestScope, RequestsRepository, Review},
    utils,
};
use crate::{
    api::{ApiError, ClaimRequest, Item},
    config,
    state::session::{use_api, use_session, SessionState, SessionStore},
    utils::{
        debounce::{BrowserTimer, Debounced, Timer},
        navigation::{self, Navigator},
    },
};
use leptos::*;
use std::{rc::Rc, time::Duration};

type ListKey = (Option<RequestScope>, Option<String>, u32);

/// Loads a scope's list; "my requests" without a user id sends the visitor
/// to the forbidden page.
async fn load_scope(
    repo: &RequestsRepository,
    navigator: &dyn Navigator,
    scope: Option<RequestScope>,
    user_id: Option<&str>,
) -> Result<Vec<ClaimRequest>, ApiError> {
    let Some(scope) = scope else {
        return Ok(Vec::new());
    };
    if scope == RequestScope::Mine && user_id.is_none() {
        log::warn!("session has no user id, leaving my requests");
        navigator.redirect(navigation::FORBIDDEN_PATH);
    }
    repo.load(scope, user_id).await
}

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub scope: Signal<Option<RequestScope>>,
    pub session: Signal<SessionState>,
    pub requests: RwSignal<Vec<ClaimRequest>>,
    pub search_term: RwSignal<String>,
    pub search_results: RwSignal<Vec<ClaimRequest>>,
    pub searching: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub selected: RwSignal<Option<ClaimRequest>>,
    /// Working copy of the selected request while it is being edited.
    pub draft: RwSignal<ClaimRequest>,
    pub editing: RwSignal<bool>,
    pub displayed: Memo<Vec<ClaimRequest>>,
    pub reload: RwSignal<u32>,
    pub requests_resource: Resource<ListKey, Result<Vec<ClaimRequest>, ApiError>>,
    pub item_resource: Resource<Option<String>, Option<Item>>,
    pub review_action: Action<(String, Review), Result<(), ApiError>>,
    pub save_action: Action<ClaimRequest, Result<ClaimRequest, ApiError>>,
    search: StoredValue<Debounced<String>>,
}

impl RequestsViewModel {
    pub fn new(
        scope: Signal<Option<RequestScope>>,
        session: &SessionStore,
        repository: RequestsRepository,
        timer: impl Timer + 'static,
    ) -> Self {
        let navigator = session.navigator();
        let session = session.state();
        let requests = create_rw_signal(Vec::<ClaimRequest>::new());
        let search_term = create_rw_signal(String::new());
        let search_results = create_rw_signal(Vec::<ClaimRequest>::new());
        let searching = create_rw_signal(false);
        let error = create_rw_signal(None::<ApiError>);
        let selected = create_rw_signal(None::<ClaimRequest>);
        let draft = create_rw_signal(ClaimRequest::default());
        let editing = create_rw_signal(false);
        let reload = create_rw_signal(0u32);

        let repo_for_load = repository.clone();
        let requests_resource = create_resource(
            move || {
                (
                    scope.get(),
                    session.with(|s| s.user_id().map(str::to_string)),
                    reload.get(),
                )
            },
            {
                let navigator = navigator.clone();
                move |(scope, user_id, _): ListKey| {
                    let repo = repo_for_load.clone();
                    let navigator = navigator.clone();
                    async move { load_scope(&repo, navigator.as_ref(), scope, user_id.as_deref()).await }
                }
            },
        );

        let repo_for_item = repository.clone();
        let item_resource = create_resource(
            move || selected.with(|request| request.as_ref().map(|r| r.item.clone())),
            move |item_id: Option<String>| {
                let repo = repo_for_item.clone();
                async move {
                    let item_id = item_id?;
                    match repo.requested_item(&item_id).await {
                        Ok(item) => Some(item),
                        Err(err) => {
                            log::warn!("loading requested item {} failed: {}", item_id, err);
                            None
                        }
                    }
                }
            },
        );

        let repo_for_search = repository.clone();
        let search = store_value(Debounced::new(
            Duration::from_millis(config::SEARCH_DEBOUNCE_MS),
            timer,
            move |term: String| {
                let repo = repo_for_search.clone();
                async move {
                    searching.set(true);
                    let result = repo.search(&term).await;
                    searching.set(false);
                    let still_current = search_term
                        .try_get_untracked()
                        .map(|current| current.trim() == term.trim())
                        .unwrap_or(false);
                    if !still_current {
                        return;
                    }
                    match result {
                        Ok(found) => {
                            error.set(None);
                            search_results.set(found);
                        }
                        Err(err) => {
                            log::warn!("request search for {:?} failed: {}", term, err);
                            search_results.set(Vec::new());
                            error.set(Some(err));
                        }
                    }
                }
            },
        ));
        on_cleanup(move || search.with_value(Debounced::cancel));

        let displayed = create_memo(move |_| {
            if search_term.with(|term| term.trim().is_empty()) {
                requests.get()
            } else {
                search_results.get()
            }
        });

        // Outcomes are applied inside the futures so a review and its reload
        // land together.
        let repo_for_review = repository.clone();
        let review_action = create_action(move |(request_id, review): &(String, Review)| {
            let repo = repo_for_review.clone();
            let navigator = navigator.clone();
            let request_id = request_id.clone();
            let review = *review;
            async move {
                let outcome = match repo.review(&request_id, review).await {
                    Ok(()) => {
                        let scope = scope.try_get_untracked().flatten();
                        let user_id = session
                            .try_with_untracked(|s| s.user_id().map(str::to_string))
                            .flatten();
                        load_scope(&repo, navigator.as_ref(), scope, user_id.as_deref())
                            .await
                            .map(|list| {
                                requests.try_set(list);
                            })
                    }
                    Err(err) => Err(err),
                };
                selected.try_set(None);
                if let Err(err) = &outcome {
                    error.try_set(Some(err.clone()));
                }
                outcome
            }
        });

        let repo_for_save = repository;
        let save_action = create_action(move |request: &ClaimRequest| {
            let repo = repo_for_save.clone();
            let request = request.clone();
            async move {
                let outcome = repo.update(&request).await;
                match &outcome {
                    Ok(updated) => {
                        requests.try_update(|list| utils::replace_request(list, updated));
                        search_results.try_update(|list| utils::replace_request(list, updated));
                        selected.try_set(Some(updated.clone()));
                        draft.try_set(updated.clone());
                        editing.try_set(false);
                    }
                    Err(err) => {
                        error.try_set(Some(err.clone()));
                    }
                }
                outcome
            }
        });

        create_effect(move |_| {
            if let Some(result) = requests_resource.get() {
                match result {
                    Ok(list) => {
                        error.set(None);
                        requests.set(list);
                    }
                    Err(err) => {
                        log::warn!("loading requests failed: {}", err);
                        requests.set(Vec::new());
                        error.set(Some(err));
                    }
                }
            }
        });

        Self {
            scope,
            session,
            requests,
            search_term,
            search_results,
            searching,
            error,
            selected,
            draft,
            editing,
            displayed,
            reload,
            requests_resource,
            item_resource,
            review_action,
            save_action,
            search,
        }
    }

    pub fn set_search_term(&self, term: String) {
        let blank = term.trim().is_empty();
        self.search_term.set(term.clone());
        if blank {
            self.search.with_value(Debounced::cancel);
            self.search_results.set(Vec::new());
            self.error.set(None);
        } else {
            self.search.with_value(|search| search.call(term));
        }
    }

    pub fn loading(&self) -> bool {
        self.requests_resource.loading().get()
            || self.searching.get()
            || self.review_action.pending().get()
    }

    pub fn open(&self, request: ClaimRequest) {
        self.draft.set(request.clone());
        self.editing.set(false);
        self.selected.set(Some(request));
    }

    pub fn close(&self) {
        self.editing.set(false);
        self.selected.set(None);
    }

    pub fn review(&self, request_id: String, review: Review) {
        if self.review_action.pending().get_untracked() {
            return;
        }
        self.review_action.dispatch((request_id, review));
    }

    /// First press opens the draft for editing, the second saves it.
    pub fn edit_or_save(&self) {
        if !self.editing.get_untracked() {
            self.editing.set(true);
            return;
        }
        if self.save_action.pending().get_untracked() {
            return;
        }
        self.save_action.dispatch(self.draft.get_untracked());
    }
}

pub fn use_requests_view_model(scope: Signal<Option<RequestScope>>) -> RequestsViewModel {
    let session = use_session();
    let repository = RequestsRepository::new_with_client(Rc::new(use_api()));
    RequestsViewModel::new(scope, &session, repository, BrowserTimer)
}
