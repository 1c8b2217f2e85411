use shared_types::{
    Filters, ListQuery, Page, PaginationMeta, RegistryError, GENERIC_FAILURE_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Everything a list screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub pagination: PaginationMeta,
    pub filters: Filters,
    /// False until the first successful load; the UI shows a skeleton until then.
    pub has_loaded: bool,
    pub last_error: Option<String>,
}

impl<T> ListState<T> {
    fn new(filters: Filters) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            pagination: PaginationMeta::default(),
            filters,
            has_loaded: false,
            last_error: None,
        }
    }

    /// Skeleton on the very first load, stale content afterwards.
    pub fn body(&self) -> ListBody {
        self.body_for(self.items.is_empty())
    }

    /// Body for a subset of the items, such as one section of a grouped screen.
    pub fn body_for(&self, is_empty: bool) -> ListBody {
        if !self.has_loaded {
            if self.loading {
                ListBody::Skeleton
            } else {
                ListBody::LoadFailed(
                    self.last_error
                        .clone()
                        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                )
            }
        } else if is_empty {
            ListBody::Empty
        } else {
            ListBody::Rows
        }
    }
}

/// What a list table renders in its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Skeleton,
    /// Nothing was ever loaded; carries the failure message.
    LoadFailed(String),
    /// Loaded, but no record matched.
    Empty,
    Rows,
}

/// A request the coordinator has issued and expects to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

/// Outcome of resolving a ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Items and pagination were replaced.
    Applied,
    /// The latest request failed; state is untouched apart from `last_error`.
    Failed(RegistryError),
    /// A newer request had been issued; the response was dropped.
    Discarded(RegistryError),
}

/// Last-issued-wins state machine for one list screen.
#[derive(Debug)]
pub struct ListCoordinator<T> {
    state: ListState<T>,
    phase: Phase,
    issued: u64,
    /// Page of the most recently issued ticket.
    requested_page: i64,
    staged: Filters,
    staged_names: Vec<String>,
}

impl<T: Clone> ListCoordinator<T> {
    /// Starts in `Loading`: a freshly mounted screen always fetches page 1.
    pub fn new(filters: Filters) -> Self {
        Self {
            state: ListState::new(filters),
            phase: Phase::Loading,
            issued: 0,
            requested_page: 1,
            staged: Filters::new(),
            staged_names: Vec::new(),
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    fn issue(&mut self, page: i64) -> FetchTicket {
        self.issued += 1;
        self.requested_page = page;
        self.phase = Phase::Loading;
        self.state.loading = true;
        FetchTicket {
            seq: self.issued,
            query: ListQuery::new(page, self.state.filters.clone()),
        }
    }

    pub fn start(&mut self) -> FetchTicket {
        self.issue(1)
    }

    /// Filter changes always go back to page 1 and take any staged search
    /// values along.
    pub fn set_filter(&mut self, name: &str, value: &str) -> FetchTicket {
        self.commit_staged();
        self.state.filters.set(name, value);
        self.issue(1)
    }

    /// Remember a search value without fetching; [`apply_staged`] commits it.
    ///
    /// [`apply_staged`]: ListCoordinator::apply_staged
    pub fn stage_filter(&mut self, name: &str, value: &str) {
        // Filters drops blank values, so track names separately to be able
        // to clear a search box.
        self.staged.set(name, value);
        if !self.staged_names.iter().any(|n| n == name) {
            self.staged_names.push(name.to_string());
        }
    }

    /// Commit staged search values and fetch page 1.
    pub fn apply_staged(&mut self) -> FetchTicket {
        self.commit_staged();
        self.issue(1)
    }

    fn commit_staged(&mut self) {
        for name in std::mem::take(&mut self.staged_names) {
            let value = self.staged.get(&name).unwrap_or_default().to_string();
            self.state.filters.set(name, value);
        }
        self.staged = Filters::new();
    }

    /// Fails with `InvalidRange` when `page` is outside `1..=last_page`.
    pub fn go_to_page(&mut self, page: i64) -> Result<FetchTicket, RegistryError> {
        let last_page = self.state.pagination.last_page;
        if !self.state.pagination.contains(page) {
            return Err(RegistryError::invalid_range(page, last_page));
        }
        Ok(self.issue(page))
    }

    /// Re-issue the last requested page with the current filters.
    ///
    /// After a failed filter change that is page 1 of the new filter, not
    /// the page still on screen.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue(self.requested_page)
    }

    /// Commit a response if it belongs to the most recently issued ticket.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Page<T>, RegistryError>,
    ) -> Resolution {
        if ticket.seq != self.issued {
            return Resolution::Discarded(RegistryError::StaleResponse {
                seq: ticket.seq,
                latest: self.issued,
            });
        }

        self.phase = Phase::Idle;
        self.state.loading = false;
        match result {
            Ok(page) => {
                self.state.items = page.items;
                self.state.pagination = page.meta;
                self.requested_page = page.meta.current_page;
                self.state.has_loaded = true;
                self.state.last_error = None;
                Resolution::Applied
            }
            Err(e) => {
                self.state.last_error = Some(e.user_message());
                Resolution::Failed(e)
            }
        }
    }
}
