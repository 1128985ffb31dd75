use crate::alert::AlertState;
use crate::input::InputState;
use crate::navigation::Router;
use crate::notification::NotificationState;
use crate::results::ResultsListState;
use crate::search::SearchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsList,
}

pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub focus: Focus,
    pub results_list: ResultsListState,
    pub router: Router,
    pub alert: AlertState,
    pub notification: NotificationState,
    /// End the session as soon as a route is pushed
    pub exit_on_navigate: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(search: SearchState, exit_on_navigate: bool) -> Self {
        Self {
            input: InputState::new(),
            search,
            focus: Focus::InputField,
            results_list: ResultsListState::new(),
            router: Router::new(),
            alert: AlertState::new(),
            notification: NotificationState::new(),
            exit_on_navigate,
            should_quit: false,
        }
    }

    /// Pre-fill the search field, as if the text had been typed
    pub fn with_initial_query(mut self, query: &str) -> Self {
        self.input.insert_str(query);
        self.on_query_changed();
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Route to print once the terminal is restored
    pub fn output_route(&self) -> Option<&str> {
        self.router.current().map(|route| route.path())
    }

    pub(crate) fn on_query_changed(&mut self) {
        let query = self.input.query().to_string();
        self.search.set_query(&query);
        if query.is_empty() {
            self.results_list.reset(0);
            self.focus = Focus::InputField;
        }
    }
}
