//! Application state and event handling, independent of the terminal.
//!
//! The renderer feeds key/mouse events and a clock into [`App`] and draws it
//! every iteration. Tests drive the same type with synthetic events and a
//! `TestBackend`.
//!
//! Rendering rebuilds the route-scoped page from the current route and the
//! repository. The drawer, confirmation dialog, go-to prompt and
//! notifications live outside the page and survive a render.

use aurora_store::UserRepository;
use aurora_types::{NewUser, UserId};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use std::time::Instant;
use tracing::{debug, error, info};

use crate::clipboard::Clipboard;
use crate::notifications::Notifications;
use crate::presentation::presenters::build_users_list;
use crate::presentation::view_models::{Severity, UsersListViewModel};
use crate::presentation::views::tui::components::{
    AddUserDrawer, ConfirmDialog, DrawerAction, GoToPrompt, NotFoundComponent, PendingAction,
    ProfileAction, ProfileComponent, PromptAction, UsersListAction, UsersListComponent,
    is_ctrl_chord,
};
use crate::presentation::views::tui::{LocationBarView, NotificationsView, StatusBarView};
use crate::router::{Navigation, Route, Router, RouterEvent};

const LIST_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "select"),
    ("Enter", "view"),
    ("d", "delete"),
    ("a", "add user"),
    ("g", "go to"),
    ("q", "quit"),
];
const PROFILE_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Ctrl-S", "save"),
    ("Ctrl-←/→", "switch tab"),
    ("Esc", "back"),
    ("Ctrl-C", "quit"),
];
const NOT_FOUND_HINTS: &[(&str, &str)] = &[("Enter", "back to users"), ("Ctrl-C", "quit")];
const DRAWER_HINTS: &[(&str, &str)] = &[("Tab", "next field"), ("Enter", "add"), ("Esc", "cancel")];
const CONFIRM_HINTS: &[(&str, &str)] = &[("y", "yes"), ("n", "no")];
const PROMPT_HINTS: &[(&str, &str)] = &[("Enter", "go"), ("Esc", "cancel")];

/// The route-scoped part of the screen.
pub enum Page {
    Users(UsersListComponent),
    Profile(ProfileComponent),
    NotFound(NotFoundComponent),
}

enum PageAction {
    Users(UsersListAction),
    Profile(ProfileAction),
    BackToUsers,
}

pub struct App {
    repository: UserRepository,
    router: Router,
    clipboard: Box<dyn Clipboard>,
    notifications: Notifications,
    page: Option<Page>,
    drawer: Option<AddUserDrawer>,
    confirm: Option<ConfirmDialog>,
    prompt: Option<GoToPrompt>,
    should_quit: bool,
}

impl App {
    pub fn new(
        repository: UserRepository,
        router: Router,
        clipboard: Box<dyn Clipboard>,
        notifications: Notifications,
    ) -> Self {
        Self {
            repository,
            router,
            clipboard,
            notifications,
            page: None,
            drawer: None,
            confirm: None,
            prompt: None,
            should_quit: false,
        }
    }

    /// Open the initial location: the list when none was given.
    pub fn start(&mut self) {
        if self.router.fragment().is_empty() {
            self.navigate(Route::UsersList);
        } else {
            self.render();
        }
    }

    /// Deliver queued location changes and expire notifications.
    pub fn pump(&mut self, now: Instant) {
        let mut changed = false;
        while let Some(RouterEvent::FragmentChanged(fragment)) = self.router.poll_event() {
            debug!(%fragment, "location change delivered");
            changed = true;
        }
        if changed {
            self.render();
        }
        self.notifications.tick(now);
    }

    /// Rebuild the page for the current route from stored data.
    pub fn render(&mut self) {
        let route = self.router.current();
        debug!(?route, "render");

        let page = match route {
            Route::UsersList => {
                let model = match self.repository.list() {
                    Ok(users) => build_users_list(&users),
                    Err(err) => {
                        self.report_storage_error("load users", &err);
                        UsersListViewModel::default()
                    }
                };
                Page::Users(UsersListComponent::new(model))
            }
            Route::Profile(id) => match self.repository.get_by_id(&id) {
                Ok(Some(user)) => Page::Profile(ProfileComponent::new(user)),
                Ok(None) => Page::NotFound(NotFoundComponent),
                Err(err) => {
                    self.report_storage_error("load user", &err);
                    Page::NotFound(NotFoundComponent)
                }
            },
        };
        self.page = Some(page);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_ctrl_chord(&key) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(prompt) = self.prompt.as_mut() {
            match prompt.handle_input(key) {
                Some(PromptAction::Go(fragment)) => {
                    self.prompt = None;
                    self.router.set_fragment(fragment);
                }
                Some(PromptAction::Cancel) => self.prompt = None,
                None => {}
            }
            return;
        }

        if let Some(confirm) = self.confirm.as_ref() {
            if let Some(answer) = confirm.handle_input(key) {
                let pending = self.confirm.take().map(ConfirmDialog::into_pending);
                if answer && let Some(PendingAction::DeleteUser(id)) = pending {
                    self.delete_user(&id);
                }
            }
            return;
        }

        if let Some(drawer) = self.drawer.as_mut() {
            match drawer.handle_input(key) {
                Some(DrawerAction::Submit(draft)) => self.add_user(draft),
                Some(DrawerAction::Cancel) => self.drawer = None,
                None => {}
            }
            return;
        }

        if is_ctrl_chord(&key) && key.code == KeyCode::Char('g') {
            self.open_prompt();
            return;
        }

        let action = match self.page.as_mut() {
            Some(Page::Users(list)) => list.handle_input(key).map(PageAction::Users),
            Some(Page::Profile(profile)) => profile.handle_input(key).map(PageAction::Profile),
            Some(Page::NotFound(fallback)) => fallback
                .handle_input(key)
                .then_some(PageAction::BackToUsers),
            None => None,
        };

        match action {
            Some(PageAction::Users(action)) => self.handle_users_action(action),
            Some(PageAction::Profile(action)) => self.handle_profile_action(action),
            Some(PageAction::BackToUsers) => self.navigate(Route::UsersList),
            None => {}
        }
    }

    /// A click outside the drawer panel closes it.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind
            && let Some(drawer) = self.drawer.as_ref()
            && drawer.is_backdrop(event.column, event.row)
        {
            self.drawer = None;
        }
    }

    pub fn draw(&mut self, f: &mut Frame, now: Instant) {
        let [top, main, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(f.area());

        f.render_widget(LocationBarView::new(self.router.fragment()), top);

        match self.page.as_mut() {
            Some(Page::Users(list)) => list.render(f, main),
            Some(Page::Profile(profile)) => profile.render(f, main),
            Some(Page::NotFound(fallback)) => fallback.render(f, main),
            None => {}
        }

        if let Some(drawer) = self.drawer.as_mut() {
            drawer.render(f, main);
        }
        if let Some(confirm) = self.confirm.as_ref() {
            confirm.render(f, main);
        }
        if let Some(prompt) = self.prompt.as_ref() {
            prompt.render(f, main);
        }

        let notifications = self.notifications.view_models(now);
        f.render_widget(NotificationsView::new(&notifications), main);

        f.render_widget(StatusBarView::new(self.hints()), bottom);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn fragment(&self) -> &str {
        self.router.fragment()
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_some()
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm.is_some()
    }

    pub fn repository_mut(&mut self) -> &mut UserRepository {
        &mut self.repository
    }

    fn handle_users_action(&mut self, action: UsersListAction) {
        match action {
            UsersListAction::View(id) => self.navigate(Route::Profile(id)),
            UsersListAction::Delete { id, name } => {
                self.confirm = Some(ConfirmDialog::new(
                    format!("Delete {}?", name),
                    PendingAction::DeleteUser(id),
                ));
            }
            UsersListAction::Add => self.drawer = Some(AddUserDrawer::new()),
            UsersListAction::GoTo => self.open_prompt(),
            UsersListAction::Quit => self.should_quit = true,
        }
    }

    fn handle_profile_action(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::Back => self.navigate(Route::UsersList),
            ProfileAction::Copy(text) => match self.clipboard.copy(&text) {
                Ok(()) => self.notify("Copied to clipboard", Severity::Ok),
                Err(err) => debug!(error = %err, "clipboard copy failed"),
            },
            ProfileAction::Save { tab, user } => match self.repository.upsert(user.clone()) {
                Ok(()) => {
                    if let Some(Page::Profile(profile)) = self.page.as_mut() {
                        profile.commit(user);
                    }
                    self.notify(tab.saved_message(), Severity::Ok);
                }
                Err(err) => self.report_storage_error("save profile", &err),
            },
        }
    }

    fn navigate(&mut self, route: Route) {
        if self.router.navigate(&route) == Navigation::Rerender {
            self.render();
        }
    }

    fn open_prompt(&mut self) {
        self.prompt = Some(GoToPrompt::new(self.router.fragment()));
    }

    fn add_user(&mut self, draft: NewUser) {
        match self.repository.add(draft) {
            Ok(user) => {
                info!(id = %user.id, "user added from drawer");
                self.drawer = None;
                self.render();
                self.notify("User added", Severity::Ok);
            }
            Err(aurora_store::Error::Validation(reason)) => {
                self.notify(reason.to_string(), Severity::Default);
            }
            Err(err) => self.report_storage_error("add user", &err),
        }
    }

    fn delete_user(&mut self, id: &UserId) {
        match self.repository.delete(id) {
            Ok(()) => {
                self.render();
                self.notify("User deleted", Severity::Danger);
            }
            Err(err) => self.report_storage_error("delete user", &err),
        }
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifications.push(message, severity);
    }

    fn report_storage_error(&mut self, operation: &str, err: &aurora_store::Error) {
        error!(error = %err, operation, "storage operation failed");
        self.notify(format!("Could not {}: {}", operation, err), Severity::Danger);
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.prompt.is_some() {
            return PROMPT_HINTS;
        }
        if self.confirm.is_some() {
            return CONFIRM_HINTS;
        }
        if self.drawer.is_some() {
            return DRAWER_HINTS;
        }
        match self.page {
            Some(Page::Profile(_)) => PROFILE_HINTS,
            Some(Page::NotFound(_)) => NOT_FOUND_HINTS,
            _ => LIST_HINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::Tab;
    use aurora_store::{MemoryStorage, Storage, UserStore};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        copied: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::other("no clipboard"));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    /// Memory storage whose writes can be switched to fail.
    #[derive(Clone, Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: Rc<Cell<bool>>,
    }

    impl Storage for FlakyStorage {
        fn get_item(&self, key: &str) -> aurora_store::Result<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> aurora_store::Result<()> {
            if self.fail_writes.get() {
                return Err(aurora_store::Error::Io(io::Error::other("disk full")));
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&mut self, key: &str) -> aurora_store::Result<()> {
            self.inner.remove_item(key)
        }
    }

    fn app_with(
        storage: impl Storage + 'static,
        clipboard: RecordingClipboard,
        route: Option<&str>,
    ) -> App {
        let mut app = App::new(
            UserRepository::new(UserStore::new(storage)),
            Router::new(route),
            Box::new(clipboard),
            Notifications::new(Duration::from_millis(2200), Duration::from_millis(180)),
        );
        app.start();
        app.pump(Instant::now());
        app
    }

    fn app() -> App {
        app_with(MemoryStorage::new(), RecordingClipboard::default(), None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.pump(Instant::now());
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        app.pump(Instant::now());
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ids(app: &mut App) -> Vec<String> {
        app.repository_mut()
            .list()
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect()
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f, Instant::now())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_start_opens_seeded_list() {
        let mut app = app();
        assert_eq!(app.fragment(), "#/users");
        assert!(matches!(app.page(), Some(Page::Users(_))));
        assert_eq!(ids(&mut app), vec!["u1", "u2", "u3"]);

        let text = screen(&mut app);
        assert!(text.contains("Dave Richards"));
        assert!(text.contains("hari@mail.com"));
        assert!(text.contains("Sr. No"));
    }

    #[test]
    fn test_view_navigates_to_profile() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route(), Route::Profile("u2".to_string()));
        let text = screen(&mut app);
        assert!(text.contains("Abhishek Hari"));
        assert!(text.contains("Basic info"));
        assert!(text.contains("Education & skills"));
    }

    #[test]
    fn test_initial_route_for_missing_user_shows_fallback() {
        let mut app = app_with(
            MemoryStorage::new(),
            RecordingClipboard::default(),
            Some("#/users/nobody"),
        );
        assert!(matches!(app.page(), Some(Page::NotFound(_))));
        assert!(screen(&mut app).contains("User not found."));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::UsersList);
        assert!(matches!(app.page(), Some(Page::Users(_))));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(app.is_confirming());
        assert!(screen(&mut app).contains("Delete Dave Richards?"));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.is_confirming());
        assert_eq!(ids(&mut app).len(), 3);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(ids(&mut app), vec!["u2", "u3"]);
        assert_eq!(
            app.notifications().latest(),
            Some(("User deleted", Severity::Danger))
        );
    }

    #[test]
    fn test_invalid_draft_keeps_drawer_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert!(app.is_drawer_open());

        type_str(&mut app, "A");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_drawer_open());
        assert_eq!(
            app.notifications().latest(),
            Some(("Please enter a valid name", Severity::Default))
        );

        type_str(&mut app, "nn");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "not-an-email");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_drawer_open());
        assert_eq!(
            app.notifications().latest(),
            Some(("Please enter a valid email", Severity::Default))
        );
        assert_eq!(ids(&mut app).len(), 3);
    }

    #[test]
    fn test_drawer_cancel_has_no_side_effects() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Grace");
        press(&mut app, KeyCode::Esc);
        assert!(!app.is_drawer_open());
        assert_eq!(ids(&mut app).len(), 3);
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn test_backdrop_click_closes_drawer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        screen(&mut app);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 95,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.is_drawer_open());

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!app.is_drawer_open());
    }

    #[test]
    fn test_copy_email_from_profile() {
        let clipboard = RecordingClipboard::default();
        let copied = clipboard.copied.clone();
        let mut app = app_with(MemoryStorage::new(), clipboard, Some("#/users/u1"));

        ctrl(&mut app, 'e');
        ctrl(&mut app, 'p');
        assert_eq!(
            *copied.borrow(),
            vec!["dave@mail.com".to_string(), "+91 8332883854".to_string()]
        );
        assert_eq!(
            app.notifications().latest(),
            Some(("Copied to clipboard", Severity::Ok))
        );
    }

    #[test]
    fn test_clipboard_failure_is_silent() {
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let mut app = app_with(MemoryStorage::new(), clipboard, Some("#/users/u1"));
        ctrl(&mut app, 'e');
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn test_section_save_does_not_rebuild_page() {
        let mut app = app_with(
            MemoryStorage::new(),
            RecordingClipboard::default(),
            Some("#/users/u3"),
        );
        app.handle_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE));
        type_str(&mut app, "IISc");
        ctrl(&mut app, 's');

        let Some(Page::Profile(profile)) = app.page() else {
            panic!("expected profile page");
        };
        assert_eq!(profile.active_tab(), Tab::Education);
        assert_eq!(
            app.notifications().latest(),
            Some(("Education saved", Severity::Ok))
        );

        let stored = app.repository_mut().get_by_id("u3").unwrap().unwrap();
        assert_eq!(stored.profile.education.school, "IISc");
        assert_eq!(stored.name, "Nishta Gupta");
    }

    #[test]
    fn test_failed_save_is_not_kept_for_later_saves() {
        let storage = FlakyStorage::default();
        let mut app = app_with(
            storage.clone(),
            RecordingClipboard::default(),
            Some("#/users/u2"),
        );

        storage.fail_writes.set(true);
        type_str(&mut app, "Abhi");
        ctrl(&mut app, 's');
        assert_eq!(
            app.notifications().latest(),
            Some((
                "Could not save profile: Storage IO error: disk full",
                Severity::Danger
            ))
        );

        storage.fail_writes.set(false);
        app.handle_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE));
        type_str(&mut app, "IIT");
        ctrl(&mut app, 's');
        assert_eq!(
            app.notifications().latest(),
            Some(("Education saved", Severity::Ok))
        );

        let mut reopened = UserRepository::new(UserStore::new(storage.inner.clone()));
        let stored = reopened.get_by_id("u2").unwrap().unwrap();
        assert_eq!(stored.profile.education.school, "IIT");
        assert_eq!(stored.name, "Abhishek Hari");
        assert_eq!(stored.profile.basic.first_name, "");
    }

    #[test]
    fn test_back_from_profile() {
        let mut app = app_with(
            MemoryStorage::new(),
            RecordingClipboard::default(),
            Some("#/users/u2"),
        );
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.fragment(), "#/users");
        assert!(matches!(app.page(), Some(Page::Users(_))));
    }

    #[test]
    fn test_goto_prompt_changes_location() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        for _ in 0.."#/users".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "#/users/u3");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route(), Route::Profile("u3".to_string()));
        assert!(screen(&mut app).contains("Nishta Gupta"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = app_with(
            MemoryStorage::new(),
            RecordingClipboard::default(),
            Some("#/users/u1"),
        );
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_corrupt_blob_reseeds() {
        let storage = MemoryStorage::new().with_item(aurora_store::DEFAULT_STORAGE_KEY, "{oops");
        let mut app = app_with(storage, RecordingClipboard::default(), None);
        assert_eq!(ids(&mut app), vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let storage = MemoryStorage::new();
        let mut app = app_with(storage.clone(), RecordingClipboard::default(), None);
        assert_eq!(ids(&mut app).len(), 3);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Grace Hopper");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "grace@navy.mil");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_drawer_open());
        assert_eq!(
            app.notifications().latest(),
            Some(("User added", Severity::Ok))
        );

        let after_add = ids(&mut app);
        assert_eq!(after_add.len(), 4);
        let grace = after_add[0].clone();
        assert!(grace.starts_with("u_"));

        // Dave moved to the second row.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(ids(&mut app), vec![grace.clone(), "u2".into(), "u3".into()]);

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::Profile(grace.clone()));
        type_str(&mut app, "Grace");
        ctrl(&mut app, 's');

        let mut reopened = UserRepository::new(UserStore::new(storage));
        let stored = reopened.get_by_id(&grace).unwrap().unwrap();
        assert_eq!(stored.profile.basic.first_name, "Grace");
        assert_eq!(stored.name, "Grace");
        assert_eq!(stored.email, "grace@navy.mil");
    }
}
