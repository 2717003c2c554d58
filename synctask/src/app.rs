//! Application state and event handling.
//!
//! [`App`] wraps the [`TaskBoard`] with UI-only state: the sign-in form,
//! overlays, text inputs, and list selection. Key handling mutates the
//! board and reports a [`PersistRequest`] for the event loop to execute;
//! the shell itself performs no I/O, and refused operations are logged
//! and otherwise dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use synctask_model::task::TaskId;

use crate::board::{TaskBoard, ViewTab};
use crate::store::PersistRequest;

/// A single-line text input with a character-indexed cursor.
#[derive(Debug, Default, Clone)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    /// Current contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a character index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters entered.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the cursor within the value.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.value.remove(index);
        }
    }

    /// Move cursor left.
    pub const fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start.
    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor past the last character.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Which field of the sign-in form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInField {
    /// Full name input.
    #[default]
    Name,
    /// Email input.
    Email,
}

/// Overlay currently drawn over the board screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No overlay; the task list has focus.
    #[default]
    None,
    /// The create-task modal.
    CreateTask,
    /// The leaderboard modal.
    Leaderboard,
}

/// Main application state.
pub struct App {
    /// Board state: session, tasks, active tab.
    pub board: TaskBoard,
    /// Active overlay on the board screen.
    pub overlay: Overlay,
    /// Sign-in form: focused field.
    pub signin_focus: SignInField,
    /// Sign-in form: name input.
    pub name_input: InputField,
    /// Sign-in form: email input.
    pub email_input: InputField,
    /// Create-task modal: title input.
    pub title_input: InputField,
    /// Selected row in the visible task list.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    max_title_len: usize,
    timestamp_format: String,
}

impl App {
    /// Create the shell around a (possibly restored) board.
    #[must_use]
    pub fn new(board: TaskBoard) -> Self {
        Self {
            board,
            overlay: Overlay::None,
            signin_focus: SignInField::Name,
            name_input: InputField::default(),
            email_input: InputField::default(),
            title_input: InputField::default(),
            selected: 0,
            should_quit: false,
            max_title_len: 256,
            timestamp_format: "%H:%M".to_string(),
        }
    }

    /// Set the maximum accepted task title length.
    #[must_use]
    pub const fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
        self
    }

    /// Set the timestamp display format.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Timestamp display format for task rows.
    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Whether the sign-in gate is on screen.
    #[must_use]
    pub fn is_signin_open(&self) -> bool {
        self.board.current_user().is_none()
    }

    /// Handle a key event.
    ///
    /// Returns the persistence side effect to run, if the key changed
    /// durable state.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<PersistRequest> {
        // Ctrl-C quits from anywhere.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.is_signin_open() {
            return self.handle_signin_key(key);
        }
        match self.overlay {
            Overlay::CreateTask => self.handle_create_key(key),
            Overlay::Leaderboard => {
                self.handle_leaderboard_key(key);
                None
            }
            Overlay::None => self.handle_board_key(key),
        }
    }

    /// Handle key event on the sign-in gate.
    fn handle_signin_key(&mut self, key: KeyEvent) -> Option<PersistRequest> {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.signin_focus = match self.signin_focus {
                    SignInField::Name => SignInField::Email,
                    SignInField::Email => SignInField::Name,
                };
                None
            }
            KeyCode::Enter => self.submit_signin(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.active_signin_input().insert(c);
                None
            }
            KeyCode::Backspace => {
                self.active_signin_input().backspace();
                None
            }
            KeyCode::Left => {
                self.active_signin_input().move_left();
                None
            }
            KeyCode::Right => {
                self.active_signin_input().move_right();
                None
            }
            KeyCode::Home => {
                self.active_signin_input().move_home();
                None
            }
            KeyCode::End => {
                self.active_signin_input().move_end();
                None
            }
            _ => None,
        }
    }

    /// Handle key event on the board screen with no overlay.
    fn handle_board_key(&mut self, key: KeyEvent) -> Option<PersistRequest> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('1') => {
                self.switch_tab(ViewTab::Available);
                None
            }
            KeyCode::Char('2') => {
                self.switch_tab(ViewTab::MyTasks);
                None
            }
            KeyCode::Char('3') => {
                self.switch_tab(ViewTab::Completed);
                None
            }
            KeyCode::Left => {
                self.switch_tab(self.board.active_tab().prev());
                None
            }
            KeyCode::Right => {
                self.switch_tab(self.board.active_tab().next());
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Char('c') => self.claim_selected(),
            KeyCode::Char('r') => self.release_selected(),
            KeyCode::Char(' ') | KeyCode::Enter => self.complete_selected(),
            KeyCode::Char('n') => {
                self.open_create_modal();
                None
            }
            KeyCode::Char('l') => {
                self.overlay = Overlay::Leaderboard;
                None
            }
            KeyCode::Char('s') => self.sign_out(),
            _ => None,
        }
    }

    /// Handle key event in the create-task modal.
    fn handle_create_key(&mut self, key: KeyEvent) -> Option<PersistRequest> {
        match key.code {
            KeyCode::Esc => {
                self.overlay = Overlay::None;
                self.title_input.clear();
                None
            }
            KeyCode::Enter => self.submit_create(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.title_input.char_count() < self.max_title_len {
                    self.title_input.insert(c);
                }
                None
            }
            KeyCode::Backspace => {
                self.title_input.backspace();
                None
            }
            KeyCode::Left => {
                self.title_input.move_left();
                None
            }
            KeyCode::Right => {
                self.title_input.move_right();
                None
            }
            KeyCode::Home => {
                self.title_input.move_home();
                None
            }
            KeyCode::End => {
                self.title_input.move_end();
                None
            }
            _ => None,
        }
    }

    /// Handle key event in the leaderboard overlay.
    fn handle_leaderboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('l' | 'q') => {
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    /// The input field the sign-in focus points at.
    fn active_signin_input(&mut self) -> &mut InputField {
        match self.signin_focus {
            SignInField::Name => &mut self.name_input,
            SignInField::Email => &mut self.email_input,
        }
    }

    /// Validate the sign-in form and start a session.
    fn submit_signin(&mut self) -> Option<PersistRequest> {
        let name = self.name_input.value().trim().to_string();
        let email = self.email_input.value().trim().to_string();
        if name.is_empty() || !looks_like_email(&email) {
            tracing::debug!("sign-in form incomplete, staying on gate");
            return None;
        }

        let user = self.board.sign_in(&name, &email);
        tracing::info!(user_id = %user.id, "signed in");
        self.name_input.clear();
        self.email_input.clear();
        self.signin_focus = SignInField::Name;
        self.selected = 0;
        Some(PersistRequest::Snapshot)
    }

    /// End the session and reopen the sign-in gate.
    fn sign_out(&mut self) -> Option<PersistRequest> {
        self.board.sign_out();
        tracing::info!("signed out");
        self.overlay = Overlay::None;
        self.selected = 0;
        Some(PersistRequest::RemoveUser)
    }

    /// Open the create-task modal if the user may create tasks.
    fn open_create_modal(&mut self) {
        let can_create = self
            .board
            .current_user()
            .is_some_and(|user| user.can_create_tasks);
        if can_create {
            self.overlay = Overlay::CreateTask;
        } else {
            tracing::debug!("task creation not allowed for this user");
        }
    }

    /// Create a task from the modal input.
    fn submit_create(&mut self) -> Option<PersistRequest> {
        let title = self.title_input.value().to_string();
        let created = self.board.create_task(&title).map(|task| task.id.clone());
        match created {
            Ok(id) => {
                tracing::info!(task_id = %id, "task created");
                self.title_input.clear();
                self.overlay = Overlay::None;
                self.clamp_selection();
                Some(PersistRequest::Snapshot)
            }
            Err(e) => {
                // The modal stays open so the title can be fixed.
                tracing::debug!(error = %e, "create ignored");
                None
            }
        }
    }

    /// Claim the selected task.
    fn claim_selected(&mut self) -> Option<PersistRequest> {
        let id = self.selected_task_id()?;
        match self.board.claim_task(&id) {
            Ok(()) => {
                tracing::info!(task_id = %id, "task claimed");
                self.clamp_selection();
                Some(PersistRequest::Snapshot)
            }
            Err(e) => {
                tracing::debug!(task_id = %id, error = %e, "claim ignored");
                None
            }
        }
    }

    /// Release the selected task back to the pool.
    fn release_selected(&mut self) -> Option<PersistRequest> {
        let id = self.selected_task_id()?;
        match self.board.release_task(&id) {
            Ok(()) => {
                tracing::info!(task_id = %id, "task released");
                self.clamp_selection();
                Some(PersistRequest::Snapshot)
            }
            Err(e) => {
                tracing::debug!(task_id = %id, error = %e, "release ignored");
                None
            }
        }
    }

    /// Complete the selected task.
    fn complete_selected(&mut self) -> Option<PersistRequest> {
        let id = self.selected_task_id()?;
        match self.board.complete_task(&id) {
            Ok(()) => {
                tracing::info!(task_id = %id, "task completed");
                self.clamp_selection();
                Some(PersistRequest::Snapshot)
            }
            Err(e) => {
                tracing::debug!(task_id = %id, error = %e, "complete ignored");
                None
            }
        }
    }

    /// Id of the selected task on the active tab, if any.
    fn selected_task_id(&self) -> Option<TaskId> {
        self.board
            .visible_tasks()
            .get(self.selected)
            .map(|task| task.id.clone())
    }

    /// Switch tab and keep the selection in range.
    fn switch_tab(&mut self, tab: ViewTab) {
        self.board.set_active_tab(tab);
        self.clamp_selection();
    }

    /// Move selection down, stopping at the last row.
    fn select_next(&mut self) {
        let len = self.board.visible_tasks().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Pull the selection back into the visible range.
    fn clamp_selection(&mut self) {
        let len = self.board.visible_tasks().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Form-level plausibility check for an email address: something before
/// the `@`, and a domain with an interior dot.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
