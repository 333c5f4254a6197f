use crate::events::{Event, EventHandler};
use crate::input::InputState;
use crate::keymap::KeyMap;
use crate::listing::Listing;
use crate::ui;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use herodex_core::{HerodexError, HerodexResult, PagingService, FIRST_PAGE};
use herodex_domain::{Hero, HeroDraft, HeroId, HERO_FIELDS};
use herodex_persistence::RecordStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Actions dispatchable from the listing. Row-parameterized actions
/// (edit, delete) resolve their target from the listing's selected
/// element at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    PreviousRow,
    NextRow,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    Create,
    Edit,
    Delete,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Form(FormKind),
    ConfirmDelete(HeroId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit(HeroId),
}

/// In-progress form: the draft being edited, which field has focus, and
/// the live input buffer for that field.
pub struct FormState {
    pub kind: FormKind,
    pub draft: HeroDraft,
    pub field_index: usize,
    pub input: InputState,
    pub problems: Vec<String>,
}

impl FormState {
    fn new(kind: FormKind, draft: HeroDraft) -> Self {
        let mut input = InputState::new();
        input.set((HERO_FIELDS[0].get)(&draft).to_string());
        Self {
            kind,
            draft,
            field_index: 0,
            input,
            problems: Vec::new(),
        }
    }

    /// Write the live buffer back into the draft's focused field.
    fn commit_field(&mut self) {
        (HERO_FIELDS[self.field_index].set)(&mut self.draft, self.input.as_str().to_string());
    }

    fn focus_field(&mut self, index: usize) {
        self.commit_field();
        self.field_index = index;
        self.input
            .set((HERO_FIELDS[index].get)(&self.draft).to_string());
    }

    fn next_field(&mut self) {
        self.focus_field((self.field_index + 1) % HERO_FIELDS.len());
    }

    fn previous_field(&mut self) {
        self.focus_field((self.field_index + HERO_FIELDS.len() - 1) % HERO_FIELDS.len());
    }
}

/// The interactive registry browser: one store, one paging service, one
/// listing cursor. Reads one input event, runs exactly one action to
/// completion, then re-renders from ground truth.
pub struct App {
    pub store: Box<dyn RecordStore>,
    pub paging: PagingService,
    pub listing: Listing,
    pub heroes: Vec<Hero>,
    pub mode: Mode,
    pub form: Option<FormState>,
    pub status: Option<String>,
    pub keymap: KeyMap<ListAction>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Box<dyn RecordStore>, rows_per_page: u32) -> HerodexResult<Self> {
        Ok(Self {
            store,
            paging: PagingService::new(0, rows_per_page)?,
            listing: Listing::new(),
            heroes: Vec::new(),
            mode: Mode::List,
            form: None,
            status: None,
            keymap: default_keymap()?,
            should_quit: false,
        })
    }

    /// Re-fetch the current page from the store and reconcile the cursor.
    /// Runs after every mutation; the rendered list is never patched in
    /// place.
    pub async fn refresh(&mut self) -> HerodexResult<()> {
        let size = self.store.size().await?;
        self.paging.set_store_size(size);
        self.heroes = self.store.get_page(&self.paging.current_data_page()).await?;
        self.listing.render(0, self.heroes.len());
        Ok(())
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        self.listing
            .selected_element()
            .and_then(|idx| self.heroes.get(idx))
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub async fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> HerodexResult<()> {
        match self.mode.clone() {
            Mode::List => self.handle_list_key(key.code).await,
            Mode::Form(_) => self.handle_form_key(key.code).await,
            Mode::ConfirmDelete(id) => self.handle_confirm_key(key.code, id).await,
        }
    }

    async fn handle_list_key(&mut self, code: crossterm::event::KeyCode) -> HerodexResult<()> {
        let Some(action) = self.keymap.dispatch(code).copied() else {
            return Ok(()); // unbound key
        };
        self.status = None;

        match action {
            ListAction::PreviousRow => self.listing.select_previous(),
            ListAction::NextRow => self.listing.select_next(),
            ListAction::PreviousPage => {
                self.paging.previous_page();
                self.refresh().await?;
            }
            ListAction::NextPage => {
                self.paging.next_page();
                self.refresh().await?;
            }
            ListAction::FirstPage => {
                self.paging.jump_to_page(FIRST_PAGE as i64);
                self.refresh().await?;
            }
            ListAction::LastPage => {
                self.paging.jump_to_page(i64::MAX);
                self.refresh().await?;
            }
            ListAction::Create => {
                self.mode = Mode::Form(FormKind::Create);
                self.form = Some(FormState::new(FormKind::Create, HeroDraft::default()));
            }
            ListAction::Edit => {
                if let Some(hero) = self.selected_hero() {
                    let kind = FormKind::Edit(hero.id);
                    let draft = HeroDraft::from_hero(hero);
                    self.mode = Mode::Form(kind.clone());
                    self.form = Some(FormState::new(kind, draft));
                }
            }
            ListAction::Delete => {
                if let Some(hero) = self.selected_hero() {
                    self.mode = Mode::ConfirmDelete(hero.id);
                }
            }
            ListAction::Quit => self.quit(),
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, code: crossterm::event::KeyCode) -> HerodexResult<()> {
        use crossterm::event::KeyCode;

        let Some(form) = self.form.as_mut() else {
            self.mode = Mode::List;
            return Ok(());
        };

        match code {
            KeyCode::Esc => {
                self.form = None;
                self.mode = Mode::List;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Enter => {
                if form.field_index + 1 < HERO_FIELDS.len() {
                    form.next_field();
                } else {
                    self.submit_form().await?;
                }
            }
            KeyCode::Left => form.input.move_left(),
            KeyCode::Right => form.input.move_right(),
            KeyCode::Backspace => form.input.backspace(),
            KeyCode::Char(c) => form.input.insert_char(c),
            _ => {}
        }
        Ok(())
    }

    async fn submit_form(&mut self) -> HerodexResult<()> {
        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };
        form.commit_field();

        let problems = form.draft.validate();
        if !problems.is_empty() {
            form.problems = problems;
            return Ok(());
        }

        let Some(hero) = form.draft.clone().into_hero() else {
            // validate() passed, so this cannot happen; keep the form up.
            form.problems = vec!["Draft could not be converted".to_string()];
            return Ok(());
        };

        match form.kind.clone() {
            FormKind::Create => {
                let id = self.store.append(hero).await?;
                tracing::info!("Created hero {}", id);
                self.status = Some("Hero registered".to_string());
            }
            FormKind::Edit(id) => {
                if self.store.update(id, &hero).await? {
                    self.status = Some("Hero updated".to_string());
                } else {
                    self.status = Some("Hero no longer exists".to_string());
                }
            }
        }

        self.form = None;
        self.mode = Mode::List;
        self.refresh().await
    }

    async fn handle_confirm_key(
        &mut self,
        code: crossterm::event::KeyCode,
        id: HeroId,
    ) -> HerodexResult<()> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if self.store.delete(id).await? {
                    self.status = Some("Hero deleted".to_string());
                } else {
                    self.status = Some("Hero no longer exists".to_string());
                }
                self.mode = Mode::List;
                self.refresh().await?;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::List;
            }
            _ => {}
        }
        Ok(())
    }

    pub async fn run(&mut self) -> HerodexResult<()> {
        let mut terminal = setup_terminal()?;
        self.refresh().await?;

        let mut events = EventHandler::new();
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Tick => {}
                }
            }
        }
        events.stop();

        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn default_keymap() -> HerodexResult<KeyMap<ListAction>> {
    use crossterm::event::KeyCode;

    let mut map = KeyMap::new();
    let bindings = [
        (KeyCode::Up, "[up/down] select", ListAction::PreviousRow),
        (KeyCode::Down, "", ListAction::NextRow),
        (KeyCode::Left, "[left/right] page", ListAction::PreviousPage),
        (KeyCode::Right, "", ListAction::NextPage),
        (KeyCode::Home, "", ListAction::FirstPage),
        (KeyCode::End, "", ListAction::LastPage),
        (KeyCode::Char('c'), "[c] create", ListAction::Create),
        (KeyCode::Char('u'), "[u] update", ListAction::Edit),
        (KeyCode::Char('d'), "[d] delete", ListAction::Delete),
        (KeyCode::Char('q'), "[q] quit", ListAction::Quit),
    ];
    for (key, label, action) in bindings {
        map.bind(key, label, action)
            .map_err(|e| HerodexError::Internal(e.to_string()))?;
    }
    Ok(map)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
