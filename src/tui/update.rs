//! Navigation controller: routes events through the page stack.
//!
//! Pure apart from logging. Fully testable without a terminal. Sessions
//! answer actions with a [`Transition`]; the controller interprets it in
//! the same dispatch cycle and hands any side effect back to the caller.

use super::state::{
    Action, App, AppEvent, Effect, EffectOutcome, Page, Status, Transition,
};

impl App {
    /// Process one event to completion.
    ///
    /// Returns the effect the caller must execute, if any. Its result comes
    /// back later as [`AppEvent::Outcome`].
    pub fn dispatch(&mut self, event: AppEvent) -> Option<Effect> {
        let mut pending = Some(event);
        while let Some(event) = pending.take() {
            match self.handle(event) {
                Transition::Stay => {}
                Transition::Push(page) => pending = Some(AppEvent::Push(page)),
                Transition::Pop => pending = Some(AppEvent::Pop),
                Transition::Redraw => pending = Some(AppEvent::Redraw),
                Transition::Quit => self.should_quit = true,
                Transition::Effect(effect) => return Some(effect),
            }
        }
        None
    }

    fn handle(&mut self, event: AppEvent) -> Transition {
        match event {
            AppEvent::Action(action) => {
                self.status = None;
                self.route(action)
            }
            AppEvent::Resize { width, height } => {
                tracing::debug!(width, height, "resize");
                self.resize(width, height);
                Transition::Stay
            }
            AppEvent::Redraw => {
                let (width, height) = self.size;
                self.resize(width, height);
                Transition::Stay
            }
            AppEvent::Push(page) => {
                self.open(page);
                Transition::Stay
            }
            AppEvent::Pop => {
                match self.stack.pop() {
                    Some(page) => tracing::info!(page = page.label(), "closed page"),
                    None => tracing::debug!("pop ignored at root"),
                }
                Transition::Stay
            }
            AppEvent::Outcome(outcome) => self.apply_outcome(outcome),
        }
    }

    /// Forward an action to the session owning the active page.
    fn route(&mut self, action: Action) -> Transition {
        match self.current_page() {
            Page::Menu => self.menu.update(action),
            Page::Uuid => self.uuid.update(action),
            Page::Hash => self.hash.update(action),
            Page::Color => self.color.update(action),
        }
    }

    /// The menu has a fixed layout and takes no part in resizing.
    fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.uuid.set_size(width, height);
        self.hash.resized();
        self.color.set_size(width, height);
    }

    fn open(&mut self, page: Page) {
        self.stack.push(page);
        match page {
            Page::Menu => self.menu.reset(),
            Page::Uuid => self.uuid.reset(),
            Page::Hash => self.hash.reset(),
            Page::Color => self.color.reset(),
        }
        tracing::info!(page = page.label(), depth = self.stack.len(), "opened page");
    }

    fn apply_outcome(&mut self, outcome: EffectOutcome) -> Transition {
        match outcome {
            EffectOutcome::Copied(Ok(())) => {
                self.status = Some(Status::info("Copied to clipboard"));
                Transition::Stay
            }
            EffectOutcome::Pasted(Ok(text)) => {
                self.status = Some(match self.current_page() {
                    Page::Uuid => match self.uuid.apply_paste(&text) {
                        0 => Status::info(format!("Pasted {} ids", self.uuid.ids.len())),
                        dropped => {
                            Status::error(format!("Could not parse {dropped} lines as UUID"))
                        }
                    },
                    Page::Hash => {
                        self.hash.set_input(text);
                        Status::info("Pasted from clipboard")
                    }
                    Page::Menu | Page::Color => Status::info("Pasted from clipboard"),
                });
                Transition::Stay
            }
            EffectOutcome::Edited(Ok(text)) => {
                match self.current_page() {
                    Page::Uuid => self.uuid.apply_edit(&text),
                    Page::Hash => {
                        // Editors terminate the last line; that newline is not input.
                        let input = text
                            .strip_suffix("\r\n")
                            .or_else(|| text.strip_suffix('\n'))
                            .unwrap_or(&text);
                        self.hash.set_input(input.to_string());
                    }
                    Page::Menu | Page::Color => {}
                }
                Transition::Redraw
            }
            EffectOutcome::Copied(Err(message)) | EffectOutcome::Pasted(Err(message)) => {
                tracing::warn!(%message, "clipboard failed");
                self.status = Some(Status::error(message));
                Transition::Stay
            }
            EffectOutcome::Edited(Err(message)) => {
                tracing::warn!(%message, "external edit failed");
                self.status = Some(Status::error(message));
                Transition::Redraw
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
