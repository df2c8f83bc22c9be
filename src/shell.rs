use crate::{engine, haptics, overlay, storage, timers::WakeTimer};
use show_core::{Command, ShowSession};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Browser-side owner of the session: runs one trigger at a time, then
/// executes the resulting commands and re-arms the wake timer.
pub struct Shell {
    session: RefCell<ShowSession>,
    document: web::Document,
    wake: WakeTimer,
}

impl Shell {
    pub fn new(session: ShowSession, document: web::Document) -> Rc<Self> {
        let shell = Rc::new(Self {
            session: RefCell::new(session),
            document,
            wake: WakeTimer::default(),
        });
        let weak = Rc::downgrade(&shell);
        shell.wake.set_callback(move || {
            if let Some(s) = weak.upgrade() {
                s.wake.fired();
                s.update(|session, now| session.poll(now));
            }
        });
        shell
    }

    pub fn is_torn_down(&self) -> bool {
        self.session.borrow().is_torn_down()
    }

    /// Run `f` against the session, then flush its commands. The session
    /// borrow ends before any command runs.
    pub fn update(&self, f: impl FnOnce(&mut ShowSession, f64)) {
        let now = instant::now();
        let (commands, deadline) = {
            let mut session = self.session.borrow_mut();
            f(&mut session, now);
            (session.drain_commands(), session.next_deadline())
        };
        for cmd in &commands {
            self.execute(cmd);
        }
        self.wake.sync(deadline, now);
    }

    pub fn teardown(&self) {
        self.session.borrow_mut().teardown();
        self.wake.clear();
    }

    fn execute(&self, cmd: &Command) {
        match cmd {
            Command::ApplyRenderConfig(cfg) => engine::apply_config(cfg),
            Command::Haptic(pattern) => haptics::vibrate(*pattern),
            Command::Effect { kind, at } => engine::trigger_effect(*kind, *at),
            Command::Overlay(update) => overlay::apply(&self.document, update),
            Command::SaveSettings(settings) => storage::save_settings(settings),
        }
    }
}
