//! Presentation side of the login screen.
//!
//! Attempts finish on whatever worker the transport or SDK completes on.
//! [`MainThreadPresenter`] queues every effect instead of touching the UI, and
//! the UI-owning context drains the queue through [`MainLoop`].

use std::sync::Mutex;
use tokio::sync::mpsc;

/// Screen-level effects the login workflow can request.
pub trait NavigationPresenter {
    fn show_error(&self, message: &str);
    fn go_to_home_screen(&self);
    fn go_to_sign_up_screen(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    ShowError(String),
    GoToHomeScreen,
    GoToSignUpScreen,
}

impl UiEffect {
    pub fn apply<P: NavigationPresenter + ?Sized>(self, presenter: &P) {
        match self {
            UiEffect::ShowError(message) => presenter.show_error(&message),
            UiEffect::GoToHomeScreen => presenter.go_to_home_screen(),
            UiEffect::GoToSignUpScreen => presenter.go_to_sign_up_screen(),
        }
    }
}

/// Create a connected presenter handle and main loop.
pub fn main_thread_channel() -> (MainThreadPresenter, MainLoop) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (MainThreadPresenter { sender }, MainLoop { receiver })
}

/// Presenter handle usable from any thread; effects run on the [`MainLoop`].
#[derive(Clone)]
pub struct MainThreadPresenter {
    sender: mpsc::UnboundedSender<UiEffect>,
}

impl MainThreadPresenter {
    fn dispatch(&self, effect: UiEffect) {
        if self.sender.send(effect).is_err() {
            tracing::debug!("Main loop is gone; dropping UI effect");
        }
    }
}

impl NavigationPresenter for MainThreadPresenter {
    fn show_error(&self, message: &str) {
        self.dispatch(UiEffect::ShowError(message.to_string()));
    }

    fn go_to_home_screen(&self) {
        self.dispatch(UiEffect::GoToHomeScreen);
    }

    fn go_to_sign_up_screen(&self) {
        self.dispatch(UiEffect::GoToSignUpScreen);
    }
}

/// Receiving end owned by the UI context. Effects are applied in the order
/// they were dispatched.
pub struct MainLoop {
    receiver: mpsc::UnboundedReceiver<UiEffect>,
}

impl MainLoop {
    /// Apply effects until every [`MainThreadPresenter`] clone is dropped.
    pub async fn run<P: NavigationPresenter + ?Sized>(mut self, presenter: &P) {
        while let Some(effect) = self.receiver.recv().await {
            effect.apply(presenter);
        }
    }

    pub async fn next_effect(&mut self) -> Option<UiEffect> {
        self.receiver.recv().await
    }

    /// Apply whatever is queued right now without waiting. Returns the count.
    pub fn drain<P: NavigationPresenter + ?Sized>(&mut self, presenter: &P) -> usize {
        let mut applied = 0;
        while let Ok(effect) = self.receiver.try_recv() {
            effect.apply(presenter);
            applied += 1;
        }
        applied
    }
}

/// Presenter that only records what it was asked to do.
#[derive(Default)]
pub struct RecordingPresenter {
    effects: Mutex<Vec<UiEffect>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<UiEffect> {
        self.effects
            .lock()
            .map(|effects| effects.clone())
            .unwrap_or_default()
    }

    pub fn home_navigations(&self) -> usize {
        self.effects()
            .iter()
            .filter(|effect| **effect == UiEffect::GoToHomeScreen)
            .count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.effects()
            .into_iter()
            .filter_map(|effect| match effect {
                UiEffect::ShowError(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, effect: UiEffect) {
        if let Ok(mut effects) = self.effects.lock() {
            effects.push(effect);
        }
    }
}

impl NavigationPresenter for RecordingPresenter {
    fn show_error(&self, message: &str) {
        self.record(UiEffect::ShowError(message.to_string()));
    }

    fn go_to_home_screen(&self) {
        self.record(UiEffect::GoToHomeScreen);
    }

    fn go_to_sign_up_screen(&self) {
        self.record(UiEffect::GoToSignUpScreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let (presenter, mut main_loop) = main_thread_channel();
        presenter.show_error("login failed");
        presenter.go_to_home_screen();
        presenter.go_to_sign_up_screen();

        let screen = RecordingPresenter::new();
        assert_eq!(main_loop.drain(&screen), 3);
        assert_eq!(
            screen.effects(),
            vec![
                UiEffect::ShowError("login failed".to_string()),
                UiEffect::GoToHomeScreen,
                UiEffect::GoToSignUpScreen,
            ]
        );
        assert_eq!(main_loop.drain(&screen), 0);
    }

    #[tokio::test]
    async fn test_effects_from_worker_threads_reach_main_loop() {
        let (presenter, main_loop) = main_thread_channel();

        let worker = std::thread::spawn(move || {
            presenter.show_error("User cancelled login");
        });
        worker.join().unwrap();

        let screen = RecordingPresenter::new();
        main_loop.run(&screen).await;
        assert_eq!(screen.errors(), vec!["User cancelled login".to_string()]);
    }

    #[test]
    fn test_dispatch_after_loop_dropped_is_silent() {
        let (presenter, main_loop) = main_thread_channel();
        drop(main_loop);
        presenter.go_to_home_screen();
    }
}
