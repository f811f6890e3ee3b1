//! Unlock callbacks
//!
//! A control holds at most one listener. Callbacks run synchronously inside
//! `handle_event`, `tick` or `reset`.

/// Which optional callbacks a listener wants
///
/// The control skips computing and dispatching anything a listener has not
/// asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerCapabilities {
    /// Receive `on_unlock_failure` when a release falls short
    pub failure: bool,
    /// Receive `on_unlock_progress` on every position change
    pub progress: bool,
}

impl ListenerCapabilities {
    pub const ALL: Self = Self {
        failure: true,
        progress: true,
    };

    pub const SUCCESS_ONLY: Self = Self {
        failure: false,
        progress: false,
    };
}

impl Default for ListenerCapabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Receives unlock outcomes and progress
pub trait SlideUnlockListener: Send {
    fn capabilities(&self) -> ListenerCapabilities {
        ListenerCapabilities::ALL
    }

    /// Thumb was released at the right border
    fn on_unlock_success(&mut self) {}

    /// Thumb was released short of the right border and is springing back
    fn on_unlock_failure(&mut self) {}

    /// Thumb travel in `[0, 1]`, from drags and from the spring-back
    fn on_unlock_progress(&mut self, _progress: f32) {}
}

type ResultCallback = Box<dyn FnMut(bool) + Send>;
type ProgressCallback = Box<dyn FnMut(f32) + Send>;
type UnitCallback = Box<dyn FnMut() + Send>;

/// Closure-backed listener
///
/// ```rust
/// use slidelock_widget::CallbackListener;
///
/// let listener = CallbackListener::new()
///     .on_result(|unlocked| println!("unlocked: {unlocked}"))
///     .on_progress(|p| println!("{:.0}%", p * 100.0));
/// ```
#[derive(Default)]
pub struct CallbackListener {
    on_success: Option<UnitCallback>,
    on_failure: Option<UnitCallback>,
    on_result: Option<ResultCallback>,
    on_progress: Option<ProgressCallback>,
}

impl CallbackListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on a successful unlock
    pub fn on_success<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called on a failed unlock
    pub fn on_failure<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_failure = Some(Box::new(callback));
        self
    }

    /// Called with `true` on success and `false` on failure
    pub fn on_result<F: FnMut(bool) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_result = Some(Box::new(callback));
        self
    }

    /// Called with the current progress
    pub fn on_progress<F: FnMut(f32) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }
}

impl SlideUnlockListener for CallbackListener {
    fn capabilities(&self) -> ListenerCapabilities {
        ListenerCapabilities {
            failure: self.on_failure.is_some() || self.on_result.is_some(),
            progress: self.on_progress.is_some(),
        }
    }

    fn on_unlock_success(&mut self) {
        if let Some(ref mut callback) = self.on_success {
            callback();
        }
        if let Some(ref mut callback) = self.on_result {
            callback(true);
        }
    }

    fn on_unlock_failure(&mut self) {
        if let Some(ref mut callback) = self.on_failure {
            callback();
        }
        if let Some(ref mut callback) = self.on_result {
            callback(false);
        }
    }

    fn on_unlock_progress(&mut self, progress: f32) {
        if let Some(ref mut callback) = self.on_progress {
            callback(progress);
        }
    }
}

impl std::fmt::Debug for CallbackListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackListener")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
