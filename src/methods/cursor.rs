use super::visibility::Visibility;

/// Tracks the default visibility while one class body is evaluated.
///
/// A bare `private`/`protected`/`public` moves the cursor; methods
/// defined afterward pick up the new default. Methods defined earlier
/// are not affected. Each class body gets its own cursor, so a default
/// never carries over into another class (or into a later reopening of
/// the same class).
#[derive(Debug, Default)]
pub struct VisibilityCursor {
    current: Visibility,
}

impl VisibilityCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Visibility {
        self.current
    }

    pub fn set_default(&mut self, visibility: Visibility) {
        log::trace!("VISIBILITY DEFAULT: {} -> {visibility}", self.current);
        self.current = visibility;
    }

    pub fn reset(&mut self) {
        self.current = Visibility::Public;
    }
}
