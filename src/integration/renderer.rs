use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

/// Draws the component tree for a given state onto whatever TUI it is handed
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::state::EditorState,
        domain::ui::{Notification, NotificationKind},
        infrastructure::tui::test::TestTui,
    };

    #[tokio::test]
    async fn test_renders_full_screen() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 24)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::clone(&test_tui) as _;

        let mut state = AppState::default().with_editor(EditorState::new("print(1)", 8, 2));
        state.system.notification = Some(Notification::new(
            NotificationKind::Success,
            "Compiled Successfully!",
        ));

        let mut renderer = Renderer::new();
        renderer.render(&tui, &state).await?;

        let guard = test_tui.lock().await;
        let screen = guard.contents();
        assert_eq!(guard.draw_count(), 1);
        assert!(screen.contains("Language: Python (3.8.1)"));
        assert!(screen.contains("Theme: Oceanic Next"));
        assert!(screen.contains("print(1)"));
        assert!(screen.contains("Output"));
        assert!(screen.contains("Compiled Successfully!"));
        Ok(())
    }
}
