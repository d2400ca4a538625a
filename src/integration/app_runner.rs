use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        raw_msg::RawMsg,
        state::{AppState, EditorState},
    },
    infrastructure::{
        config::Config,
        judge::{JudgeApi, JudgeClient, PollPolicy},
        judge_service::JudgeService,
        tui,
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Pause between polls of an empty event source, so an idle loop does not spin
const IDLE_WAIT: Duration = Duration::from_millis(1);

/// Drives the Elm runtime: TUI events in, update cycle, commands out, render.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    renderer: Renderer,
    // Host-side effects requested by CmdExecutor
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    // For service termination
    judge_cancel: Option<CancellationToken>,
    judge_task: Option<JoinHandle<()>>,
}

impl AppRunner {
    /// Runner without a judge backend; run requests are logged and dropped.
    pub fn new(initial_state: AppState, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();

        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_cmd_tx);
        executor.set_render_request_sender(render_req_tx);

        Self {
            runtime: Runtime::new_with_executor(initial_state, executor),
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
            judge_cancel: None,
            judge_task: None,
        }
    }

    /// Start a JudgeService on `api` and route run/cancel commands to it.
    pub fn with_judge(mut self, api: Arc<dyn JudgeApi>, policy: PollPolicy) -> Result<Self> {
        let (op_tx, cancel_token, service) =
            JudgeService::new(api, policy, self.runtime.get_raw_sender());
        self.runtime.add_judge_sender(op_tx).map_err(|e| eyre!(e))?;
        self.judge_task = Some(service.run());
        self.judge_cancel = Some(cancel_token);
        Ok(self)
    }

    /// Production wiring: HTTP judge client built from the config.
    pub fn new_with_config(
        config: Config,
        editor: EditorState,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        let client = JudgeClient::new(config.judge.clone())?;
        let policy = PollPolicy::from(&config.judge);
        let state = AppState::new_with_config(config).with_editor(editor);

        Self::new(state, tui).with_judge(Arc::new(client), policy)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the state asks to quit, then stop the judge service and leave the terminal.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let mut needs_render = match event {
                Some(event) => self.handle_event(event),
                None => {
                    tokio::time::sleep(IDLE_WAIT).await;
                    false
                }
            };

            // judge feedback arrives outside TUI events and changes the screen too
            needs_render |= self.runtime.has_pending_messages();
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                        needs_render = true;
                    }
                }
            }
            while self.render_req_rx.try_recv().is_ok() {
                needs_render = true;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
                needs_render = true;
            }

            if needs_render {
                self.render().await?;
            }
        }

        self.shutdown();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Queue the raw messages for one TUI event; returns whether it warrants a redraw.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Quit | tui::Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            tui::Event::Tick => {
                self.runtime
                    .send_raw_msg(RawMsg::Tick(tokio::time::Instant::now().into_std()));
                false
            }
            tui::Event::Render => true,
            tui::Event::Resize(w, h) => {
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                true
            }
            tui::Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            tui::Event::Paste(text) => {
                for key in paste_keys(&text) {
                    self.runtime.send_raw_msg(RawMsg::Key(key));
                }
                true
            }
            tui::Event::Error => {
                self.runtime
                    .send_raw_msg(RawMsg::Error("terminal event stream failed".into()));
                true
            }
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Mouse(_) => false,
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        let mut tui = self.tui.lock().await;
        tui.suspend()?;
        // back here once the shell continues the process
        tui.resume()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    fn shutdown(&mut self) {
        if let Some(token) = self.judge_cancel.take() {
            token.cancel();
        }
        if let Some(task) = self.judge_task.take() {
            task.abort();
        }
    }
}

impl Drop for AppRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Bracketed paste arrives as one string; the editor consumes it key by key
fn paste_keys(text: &str) -> Vec<KeyEvent> {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\t' => KeyCode::Tab,
                c => KeyCode::Char(c),
            };
            KeyEvent::new(code, KeyModifiers::NONE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_paste_keys_maps_newlines_and_drops_carriage_returns() {
        let keys: Vec<KeyCode> = paste_keys("a\r\n\tb").into_iter().map(|k| k.code).collect();
        assert_eq!(
            keys,
            vec![
                KeyCode::Char('a'),
                KeyCode::Enter,
                KeyCode::Tab,
                KeyCode::Char('b')
            ]
        );
        assert!(paste_keys("x")
            .iter()
            .all(|k| k.modifiers == KeyModifiers::NONE));
    }
}
