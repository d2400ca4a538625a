use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::judge_service::JudgeOperation,
};

/// Command executor that routes Elm commands to the services that perform them
#[derive(Clone, Default)]
pub struct CmdExecutor {
    judge_sender: Option<mpsc::UnboundedSender<JudgeOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_judge(judge_sender: mpsc::UnboundedSender<JudgeOperation>) -> Self {
        Self {
            judge_sender: Some(judge_sender),
            ..Self::default()
        }
    }

    pub fn set_judge_sender(&mut self, sender: mpsc::UnboundedSender<JudgeOperation>) {
        self.judge_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::RunCode { epoch, request } => {
                if let Some(judge_sender) = &self.judge_sender {
                    judge_sender.send(JudgeOperation::Run {
                        epoch: *epoch,
                        request: request.clone(),
                    })?;
                } else {
                    log::warn!("RunCode ignored: JudgeService not available");
                }
            }

            Cmd::CancelRun => {
                if let Some(judge_sender) = &self.judge_sender {
                    judge_sender.send(JudgeOperation::Cancel)?;
                } else {
                    log::warn!("CancelRun ignored: JudgeService not available");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, logging instead of stopping on failures
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_judge_sender: self.judge_sender.is_some(),
            is_judge_sender_closed: self.judge_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_judge_sender: bool,
    pub is_judge_sender_closed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::execution::SubmissionRequest;

    #[test]
    fn test_run_code_routes_to_judge_service() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new_with_judge(tx);
        let request = SubmissionRequest::new(63, "console.log(1)");

        executor.execute_command(&Cmd::RunCode {
            epoch: 5,
            request: request.clone(),
        })?;
        executor.execute_command(&Cmd::CancelRun)?;

        assert_eq!(
            rx.try_recv()?,
            JudgeOperation::Run { epoch: 5, request }
        );
        assert_eq!(rx.try_recv()?, JudgeOperation::Cancel);
        Ok(())
    }

    #[test]
    fn test_without_judge_sender_commands_are_dropped() -> Result<()> {
        let executor = CmdExecutor::new();
        executor.execute_command(&Cmd::CancelRun)?;
        assert!(!executor.get_stats().has_judge_sender);
        Ok(())
    }

    #[test]
    fn test_closed_judge_channel_is_reported() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let executor = CmdExecutor::new_with_judge(tx);

        let log = executor.execute_commands(&[Cmd::CancelRun, Cmd::None]);
        assert!(log[0].starts_with("Failed to execute CancelRun"));
        assert_eq!(log[1], "Executed: None");
        assert_eq!(executor.get_stats().is_judge_sender_closed, Some(true));
    }

    #[test]
    fn test_render_and_resize_forwarding() -> Result<()> {
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_render_request_sender(render_tx);
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::Batch(vec![
            Cmd::RequestRender,
            Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 30,
            }),
        ]))?;

        assert!(render_rx.try_recv().is_ok());
        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 100,
                height: 30
            }
        );
        Ok(())
    }
}
