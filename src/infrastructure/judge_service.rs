use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::{JudgeEvent, RawMsg},
    domain::execution::{ExecutionFailure, SubmissionRequest},
    infrastructure::judge::{wait_for_result, JudgeApi, PollPolicy},
};

/// Operations accepted by [`JudgeService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeOperation {
    /// Submit and poll; supersedes any live submission
    Run {
        epoch: u64,
        request: SubmissionRequest,
    },
    /// Stop the live submission without reporting anything for it
    Cancel,
}

impl JudgeOperation {
    pub fn name(&self) -> &'static str {
        match self {
            JudgeOperation::Run { .. } => "Run",
            JudgeOperation::Cancel => "Cancel",
        }
    }
}

/// Owns the submit-and-poll tasks. At most one is live: each `Run` cancels the
/// previous task through its child token before spawning the next.
pub struct JudgeService {
    api: Arc<dyn JudgeApi>,
    policy: PollPolicy,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<JudgeOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    live: Option<CancellationToken>,
}

pub type NewJudgeService = (
    mpsc::UnboundedSender<JudgeOperation>, // op_tx - operations to send
    CancellationToken,                     // shutdown signal
    JudgeService,
);

impl JudgeService {
    pub fn new(
        api: Arc<dyn JudgeApi>,
        policy: PollPolicy,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> NewJudgeService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                api,
                policy,
                op_rx,
                cancel_token,
                raw_tx,
                live: None,
            },
        )
    }

    /// Run the JudgeService in background task
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("JudgeService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("JudgeService error: {e}")));
            }
        })
    }

    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                op = self.op_rx.recv() => {
                    match op {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("JudgeService: operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("JudgeService received cancellation signal");
                    break;
                }
            }
        }

        self.cancel_live();
        Ok(())
    }

    fn handle_operation(&mut self, op: JudgeOperation) {
        log::debug!("Handling JudgeOperation: {}", op.name());

        match op {
            JudgeOperation::Run { epoch, request } => {
                self.cancel_live();
                let token = self.cancel_token.child_token();
                self.live = Some(token.clone());
                tokio::spawn(run_submission(
                    Arc::clone(&self.api),
                    self.policy,
                    epoch,
                    request,
                    token,
                    self.raw_tx.clone(),
                ));
            }
            JudgeOperation::Cancel => self.cancel_live(),
        }
    }

    fn cancel_live(&mut self) {
        if let Some(token) = self.live.take() {
            token.cancel();
        }
    }
}

/// Submit `request`, then poll until a terminal status, reporting every step
/// tagged with `epoch`. Nothing is reported once `cancel` fires.
async fn run_submission(
    api: Arc<dyn JudgeApi>,
    policy: PollPolicy,
    epoch: u64,
    request: SubmissionRequest,
    cancel: CancellationToken,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
) {
    let emit = |event: JudgeEvent| {
        if !cancel.is_cancelled() {
            let _ = raw_tx.send(RawMsg::Judge(event));
        }
    };

    log::info!(
        "Submitting {} bytes as language {} (epoch {epoch})",
        request.source_code.len(),
        request.language_id
    );

    let submitted = tokio::select! {
        _ = cancel.cancelled() => return,
        submitted = api.submit(&request) => submitted,
    };

    let token = match submitted {
        Ok(token) => token,
        Err(e) => {
            log::error!("Submission failed (epoch {epoch}): {e}");
            emit(JudgeEvent::Failed {
                epoch,
                failure: ExecutionFailure::from(&e),
            });
            return;
        }
    };

    log::info!("Submission accepted with token {token} (epoch {epoch})");
    emit(JudgeEvent::Submitted {
        epoch,
        token: token.clone(),
    });

    let outcome = wait_for_result(api.as_ref(), &token, policy, &cancel, |attempt, status| {
        emit(JudgeEvent::Progress {
            epoch,
            attempt,
            status: status.clone(),
        })
    })
    .await;

    match outcome {
        Some(Ok(result)) => emit(JudgeEvent::Finished { epoch, result }),
        Some(Err(e)) => emit(JudgeEvent::Failed {
            epoch,
            failure: ExecutionFailure::from(&e),
        }),
        None => log::debug!("Polling for {token} cancelled (epoch {epoch})"),
    }
}
