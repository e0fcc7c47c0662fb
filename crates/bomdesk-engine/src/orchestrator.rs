//! Menu Orchestrator
//!
//! Each iteration: top-level action, then sub-action, then raw arguments,
//! then the handler. The Orchestrator owns the lifecycle events of every
//! operation:
//!
//! - `log_op_start!` once arguments are collected
//! - `log_op_end!` on success
//! - `log_op_error!` on failure, followed by the generic error notice
//!
//! All three share one `OpContext`. Request ids are numbered within the
//! session in the order operations start.
//!
//! A failed operation never ends the session. The session ends on quit, or
//! when the presentation boundary itself gives out (input closed, I/O
//! error). The store connection is released exactly once either way.

#![allow(clippy::result_large_err)]

use crate::handlers::{self, Outcome};
use bomdesk_core::logging_facility::OpContext;
use bomdesk_core::model::GeneratorBounds;
use bomdesk_core::registry::{select_action, select_target};
use bomdesk_core::{log_op_end, log_op_error, log_op_start};
use bomdesk_core::{Action, ExError, PromptError, PromptResult, Prompter};
use bomdesk_core_types::{RequestId, SessionId};
use bomdesk_store::errors::Result;
use bomdesk_store::Database;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The operator chose quit
    Quit,
    /// Input reached end-of-file
    InputClosed,
    /// The presentation boundary failed
    PresentationFailed,
}

/// Tally of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub exit: Exit,
    /// Operations that completed, including no-ops
    pub completed: usize,
    /// Operations that ended with the error notice
    pub failed: usize,
}

enum Step {
    Continue,
    Quit,
}

/// Owns the store handle for the lifetime of one menu session
pub struct Orchestrator {
    db: Database,
    bounds: GeneratorBounds,
    session: SessionId,
    next_request: RequestId,
    completed: usize,
    failed: usize,
}

impl Orchestrator {
    pub fn new(db: Database, bounds: GeneratorBounds) -> Self {
        let session = SessionId::new();
        Self {
            db,
            bounds,
            session,
            next_request: session.first_request(),
            completed: 0,
            failed: 0,
        }
    }

    /// Id of this session, the prefix of every request id it logs
    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// Drive the menu until quit or closed input, then release the store
    ///
    /// # Errors
    ///
    /// Only releasing the connection can fail here; operation failures are
    /// reported to the operator and counted in the summary.
    pub fn run(mut self, prompter: &mut dyn Prompter) -> Result<SessionSummary> {
        tracing::info!(session = %self.session, "session started");
        let exit = self.session(prompter);

        let summary = SessionSummary {
            exit,
            completed: self.completed,
            failed: self.failed,
        };
        tracing::info!(
            session = %self.session,
            exit = ?summary.exit,
            completed = summary.completed,
            failed = summary.failed,
            "session ended"
        );

        self.db.close()?;
        Ok(summary)
    }

    fn session(&mut self, prompter: &mut dyn Prompter) -> Exit {
        loop {
            match self.step(prompter) {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => return Exit::Quit,
                Err(PromptError::Closed) => return Exit::InputClosed,
                Err(err) => {
                    let err = ExError::from(err);
                    tracing::error!(
                        session = %self.session,
                        err_code = err.code(),
                        error = %err,
                        "presentation failed"
                    );
                    return Exit::PresentationFailed;
                }
            }
        }
    }

    fn step(&mut self, prompter: &mut dyn Prompter) -> PromptResult<Step> {
        let action = select_action(prompter)?;
        if action == Action::Quit {
            return Ok(Step::Quit);
        }
        let selection = select_target(prompter, action)?;
        let args = selection.prompt_args(prompter)?;

        let ctx = OpContext::open(self.next_request, selection);
        self.next_request = self.next_request.next();
        log_op_start!(ctx);

        match handlers::execute(&mut self.db, &self.bounds, selection, &args) {
            Ok(outcome) => {
                log_op_end!(ctx, affected = outcome.affected());
                self.completed += 1;
                render(prompter, &outcome)?;
            }
            Err(err) => {
                log_op_error!(ctx, err.with_op(ctx.op()));
                self.failed += 1;
                prompter.show_error()?;
            }
        }
        Ok(Step::Continue)
    }
}

fn render(prompter: &mut dyn Prompter, outcome: &Outcome) -> PromptResult<()> {
    match outcome {
        Outcome::Listing { table, rows } => {
            prompter.show_table(table.label(), table.headers(), rows)?;
        }
        Outcome::Found { table, result } => {
            let title = format!("{} search results", table.label());
            prompter.show_table(&title, table.headers(), &result.rows)?;
        }
        _ => {}
    }
    if let Some(message) = outcome.message() {
        prompter.show_notice(&message)?;
    }
    Ok(())
}
