use std::{collections::VecDeque, thread, time::Duration};

use chrono::{Local, NaiveDateTime};

use crate::sound::NotificationSink;

/// where the runner is in its wait/fire cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// no pending alarms, nothing left to do (terminal)
    Idle,
    /// a one-shot wait is armed for the head of the queue
    Waiting,
    /// the head alarm was just retired and more are queued
    Firing,
}

/// drives the alarm queue to empty, one wait at a time
///
/// alarms fire in ascending order and the queue is never reordered after
/// construction. fired alarms move to a done list kept as an audit trail,
/// so the pending count plus the done count stays constant for the whole
/// run.
#[derive(Debug)]
pub struct AlarmRunner {
    considered: VecDeque<NaiveDateTime>,
    done: Vec<NaiveDateTime>,
    /// instant the active wait was armed at, cleared on fire
    armed_at: Option<NaiveDateTime>,
    phase: Phase,
}

impl AlarmRunner {
    #[must_use]
    pub fn new(considered: VecDeque<NaiveDateTime>) -> Self {
        let phase = if considered.is_empty() {
            Phase::Idle
        } else {
            Phase::Waiting
        };
        Self {
            considered,
            done: Vec::new(),
            armed_at: None,
            phase,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.considered.len()
    }

    #[must_use]
    pub fn fired(&self) -> usize {
        self.done.len()
    }

    /// arms a wait for the head of the queue
    ///
    /// the duration is computed once, here, and is not re-evaluated if the
    /// clock changes mid-wait. an already-due head yields a zero wait.
    /// returns [`None`] once the queue is drained.
    fn arm(&mut self, now: NaiveDateTime) -> Option<Duration> {
        let Some(head) = self.considered.front() else {
            self.phase = Phase::Idle;
            self.armed_at = None;
            return None;
        };
        self.armed_at = Some(now);
        self.phase = Phase::Waiting;
        Some((*head - now).to_std().unwrap_or(Duration::ZERO))
    }

    /// retires the head of the queue onto the done list
    fn fire(&mut self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let head = self.considered.pop_front()?;
        log::info!(
            "alarm for {} fired on {}",
            head.format("%k:%M:%S"),
            now.format("%k:%M:%S")
        );
        self.done.push(head);
        self.armed_at = None;
        self.phase = if self.considered.is_empty() {
            Phase::Idle
        } else {
            Phase::Firing
        };
        Some(head)
    }

    /// waits for and fires every queued alarm in order
    ///
    /// each fire performs exactly one notification; a sink failure is
    /// logged and the next wait is armed anyway. consumes the runner, so
    /// all scheduling state is released on return. returns the audit
    /// trail of fired alarms.
    pub fn run<S: NotificationSink>(mut self, sink: &mut S) -> Vec<NaiveDateTime> {
        loop {
            let now = Local::now().naive_local();
            let Some(wait) = self.arm(now) else { break };
            println!(
                "next alarm at {}",
                self.considered[0].format("%k:%M:%S")
            );
            thread::sleep(wait);
            let now = Local::now().naive_local();
            if let Some(due) = self.fire(now) {
                println!("alarm for {} fired", due.format("%k:%M:%S"));
                if let Err(e) = sink.notify() {
                    log::error!("couldn't play the alarm sound: {e}");
                }
            }
        }
        log::info!("alarm queue drained after {} alarm(s)", self.done.len());
        self.done
    }
}
