// Shared mocking infrastructure for the integration tests: a scripted
// spawner/process pair standing in for HandBrakeCLI.

#![allow(dead_code)]

use ripbatch_core::error::{CoreError, CoreResult};
use ripbatch_core::external::{HandBrakeProcess, HandBrakeSpawner, HANDBRAKE_BIN};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

pub enum MockScript {
    Process { lines: Vec<String>, raw_status: i32 },
    SpawnError,
}

pub struct MockProcess {
    lines: Vec<String>,
    raw_status: i32,
}

impl HandBrakeProcess for MockProcess {
    fn for_each_line<F>(&mut self, mut on_line: F) -> CoreResult<()>
    where
        F: FnMut(&str),
    {
        for line in &self.lines {
            on_line(line);
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(ExitStatus::from_raw(self.raw_status))
    }
}

/// Hands out scripted processes in FIFO order and records every argument
/// vector it was spawned with.
#[derive(Default)]
pub struct MockSpawner {
    scripts: RefCell<VecDeque<MockScript>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Scripts the next spawn: the given output lines, then the given raw
    /// wait status (0 = clean exit, 256 = exit code 1).
    pub fn push_process(&self, lines: &[&str], raw_status: i32) {
        self.scripts.borrow_mut().push_back(MockScript::Process {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            raw_status,
        });
    }

    pub fn push_spawn_error(&self) {
        self.scripts.borrow_mut().push_back(MockScript::SpawnError);
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl HandBrakeSpawner for MockSpawner {
    type Process = MockProcess;

    fn spawn(&self, args: &[String]) -> CoreResult<Self::Process> {
        self.calls.borrow_mut().push(args.to_vec());
        match self.scripts.borrow_mut().pop_front() {
            Some(MockScript::Process { lines, raw_status }) => {
                Ok(MockProcess { lines, raw_status })
            }
            Some(MockScript::SpawnError) => Err(CoreError::CommandStart {
                command: HANDBRAKE_BIN.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock spawn error"),
            }),
            None => panic!("MockSpawner: no scripted process left for args {args:?}"),
        }
    }
}
