//! Real HandBrakeCLI process execution.
//!
//! HandBrakeCLI writes its progress to stderr and its banner output to
//! stdout; callers want a single merged stream in arrival order. Both pipes
//! are drained by reader threads that funnel lines into one channel, which
//! [`CliProcess::for_each_line`] consumes incrementally until the process
//! closes its pipes.

use crate::error::{CoreError, CoreResult};
use crate::external::{HandBrakeProcess, HandBrakeSpawner, HANDBRAKE_BIN};

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

/// Spawner for the located HandBrakeCLI binary.
#[derive(Debug, Clone)]
pub struct CliSpawner {
    binary: PathBuf,
}

impl CliSpawner {
    /// Wraps an already-located binary path (see
    /// [`crate::external::locate_handbrake`]).
    pub fn new(binary: PathBuf) -> Self {
        CliSpawner { binary }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl HandBrakeSpawner for CliSpawner {
    type Process = CliProcess;

    fn spawn(&self, args: &[String]) -> CoreResult<Self::Process> {
        log::debug!("spawning {} {}", self.binary.display(), args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CoreError::CommandStart {
                command: HANDBRAKE_BIN.to_string(),
                source: e,
            })?;

        let (tx, rx) = std::sync::mpsc::channel();
        let stdout = BufReader::new(child.stdout.take().unwrap());
        let stderr = BufReader::new(child.stderr.take().unwrap());
        let readers = vec![drain_lines(stdout, tx.clone()), drain_lines(stderr, tx)];

        Ok(CliProcess { child, rx, readers })
    }
}

/// Forwards every line from `reader` into the merged channel. The sender is
/// dropped at EOF, which is what terminates the receiver's iteration.
fn drain_lines<R>(reader: BufReader<R>, tx: Sender<String>) -> JoinHandle<()>
where
    R: std::io::Read + Send + 'static,
{
    std::thread::spawn(move || {
        for line in reader.lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    })
}

/// A running HandBrakeCLI process with its merged output channel.
///
/// Callers must drain [`for_each_line`](HandBrakeProcess::for_each_line)
/// before [`wait`](HandBrakeProcess::wait); waiting first can deadlock on a
/// full pipe buffer.
pub struct CliProcess {
    child: Child,
    rx: Receiver<String>,
    readers: Vec<JoinHandle<()>>,
}

impl HandBrakeProcess for CliProcess {
    fn for_each_line<F>(&mut self, mut on_line: F) -> CoreResult<()>
    where
        F: FnMut(&str),
    {
        // Blocks per line while the process runs; ends once both reader
        // threads hit EOF and drop their senders.
        for line in self.rx.iter() {
            on_line(&line);
        }
        for handle in self.readers.drain(..) {
            let _ = handle.join();
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.child.wait().map_err(|e| CoreError::CommandWait {
            command: HANDBRAKE_BIN.to_string(),
            source: e,
        })
    }
}
