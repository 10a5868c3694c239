use crate::{CommandRecord, Stage};

/// Observer notified by the [`Materializer`](crate::Materializer) while a
/// run is in flight.
///
/// Every method defaults to doing nothing. Events already delivered stay
/// valid when a later step fails.
pub trait Progress {
    /// Work towards `stage` is about to start.
    fn stage_started(&mut self, _stage: Stage) {}

    /// A directory exists. `""` is the output root.
    fn directory_created(&mut self, _dir: &str) {}

    fn file_written(&mut self, _path: &str) {}

    /// A package fetch is about to run.
    fn package_started(&mut self, _package: &str) {}

    /// An external command exited successfully.
    fn command_finished(&mut self, _record: &CommandRecord) {}
}

impl Progress for () {}
