use std::num::NonZeroUsize;

use crate::domain::ports::HostConcurrency;

/// The machine the process runs on
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostConcurrency for SystemHost {
    fn logical_cpus(&self) -> usize {
        std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
    }
}
