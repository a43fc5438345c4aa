/// Source of the host's logical processor count.
///
/// Worker-pool sizing reads this once at startup when a limit is left at 0.
pub trait HostConcurrency: Send + Sync {
    /// Number of logical processors visible to the process.
    ///
    /// 0 is allowed here; resolution rejects the limit it would produce.
    fn logical_cpus(&self) -> usize;
}

/// Host with a fixed processor count.
///
/// Used by the CLI `--cpus` flag and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHost(pub usize);

impl HostConcurrency for FixedHost {
    fn logical_cpus(&self) -> usize {
        self.0
    }
}
