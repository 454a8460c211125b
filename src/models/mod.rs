// Domain models (wire shapes shared with the web console)

mod hardware;
mod network;
mod process;
mod snapshot;
mod storage;

pub use hardware::{CpuMetrics, LoadAvg, OsInfo, RamMetrics};
pub use network::NetworkInfo;
pub use process::{ProcessStat, ProcessTop};
pub use snapshot::{ClientSnapshotView, ClientStatus, ClientsResponse, Snapshot};
pub use storage::DiskMetrics;
