pub mod branch;
pub mod de;
pub mod device;
pub mod extra;
pub mod headers;
pub mod probe;

pub use branch::{BranchShape, RuleBranch, SieveRule};
pub use device::{DeviceOps, DeviceRecord, DeviceSpecs};
pub use extra::{ExtraRecord, ExtraSpecs};
pub use headers::HeaderSet;
pub use probe::HardwareProbe;
