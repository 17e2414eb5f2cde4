//! # sshbox-core
//!
//! Provisioning orchestration for sshbox sandboxes.
//!
//! The [`SandboxProvisioner`] drives one creation call end to end: it
//! validates the request, builds the workload and exposure definitions,
//! submits them to the cluster gateway in order, constructs the resulting
//! sandbox entity, and announces it on the event bus.
//!
//! ## Architecture
//!
//! ```text
//! request ──▶ validate ──▶ build definitions ──▶ ClusterGateway
//!                                                  ├─ create workload
//!                                                  └─ create exposure
//!                              entity + event ──▶ EventPublisher
//!                                                  └─ deployment.created
//! ```
//!
//! Each call is an independent task; no state is shared across concurrent
//! calls. The two cluster mutations and the publish are the only suspension
//! points, and they execute strictly in the order above.

mod provisioner;

pub use provisioner::SandboxProvisioner;
pub use sshbox_common::{CreateSandboxRequest, Error, Result, Sandbox};
