//! gRPC server implementations for the RemoteUAC backend.

pub mod health;
pub mod install_svc;


pub use health::HealthService;
pub use install_svc::InstallRequestServiceImpl;
