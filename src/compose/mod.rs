// Compose invocation: binary selection, argument assembly, execution and teardown

pub mod binary;
pub mod exec;
pub mod guard;
pub mod local;

pub use binary::ComposeBinary;
pub use exec::ExecOutput;
pub use guard::TeardownGuard;
pub use local::LocalDockerCompose;
