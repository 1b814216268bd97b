//! Orchestration services.

mod invoker;

pub use invoker::InvokerService;
