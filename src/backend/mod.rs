/// Backend submodules for the reply scheduler
///
/// - `scheduler`: owns the continuation timers and their abort handles
/// - `handlers`: routes UI actions onto the scheduler
/// - `main_loop`: tokio runtime and the action polling loop
mod handlers;
mod main_loop;
mod scheduler;

pub use main_loop::run_backend;
pub use scheduler::Scheduler;
