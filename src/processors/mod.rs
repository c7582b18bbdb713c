pub mod parallel_loader;

pub use parallel_loader::ParallelLoader;
