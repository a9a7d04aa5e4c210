pub mod bits;
pub mod min_queue;
