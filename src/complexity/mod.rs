pub mod state_space;
pub mod structural;
