pub mod cart;
pub mod items;
pub mod system;
