/// View builders for the board window
pub mod card;
pub mod filter_bar;
pub mod grid;
