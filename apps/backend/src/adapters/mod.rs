pub mod consoles_sea;
pub mod games_sea;
