pub mod audit;
pub mod interactive;
pub mod known_hosts;
