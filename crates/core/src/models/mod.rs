pub mod coin;
pub mod input;
pub mod market;
pub mod portfolio;
pub mod settings;
pub mod sort;
pub mod statistic;
pub mod view;
