pub mod game;
pub mod report;
pub mod solver;

#[cfg(test)]
mod tests;
