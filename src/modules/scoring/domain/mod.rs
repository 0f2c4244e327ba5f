mod oracle;

pub use oracle::ScoringOracle;

#[cfg(test)]
pub use oracle::MockScoringOracle;
