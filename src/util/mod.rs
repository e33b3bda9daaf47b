pub mod export;
pub mod filter;
pub mod notification;
pub mod pagination;
pub mod report;
pub mod sla;
pub mod time;

#[cfg(test)]
mod tests;
