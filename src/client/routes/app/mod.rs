mod audit_logs;
mod billing;
mod categories;
mod dashboard;
mod hotels;
mod plans;
mod privacy;
mod technicians;
mod ticket_detail;

pub use audit_logs::AuditLogs;
pub use billing::Billing;
pub use categories::Categories;
pub use dashboard::Dashboard;
pub use hotels::Hotels;
pub use plans::Plans;
pub use privacy::Privacy;
pub use technicians::Technicians;
pub use ticket_detail::TicketDetail;
