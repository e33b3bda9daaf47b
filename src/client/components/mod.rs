pub mod export_buttons;
pub mod layout;
pub mod navbar;
pub mod notification_bell;
pub mod page;
pub mod pagination_bar;
pub mod stats;
pub mod status_badge;
pub mod status_select;
pub mod ticket_table;
pub mod toast;

pub use export_buttons::ExportButtons;
pub use layout::AppLayout;
pub use navbar::Navbar;
pub use notification_bell::NotificationBell;
pub use page::Page;
pub use pagination_bar::PaginationBar;
pub use stats::{DailyChart, StatCard};
pub use status_badge::{PriorityBadge, SlaBadge, StatusBadge};
pub use status_select::StatusSelect;
pub use ticket_table::TicketTable;
pub use toast::ToastStack;
