pub mod aggregate;
pub mod knowledge_base;
pub mod new_ticket;
pub mod summary;
pub mod table;

pub use aggregate::{SupportData, Ticket, TicketStatus};
pub use knowledge_base::KbArticle;
pub use new_ticket::NewTicketRequest;
