pub mod booking;
pub mod response;
pub mod ticket_sum;
