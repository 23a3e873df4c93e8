pub mod accommodation;
pub mod account;
pub mod bookings;
pub mod catalog;
pub mod destination;
pub mod guide;
pub mod numeric;
pub mod timestamps;
pub mod vehicle;
